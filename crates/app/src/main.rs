//! Saved Requests - Main Entry Point
//!
//! Wires the in-memory stores, the file exporter and the panel runtime, then
//! drives a scripted session through the panel bridge and logs what a view
//! would render.

use std::path::PathBuf;
use std::sync::Arc;

use saved_requests_application::ports::{Clock, ProjectStore, RecordStore};
use saved_requests_domain::{DataTransfer, PanelSettings, REQUEST_OBJECT_TYPE, RecordKind};
use saved_requests_infrastructure::{
    FileDataExporter, InMemoryProjectStore, InMemoryRecordStore, RecordGenerator,
    SettingsRepository, SystemClock, TracingNavigator, apply_env_overrides, to_json_stable,
};
use saved_requests_ui::{
    DragEvent, DragEventKind, KeyPress, PanelCommand, PanelServices, PanelUpdate,
    SavedRequestsPanel, run_panel_runtime,
};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Seed of the demo data generator.
const SEED_ENV: &str = "SAVED_REQUESTS_SEED";
/// Directory export files are written to.
const EXPORT_DIR_ENV: &str = "SAVED_REQUESTS_EXPORT_DIR";
const DEFAULT_SEED: u64 = 42;

type HostResult<T> = Result<T, Box<dyn std::error::Error>>;

/// The view side of the bridge: sends commands and renders updates to the log.
struct Host {
    records: Arc<InMemoryRecordStore>,
    cmd_tx: mpsc::UnboundedSender<PanelCommand>,
    update_rx: mpsc::UnboundedReceiver<PanelUpdate>,
}

impl Host {
    /// Sends a command and waits until its updates are rendered. A data
    /// change reloads the list from the store.
    async fn dispatch(&mut self, cmd: PanelCommand) -> HostResult<()> {
        let mut pending = Some(cmd);
        while let Some(cmd) = pending.take() {
            self.cmd_tx
                .send(cmd)
                .map_err(|_| "panel runtime stopped")?;
            if self.render().await? {
                let requests = self.records.list(RecordKind::Saved).await;
                pending = Some(PanelCommand::SetRequests(requests));
            }
        }
        Ok(())
    }

    /// Renders updates up to the end of one publish cycle.
    ///
    /// Returns whether the stored data changed.
    async fn render(&mut self) -> HostResult<bool> {
        let mut changed = false;
        loop {
            let update = self
                .update_rx
                .recv()
                .await
                .ok_or("panel runtime stopped")?;
            match update {
                PanelUpdate::DropTarget(_) => return Ok(changed),
                PanelUpdate::DataChanged => changed = true,
                PanelUpdate::Notice(notice) if notice.is_error() => {
                    tracing::warn!(%notice, "Toast");
                }
                PanelUpdate::Notice(notice) => tracing::info!(%notice, "Toast"),
                PanelUpdate::Rows(rows) => {
                    for row in &rows {
                        tracing::debug!(method = %row.method, url = %row.url, name = %row.name, selected = row.selected, "Row");
                    }
                }
                PanelUpdate::SelectionMenu(menu) => {
                    let entries: Vec<&str> = menu.iter().map(|a| a.as_str()).collect();
                    tracing::debug!(?entries, "Selection menu");
                }
                PanelUpdate::Overlays(overlays) => tracing::debug!(?overlays, "Overlays"),
                PanelUpdate::DragStarted(transfer) => {
                    tracing::debug!(started = transfer.is_some(), "Drag started");
                }
                PanelUpdate::LoadNext => tracing::debug!("Every saved request is loaded"),
                PanelUpdate::Exported(outcome) => tracing::info!(
                    exported = outcome.exported,
                    location = ?outcome.location,
                    "Export written"
                ),
                PanelUpdate::ProjectNames(names) => tracing::info!(?names, "Project suggestions"),
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting saved requests v{}", env!("CARGO_PKG_VERSION"));

    // Settings
    let settings = match SettingsRepository::new().load().await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "Unable to load settings, using defaults");
            PanelSettings::default()
        }
    };
    let settings = apply_env_overrides(settings, |name| std::env::var(name).ok());

    // Collaborators
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let records = Arc::new(InMemoryRecordStore::new());
    let projects = Arc::new(InMemoryProjectStore::new());
    let export_dir = std::env::var_os(EXPORT_DIR_ENV).map_or_else(
        || std::env::temp_dir().join("saved-requests-exports"),
        PathBuf::from,
    );
    let exporter = Arc::new(FileDataExporter::new(
        export_dir,
        Arc::clone(&records),
        Arc::clone(&clock),
    ));

    // Demo data
    let seed = std::env::var(SEED_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let mut generator = RecordGenerator::new(seed);
    let saved = records
        .seed(RecordKind::Saved, generator.generate_requests(6))
        .await?;
    let history = records
        .seed(RecordKind::History, generator.generate_history(3))
        .await?;
    let known = projects.create_bulk(generator.generate_projects(2)).await?;
    tracing::info!(
        saved = saved.len(),
        history = history.len(),
        projects = known.len(),
        "Demo data ready"
    );

    let record_store: Arc<dyn RecordStore> = records.clone();
    let services = PanelServices::new(clock)
        .with_records(record_store)
        .with_projects(projects)
        .with_exporter(exporter)
        .with_navigator(Arc::new(TracingNavigator::new()));
    let panel = SavedRequestsPanel::new(services, settings);

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let runtime = tokio::spawn(run_panel_runtime(panel, cmd_rx, update_tx));

    let mut host = Host {
        records: Arc::clone(&records),
        cmd_tx,
        update_rx,
    };
    host.render().await?;

    host.dispatch(PanelCommand::Connect).await?;
    host.dispatch(PanelCommand::SetRequests(saved)).await?;

    // A history entry dragged onto the list becomes a saved request.
    if let Some(entry) = history.first() {
        let transfer = DataTransfer::with_entries([(REQUEST_OBJECT_TYPE, to_json_stable(entry)?)]);
        host.dispatch(PanelCommand::Drag(DragEvent::new(DragEventKind::DragOver, transfer.clone())))
            .await?;
        host.dispatch(PanelCommand::Drag(DragEvent::new(DragEventKind::Drop, transfer)))
            .await?;
    }
    host.dispatch(PanelCommand::DragStart { index: 0 }).await?;

    // Delete two requests, then undo.
    host.dispatch(PanelCommand::ToggleSelection { index: 0 }).await?;
    host.dispatch(PanelCommand::ToggleSelection { index: 1 }).await?;
    host.dispatch(PanelCommand::DeleteSelected).await?;
    host.dispatch(PanelCommand::RevertDeleted).await?;

    // Details, then open it in the host.
    host.dispatch(PanelCommand::RequestDetails { index: 0 }).await?;
    host.dispatch(PanelCommand::LoadRequestDetails).await?;

    // Add a request to an existing and a new project.
    host.dispatch(PanelCommand::ToggleSelection { index: 2 }).await?;
    host.dispatch(PanelCommand::ProjectSelected).await?;
    host.dispatch(PanelCommand::RefreshProjects).await?;
    let mut labels: Vec<String> = known.iter().take(1).map(|p| p.name.clone()).collect();
    labels.push("Demo".to_string());
    host.dispatch(PanelCommand::SetSelectedProjects(labels)).await?;
    host.dispatch(PanelCommand::ProjectKeydown(KeyPress::new("Enter").with_ctrl()))
        .await?;

    // Backup, then clear the data store.
    host.dispatch(PanelCommand::ExportAllFile).await?;
    host.dispatch(PanelCommand::DeleteAllClick).await?;
    host.dispatch(PanelCommand::ClearDialogResult { confirmed: true })
        .await?;
    host.dispatch(PanelCommand::ThresholdReached).await?;
    host.dispatch(PanelCommand::Disconnect).await?;

    let Host { cmd_tx, .. } = host;
    drop(cmd_tx);
    let panel = runtime.await?;

    tracing::info!(
        listed = panel.list().len(),
        stored = records.count(RecordKind::Saved).await,
        "Session finished"
    );
    Ok(())
}
