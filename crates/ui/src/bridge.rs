//! Panel Bridge Module
//!
//! Defines the communication protocol between a host view and the async
//! runtime that owns the [`SavedRequestsPanel`].

use saved_requests_application::ExportOutcome;
use saved_requests_domain::{DataTransfer, ExportOptions, ListType, SavedRequestRecord};
use tokio::sync::mpsc;

use crate::capabilities::Deletable;
use crate::dnd::DragEvent;
use crate::error::PanelResult;
use crate::notice::Notice;
use crate::state::{KeyPress, ListEvent, ListRow, MenuAction, PanelOverlays, SavedRequestsPanel};

/// Commands sent from the host view to the panel runtime.
#[derive(Debug, Clone)]
pub enum PanelCommand {
    /// The panel was attached to the view.
    Connect,

    /// The panel was detached from the view.
    Disconnect,

    /// The host loaded a page of saved requests.
    SetRequests(Vec<SavedRequestRecord>),

    /// User toggled drag and drop in the settings.
    SetDraggableEnabled(bool),

    /// User changed the list density.
    SetListType(ListType),

    // --- Selection ---
    /// User toggled the selection of a row.
    ToggleSelection { index: usize },

    /// User selected every row.
    SelectAll,

    /// User cleared the selection.
    ClearSelection,

    // --- List gestures ---
    /// User started dragging a row.
    DragStart { index: usize },

    /// A drag event reached the list.
    Drag(DragEvent),

    /// User asked for the details of a row.
    RequestDetails { index: usize },

    /// User opened a row.
    NavigateItem { index: usize },

    /// The list scrolled near its end.
    ThresholdReached,

    // --- Delete ---
    /// User deleted the selected rows.
    DeleteSelected,

    /// User deleted the request shown in the details sheet.
    DeleteDetails,

    /// User clicked the revert action of the delete toast.
    RevertDeleted,

    // --- Export ---
    /// User picked "Export all" in the main menu.
    OpenExportAll,

    /// User picked "Export selected" in the selection menu.
    ExportSelected,

    /// User closed the export panel.
    CancelExportOptions,

    /// User confirmed the export panel.
    AcceptExportOptions(ExportOptions),

    /// User asked for a backup file from the clear dialog.
    ExportAllFile,

    // --- Delete all ---
    /// User picked "Delete all" in the main menu.
    DeleteAllClick,

    /// User closed the clear dialog.
    ClearDialogResult { confirmed: bool },

    // --- Details and editor ---
    /// User opened the request from the details sheet.
    LoadRequestDetails,

    /// User switched the details sheet to the editor.
    EditRequestDetails,

    /// User closed the editor.
    CancelRequestEdit,

    /// User saved the editor.
    SaveRequestEdit(SavedRequestRecord),

    // --- Projects ---
    /// User picked "Add to project" in the selection menu.
    ProjectSelected,

    /// User closed the project picker.
    CancelAddProject,

    /// User changed the labels in the project picker.
    SetSelectedProjects(Vec<String>),

    /// User pressed a key in the project picker.
    ProjectKeydown(KeyPress),

    /// User confirmed the project picker.
    AddSelectedProject,

    /// The picker needs fresh autocomplete suggestions.
    RefreshProjects,
}

/// Updates sent from the panel runtime to the host view.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelUpdate {
    /// Rows to render.
    Rows(Vec<ListRow>),

    /// Entries of the selection menu; empty hides it.
    SelectionMenu(Vec<MenuAction>),

    /// Overlay visibility and content.
    Overlays(PanelOverlays),

    /// Whether the list is highlighted as a drop target.
    DropTarget(bool),

    /// Markers of a started row drag, `None` when the drag was refused.
    DragStarted(Option<DataTransfer>),

    /// A toast to show.
    Notice(Notice),

    /// Stored data changed; the host should reload the list.
    DataChanged,

    /// The host should load the next page.
    LoadNext,

    /// An export finished.
    Exported(ExportOutcome),

    /// Autocomplete suggestions of the project picker.
    ProjectNames(Vec<String>),
}

/// Runs the panel until every command sender is dropped.
///
/// After each command the runtime publishes pending notices followed by
/// the rows, the selection menu, the overlays and the drop target state.
///
/// # Returns
/// The panel, for the host to inspect or reuse.
pub async fn run_panel_runtime(
    mut panel: SavedRequestsPanel,
    mut cmd_rx: mpsc::UnboundedReceiver<PanelCommand>,
    update_tx: mpsc::UnboundedSender<PanelUpdate>,
) -> SavedRequestsPanel {
    publish(&mut panel, &update_tx);

    while let Some(cmd) = cmd_rx.recv().await {
        tracing::trace!(?cmd, "Panel command");
        match cmd {
            PanelCommand::Connect => panel.connect(),
            PanelCommand::Disconnect => panel.disconnect(),
            PanelCommand::SetRequests(requests) => panel.set_requests(requests),
            PanelCommand::SetDraggableEnabled(enabled) => panel.set_draggable_enabled(enabled),
            PanelCommand::SetListType(list_type) => panel.set_list_type(list_type),

            PanelCommand::ToggleSelection { index } => panel.list_mut().toggle_selection(index),
            PanelCommand::SelectAll => panel.list_mut().select_all(),
            PanelCommand::ClearSelection => panel.list_mut().clear_selection(),

            PanelCommand::DragStart { index } => {
                let mut transfer = DataTransfer::new();
                let started = panel.list().drag_start(index, &mut transfer);
                let _ = update_tx.send(PanelUpdate::DragStarted(started.then_some(transfer)));
            }
            PanelCommand::Drag(mut event) => {
                if let Some(event) = panel.list_mut().handle_drag_event(&mut event) {
                    let saves = matches!(event, ListEvent::SaveRequest(_));
                    let result = panel.handle_list_event(event).await;
                    report(result, &update_tx, saves);
                }
            }
            PanelCommand::RequestDetails { index } => {
                if let Some(event) = panel.list().request_details(index) {
                    forward(&mut panel, event, &update_tx).await;
                }
            }
            PanelCommand::NavigateItem { index } => {
                if let Some(event) = panel.list().navigate_item(index) {
                    forward(&mut panel, event, &update_tx).await;
                }
            }
            PanelCommand::ThresholdReached => {
                if let Some(event) = panel.list().threshold_reached() {
                    forward(&mut panel, event, &update_tx).await;
                }
            }

            PanelCommand::DeleteSelected => {
                let result = panel.delete_selected().await;
                let changed = matches!(result, Ok(count) if count > 0);
                report(result, &update_tx, changed);
            }
            PanelCommand::DeleteDetails => {
                let result = panel.delete_details().await;
                let changed = matches!(result, Ok(count) if count > 0);
                report(result, &update_tx, changed);
            }
            PanelCommand::RevertDeleted => {
                let pending = !panel.latest_deleted().is_empty();
                let result = panel.revert_deleted().await;
                let changed = pending && panel.latest_deleted().is_empty();
                report(result, &update_tx, changed);
            }

            PanelCommand::OpenExportAll => panel.open_export_all(),
            PanelCommand::ExportSelected => panel.export_selected(),
            PanelCommand::CancelExportOptions => panel.cancel_export_options(),
            PanelCommand::AcceptExportOptions(options) => {
                let result = panel.accept_export_options(options).await;
                send_export(result, &update_tx);
            }
            PanelCommand::ExportAllFile => {
                let result = panel.export_all_file().await;
                send_export(result, &update_tx);
            }

            PanelCommand::DeleteAllClick => panel.delete_all_click(),
            PanelCommand::ClearDialogResult { confirmed } => {
                let result = panel.on_clear_dialog_result(confirmed).await;
                let changed = matches!(result, Ok(true));
                report(result, &update_tx, changed);
            }

            PanelCommand::LoadRequestDetails => panel.load_request_details(),
            PanelCommand::EditRequestDetails => panel.edit_request_details(),
            PanelCommand::CancelRequestEdit => panel.cancel_request_edit(),
            PanelCommand::SaveRequestEdit(record) => {
                let result = panel.save_request_edit(record).await;
                report(result, &update_tx, true);
            }

            PanelCommand::ProjectSelected => panel.project_selected(),
            PanelCommand::CancelAddProject => panel.cancel_add_project(),
            PanelCommand::SetSelectedProjects(labels) => panel.set_selected_projects(labels),
            PanelCommand::ProjectKeydown(key) => {
                let result = panel.project_add_keydown(&key).await;
                let changed = matches!(result, Ok(Some(_)));
                report(result, &update_tx, changed);
            }
            PanelCommand::AddSelectedProject => {
                let result = panel.add_selected_project().await;
                report(result, &update_tx, true);
            }
            PanelCommand::RefreshProjects => {
                if panel.refresh_projects().await.is_ok() {
                    let _ = update_tx.send(PanelUpdate::ProjectNames(panel.project_autocomplete()));
                }
            }
        }
        publish(&mut panel, &update_tx);
    }

    tracing::debug!("Panel command channel closed");
    panel
}

async fn forward(
    panel: &mut SavedRequestsPanel,
    event: ListEvent,
    update_tx: &mpsc::UnboundedSender<PanelUpdate>,
) {
    match panel.handle_list_event(event).await {
        Ok(Some(ListEvent::LoadNext)) => {
            let _ = update_tx.send(PanelUpdate::LoadNext);
        }
        Ok(_) => {}
        Err(e) => tracing::debug!(error = %e, "List event failed"),
    }
}

fn report<T>(
    result: PanelResult<T>,
    update_tx: &mpsc::UnboundedSender<PanelUpdate>,
    changed_on_success: bool,
) {
    match result {
        Ok(_) if changed_on_success => {
            let _ = update_tx.send(PanelUpdate::DataChanged);
        }
        Ok(_) => {}
        Err(e) => tracing::debug!(error = %e, "Panel command failed"),
    }
}

fn send_export(
    result: PanelResult<Option<ExportOutcome>>,
    update_tx: &mpsc::UnboundedSender<PanelUpdate>,
) {
    match result {
        Ok(Some(outcome)) => {
            let _ = update_tx.send(PanelUpdate::Exported(outcome));
        }
        Ok(None) => {}
        Err(e) => tracing::debug!(error = %e, "Export failed"),
    }
}

fn publish(panel: &mut SavedRequestsPanel, update_tx: &mpsc::UnboundedSender<PanelUpdate>) {
    for notice in panel.take_notices() {
        let _ = update_tx.send(PanelUpdate::Notice(notice));
    }
    let _ = update_tx.send(PanelUpdate::Rows(panel.list().rows()));
    let _ = update_tx.send(PanelUpdate::SelectionMenu(panel.selection_menu()));
    let _ = update_tx.send(PanelUpdate::Overlays(panel.overlays().clone()));
    let _ = update_tx.send(PanelUpdate::DropTarget(panel.list().is_drop_target()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnd::DragEventKind;
    use crate::state::PanelServices;
    use crate::state::test_support::{MockExporter, MockRecordStore, clock, stored};
    use pretty_assertions::assert_eq;
    use saved_requests_domain::{PanelSettings, REQUEST_OBJECT_TYPE};
    use std::sync::Arc;

    async fn run(
        services: PanelServices,
        commands: Vec<PanelCommand>,
    ) -> (SavedRequestsPanel, Vec<PanelUpdate>) {
        let panel = SavedRequestsPanel::new(services, PanelSettings::default());
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();

        for cmd in commands {
            cmd_tx.send(cmd).expect("runtime alive");
        }
        drop(cmd_tx);

        let panel = run_panel_runtime(panel, cmd_rx, update_tx).await;
        let mut updates = Vec::new();
        while let Ok(update) = update_rx.try_recv() {
            updates.push(update);
        }
        (panel, updates)
    }

    fn count(updates: &[PanelUpdate], wanted: &PanelUpdate) -> usize {
        updates.iter().filter(|u| *u == wanted).count()
    }

    #[tokio::test]
    async fn test_delete_and_revert_flow() {
        let records = Arc::new(MockRecordStore::default());
        let services = PanelServices::new(clock()).with_records(records.clone());

        let (panel, updates) = run(
            services,
            vec![
                PanelCommand::Connect,
                PanelCommand::SetRequests(vec![stored("a"), stored("b")]),
                PanelCommand::ToggleSelection { index: 1 },
                PanelCommand::DeleteSelected,
                PanelCommand::RevertDeleted,
            ],
        )
        .await;

        assert_eq!(*records.deleted.lock().expect("Lock poisoned"), vec!["b".to_string()]);
        assert_eq!(records.restored.lock().expect("Lock poisoned").len(), 1);
        assert_eq!(count(&updates, &PanelUpdate::DataChanged), 2);
        assert_eq!(
            count(&updates, &PanelUpdate::Notice(Notice::Deleted { count: 1 })),
            1
        );
        assert!(panel.latest_deleted().is_empty());
    }

    #[tokio::test]
    async fn test_selection_menu_is_published() {
        let (_, updates) = run(
            PanelServices::new(clock()),
            vec![
                PanelCommand::SetRequests(vec![stored("a")]),
                PanelCommand::ToggleSelection { index: 0 },
            ],
        )
        .await;

        let menus: Vec<&Vec<MenuAction>> = updates
            .iter()
            .filter_map(|u| match u {
                PanelUpdate::SelectionMenu(menu) => Some(menu),
                _ => None,
            })
            .collect();
        assert!(menus[0].is_empty());
        assert_eq!(menus.last().map(|m| m.len()), Some(3));
    }

    #[tokio::test]
    async fn test_drop_saves_and_reports_change() {
        let records = Arc::new(MockRecordStore::default());
        let services = PanelServices::new(clock()).with_records(records.clone());
        let event = DragEvent::new(
            DragEventKind::Drop,
            DataTransfer::with_entries([(REQUEST_OBJECT_TYPE, r#"{"url":"https://x.io","method":"GET"}"#)]),
        );

        let (_, updates) = run(
            services,
            vec![PanelCommand::Connect, PanelCommand::Drag(event)],
        )
        .await;

        assert_eq!(records.saved.lock().expect("Lock poisoned").len(), 1);
        assert_eq!(count(&updates, &PanelUpdate::DataChanged), 1);
    }

    #[tokio::test]
    async fn test_drag_start_publishes_markers() {
        let (_, updates) = run(
            PanelServices::new(clock()),
            vec![
                PanelCommand::SetRequests(vec![stored("a")]),
                PanelCommand::DragStart { index: 0 },
                PanelCommand::DragStart { index: 5 },
            ],
        )
        .await;

        let started: Vec<bool> = updates
            .iter()
            .filter_map(|u| match u {
                PanelUpdate::DragStarted(transfer) => Some(transfer.is_some()),
                _ => None,
            })
            .collect();
        assert_eq!(started, vec![true, false]);
    }

    #[tokio::test]
    async fn test_export_without_module_notifies() {
        let (_, updates) = run(PanelServices::new(clock()), vec![PanelCommand::ExportAllFile]).await;
        assert_eq!(
            count(&updates, &PanelUpdate::Notice(Notice::ExportModuleNotFound)),
            1
        );
    }

    #[tokio::test]
    async fn test_export_outcome_is_published() {
        let services = PanelServices::new(clock()).with_exporter(Arc::new(MockExporter::default()));
        let (_, updates) = run(
            services,
            vec![
                PanelCommand::SetRequests(vec![stored("a")]),
                PanelCommand::SelectAll,
                PanelCommand::ExportSelected,
                PanelCommand::AcceptExportOptions(ExportOptions::for_date(clock().today())),
            ],
        )
        .await;

        assert!(updates.iter().any(|u| matches!(
            u,
            PanelUpdate::Exported(outcome) if outcome.exported == 1
        )));
    }

    #[tokio::test]
    async fn test_rejected_clear_does_not_report_change() {
        let services =
            PanelServices::new(clock()).with_records(Arc::new(MockRecordStore::failing()));
        let (_, updates) = run(
            services,
            vec![
                PanelCommand::DeleteAllClick,
                PanelCommand::ClearDialogResult { confirmed: true },
                PanelCommand::DeleteAllClick,
                PanelCommand::ClearDialogResult { confirmed: false },
            ],
        )
        .await;

        assert_eq!(count(&updates, &PanelUpdate::DataChanged), 0);
        assert_eq!(
            count(&updates, &PanelUpdate::Notice(Notice::DataClearError)),
            1
        );
    }

    #[tokio::test]
    async fn test_confirmed_clear_reports_change() {
        let records = Arc::new(MockRecordStore::default());
        let services = PanelServices::new(clock()).with_records(records.clone());
        let (_, updates) = run(
            services,
            vec![
                PanelCommand::DeleteAllClick,
                PanelCommand::ClearDialogResult { confirmed: true },
            ],
        )
        .await;

        assert_eq!(count(&updates, &PanelUpdate::DataChanged), 1);
    }

    #[tokio::test]
    async fn test_threshold_asks_host_for_next_page() {
        let (_, updates) = run(
            PanelServices::new(clock()),
            vec![
                PanelCommand::SetRequests(vec![stored("a")]),
                PanelCommand::ThresholdReached,
            ],
        )
        .await;
        assert_eq!(count(&updates, &PanelUpdate::LoadNext), 1);
    }
}
