//! Saved requests panel controller.
//!
//! Composes the list with the panel menus and overlays: details, editor,
//! project picker, export options and the clear data dialog. Every action
//! that needs a collaborator goes through [`PanelServices`]; outcomes the
//! user should see are queued as [`Notice`]s.

use std::sync::Arc;

use async_trait::async_trait;
use saved_requests_application::ports::{ProjectStore, RecordStore};
use saved_requests_application::{
    AssignProjects, AssignProjectsInput, ClearSavedRecords, DeleteRecords, ExportOutcome,
    ExportRecords, RestoreRecords, SaveRecord,
};
use saved_requests_domain::{
    DeletedRecord, ExportOptions, ExportSelection, ListType, NavigationTarget,
    PanelSettings, Project, ProjectCreationBatch, ProviderOptions, RecordKind, SavedRequestRecord,
};

use super::saved_list::{ListEvent, SavedPanelList};
use super::services::PanelServices;
use crate::capabilities::{Deletable, Exportable, ProjectAssociable, Selectable};
use crate::dnd::DragEvent;
use crate::error::{Collaborator, PanelError, PanelResult};
use crate::notice::Notice;

/// Store partition this panel works on.
const KIND: RecordKind = RecordKind::Saved;

/// Menu entries of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Export every saved request.
    ExportAll,
    /// Clear the saved requests data store.
    DeleteAll,
    /// Export the selected requests.
    ExportSelected,
    /// Delete the selected requests.
    DeleteSelected,
    /// Add the selected requests to projects.
    ProjectSelected,
}

impl MenuAction {
    /// Identifier of the menu entry.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExportAll => "export-all",
            Self::DeleteAll => "delete-all",
            Self::ExportSelected => "export-selected",
            Self::DeleteSelected => "delete-selected",
            Self::ProjectSelected => "project-selected",
        }
    }
}

/// A key press in the project picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Key name, e.g. `"Enter"`.
    pub key: String,
    /// Control modifier.
    pub ctrl: bool,
    /// Meta (command) modifier.
    pub meta: bool,
}

impl KeyPress {
    /// A key press without modifiers.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    /// Adds the control modifier.
    #[must_use]
    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Adds the meta modifier.
    #[must_use]
    pub const fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Ctrl+Enter or Meta+Enter.
    #[must_use]
    pub fn is_submit(&self) -> bool {
        self.key == "Enter" && (self.ctrl || self.meta)
    }
}

/// Overlays rendered over the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelOverlays {
    /// Request shown in the details sheet.
    pub details: Option<SavedRequestRecord>,
    /// Request loaded in the editor sheet.
    pub editor: Option<SavedRequestRecord>,
    /// Project picker.
    pub project_picker: bool,
    /// Export options panel.
    pub export_options: bool,
    /// Clear data store confirmation.
    pub clear_dialog: bool,
}

/// Controller of the saved requests panel.
#[derive(Debug)]
pub struct SavedRequestsPanel {
    list: SavedPanelList,
    services: PanelServices,
    settings: PanelSettings,
    overlays: PanelOverlays,
    latest_deleted: Vec<DeletedRecord>,
    export_items: Option<ExportSelection>,
    selected_projects: Vec<String>,
    known_projects: Vec<Project>,
    notices: Vec<Notice>,
}

impl SavedRequestsPanel {
    /// Creates a panel with an empty list.
    #[must_use]
    pub fn new(services: PanelServices, settings: PanelSettings) -> Self {
        Self {
            list: SavedPanelList::new(settings.list_type, settings.draggable_enabled),
            services,
            settings,
            overlays: PanelOverlays::default(),
            latest_deleted: Vec::new(),
            export_items: None,
            selected_projects: Vec::new(),
            known_projects: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Called when the panel is shown.
    pub fn connect(&mut self) {
        self.list.connect();
    }

    /// Called when the panel is hidden.
    pub fn disconnect(&mut self) {
        self.list.disconnect();
    }

    /// The list.
    #[must_use]
    pub const fn list(&self) -> &SavedPanelList {
        &self.list
    }

    /// The list, for selection gestures.
    pub const fn list_mut(&mut self) -> &mut SavedPanelList {
        &mut self.list
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> &PanelSettings {
        &self.settings
    }

    /// Overlay state.
    #[must_use]
    pub const fn overlays(&self) -> &PanelOverlays {
        &self.overlays
    }

    /// Records deleted by the last delete, kept for revert.
    #[must_use]
    pub fn latest_deleted(&self) -> &[DeletedRecord] {
        &self.latest_deleted
    }

    /// Pending notices.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drains pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Replaces the listed requests.
    pub fn set_requests(&mut self, requests: Vec<SavedRequestRecord>) {
        self.list.set_requests(requests);
    }

    /// Turns drag and drop on or off.
    pub fn set_draggable_enabled(&mut self, enabled: bool) {
        self.settings.draggable_enabled = enabled;
        self.list.set_draggable_enabled(enabled);
    }

    /// Changes the row density.
    pub const fn set_list_type(&mut self, list_type: ListType) {
        self.settings.list_type = list_type;
        self.list.set_list_type(list_type);
    }

    // --- List events ---

    /// Delivers a drag event to the list and acts on a resulting drop.
    ///
    /// # Errors
    /// Fails when a dropped request cannot be stored.
    pub async fn handle_drag_event(&mut self, event: &mut DragEvent) -> PanelResult<()> {
        if let Some(list_event) = self.list.handle_drag_event(event) {
            self.handle_list_event(list_event).await?;
        }
        Ok(())
    }

    /// Acts on a list event.
    ///
    /// # Returns
    /// Events the panel leaves to its host, i.e. [`ListEvent::LoadNext`].
    ///
    /// # Errors
    /// Fails when a dropped request cannot be stored.
    pub async fn handle_list_event(&mut self, event: ListEvent) -> PanelResult<Option<ListEvent>> {
        match event {
            ListEvent::SaveRequest(record) => {
                self.save_request(record).await?;
                Ok(None)
            }
            ListEvent::Details(record) => {
                self.open_details(record);
                Ok(None)
            }
            ListEvent::Navigate(target) => {
                self.navigate(target);
                Ok(None)
            }
            ListEvent::LoadNext => Ok(Some(ListEvent::LoadNext)),
        }
    }

    /// Stores a request as a new saved request.
    ///
    /// # Errors
    /// Fails when no record store is wired or the store rejects the request.
    pub async fn save_request(&mut self, record: SavedRequestRecord) -> PanelResult<SavedRequestRecord> {
        let store = self.record_store()?;
        match SaveRecord::new(store).execute(record).await {
            Ok(saved) => {
                tracing::info!(id = saved.id_or_empty(), "Request saved");
                Ok(saved)
            }
            Err(e) => Err(self.reject(e, "Unable to save request")),
        }
    }

    fn navigate(&mut self, target: NavigationTarget) {
        self.overlays.details = None;
        match &self.services.navigator {
            Some(navigator) => navigator.navigate(target),
            None => tracing::debug!(id = %target.id, "No navigator, ignoring navigation"),
        }
    }

    // --- Selection menu ---

    /// Main menu entries.
    #[must_use]
    pub fn main_menu(&self) -> Vec<MenuAction> {
        vec![MenuAction::ExportAll, MenuAction::DeleteAll]
    }

    /// Selection menu entries. Empty without a selection.
    #[must_use]
    pub fn selection_menu(&self) -> Vec<MenuAction> {
        if self.list.has_selection() {
            vec![
                MenuAction::ExportSelected,
                MenuAction::DeleteSelected,
                MenuAction::ProjectSelected,
            ]
        } else {
            Vec::new()
        }
    }

    // --- Delete ---

    /// Deletes the selected requests. Does nothing without a selection.
    ///
    /// # Errors
    /// Fails when no record store is wired or the store rejects the delete.
    pub async fn delete_selected(&mut self) -> PanelResult<usize> {
        let items = self.list.selected_items();
        if items.is_empty() {
            return Ok(0);
        }
        self.delete(items).await
    }

    /// Deletes the request shown in the details sheet and closes it.
    ///
    /// # Errors
    /// Fails when no record store is wired or the store rejects the delete.
    pub async fn delete_details(&mut self) -> PanelResult<usize> {
        let Some(record) = self.overlays.details.take() else {
            return Ok(0);
        };
        self.delete(vec![record]).await
    }

    // --- Export ---

    /// Default options of the export panel.
    #[must_use]
    pub fn export_defaults(&self) -> ExportOptions {
        ExportOptions {
            provider: self.settings.export_provider,
            provider_options: ProviderOptions {
                parents: self.settings.drive_parents.clone(),
            },
            ..ExportOptions::for_date(self.services.clock.today())
        }
    }

    /// Toggles the export panel for all requests.
    pub fn open_export_all(&mut self) {
        self.overlays.export_options = !self.overlays.export_options;
        self.export_items = Some(ExportSelection::All);
    }

    /// Opens the export panel for the selected requests.
    pub fn export_selected(&mut self) {
        self.overlays.export_options = true;
        self.export_items = Some(ExportSelection::Items(self.list.selected_items()));
    }

    /// Closes the export panel and forgets what was going to be exported.
    pub fn cancel_export_options(&mut self) {
        self.overlays.export_options = false;
        if matches!(self.export_items.take(), Some(ExportSelection::Items(_))) {
            self.list.clear_selection();
        }
    }

    /// Closes the export panel and exports with the chosen options.
    ///
    /// Exports everything when the panel was not opened through a menu.
    ///
    /// # Errors
    /// Fails when no export module is wired.
    pub async fn accept_export_options(
        &mut self,
        options: ExportOptions,
    ) -> PanelResult<Option<ExportOutcome>> {
        self.overlays.export_options = false;
        let selection = self.export_items.clone().unwrap_or_default();
        self.export_items(selection, options).await
    }

    /// Exports every saved request to a file with the default name.
    ///
    /// # Errors
    /// Fails when no export module is wired.
    pub async fn export_all_file(&mut self) -> PanelResult<Option<ExportOutcome>> {
        let options = ExportOptions::for_date(self.services.clock.today());
        self.export_items(ExportSelection::All, options).await
    }

    // --- Delete all ---

    /// Opens the clear data store confirmation.
    pub const fn delete_all_click(&mut self) {
        self.overlays.clear_dialog = true;
    }

    /// Closes the confirmation and clears the saved requests when confirmed.
    ///
    /// Returns whether the saved requests were cleared.
    ///
    /// # Errors
    /// Fails when no record store is wired. A rejected clear is reported
    /// through [`Notice::DataClearError`] only.
    pub async fn on_clear_dialog_result(&mut self, confirmed: bool) -> PanelResult<bool> {
        self.overlays.clear_dialog = false;
        if !confirmed {
            return Ok(false);
        }
        let Ok(store) = self.services.records() else {
            tracing::warn!("No record store, unable to clear saved requests");
            self.notices.push(Notice::DataClearError);
            return Err(PanelError::ModelNotFound(Collaborator::RecordStore));
        };
        match ClearSavedRecords::new(store).execute().await {
            Ok(()) => {
                tracing::info!("Saved requests cleared");
                self.list.set_requests(Vec::new());
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unable to clear saved requests");
                self.notices.push(Notice::DataClearError);
                Ok(false)
            }
        }
    }

    // --- Details and editor ---

    /// Shows a request in the details sheet.
    pub fn open_details(&mut self, record: SavedRequestRecord) {
        self.overlays.details = Some(record);
    }

    /// Opens the request shown in the details sheet and closes the sheet.
    pub fn load_request_details(&mut self) {
        if let Some(record) = self.overlays.details.as_ref() {
            let target = NavigationTarget::saved_request(record.id_or_empty());
            self.navigate(target);
        }
        self.overlays.details = None;
    }

    /// Moves the request from the details sheet into the editor.
    pub fn edit_request_details(&mut self) {
        if let Some(mut record) = self.overlays.details.take() {
            record.kind = Some(KIND.as_str().to_string());
            self.overlays.editor = Some(record);
        }
    }

    /// Closes the editor without saving.
    pub fn cancel_request_edit(&mut self) {
        self.overlays.editor = None;
    }

    /// Saves the edited request and closes the editor.
    ///
    /// # Errors
    /// Fails when no record store is wired or the store rejects the request.
    pub async fn save_request_edit(
        &mut self,
        record: SavedRequestRecord,
    ) -> PanelResult<SavedRequestRecord> {
        self.overlays.editor = None;
        let saved = self.save_request(record).await?;
        self.list.replace_records(std::slice::from_ref(&saved));
        Ok(saved)
    }

    // --- Projects ---

    /// Opens the project picker when there is a selection.
    pub fn project_selected(&mut self) {
        if self.list.has_selection() {
            self.overlays.project_picker = true;
        }
    }

    /// Closes the project picker.
    pub fn cancel_add_project(&mut self) {
        self.overlays.project_picker = false;
        self.selected_projects.clear();
        self.list.clear_selection();
    }

    /// Project labels entered in the picker.
    pub fn set_selected_projects(&mut self, labels: Vec<String>) {
        self.selected_projects = labels;
    }

    /// Labels entered in the picker.
    #[must_use]
    pub fn selected_projects(&self) -> &[String] {
        &self.selected_projects
    }

    /// Projects known from the last refresh.
    #[must_use]
    pub fn known_projects(&self) -> &[Project] {
        &self.known_projects
    }

    /// Names offered by the picker's autocomplete.
    #[must_use]
    pub fn project_autocomplete(&self) -> Vec<String> {
        self.known_projects.iter().map(|p| p.name.clone()).collect()
    }

    /// Reloads the known projects.
    ///
    /// # Errors
    /// Fails when no project store is wired or it rejects the query.
    pub async fn refresh_projects(&mut self) -> PanelResult<usize> {
        let store = self.project_store()?;
        match store.list().await {
            Ok(projects) => {
                self.known_projects = projects;
                Ok(self.known_projects.len())
            }
            Err(e) => Err(self.reject(e, "Unable to list projects")),
        }
    }

    /// Handles a key press in the picker. Ctrl+Enter or Meta+Enter adds the
    /// selection to the entered projects.
    ///
    /// # Errors
    /// See [`Self::add_selected_project`].
    pub async fn project_add_keydown(
        &mut self,
        key: &KeyPress,
    ) -> PanelResult<Option<Vec<SavedRequestRecord>>> {
        if !key.is_submit() {
            return Ok(None);
        }
        self.add_selected_project().await.map(Some)
    }

    /// Adds the selection to the projects entered in the picker.
    ///
    /// # Errors
    /// Fails on an empty selection, a missing store or a rejected update.
    pub async fn add_selected_project(&mut self) -> PanelResult<Vec<SavedRequestRecord>> {
        let labels = self.selected_projects.clone();
        self.add_to_projects(labels).await
    }

    // --- Helpers ---

    fn record_store(&mut self) -> PanelResult<Arc<dyn RecordStore>> {
        self.services
            .records()
            .inspect_err(|_| self.notices.push(Notice::ModelNotFound))
    }

    fn project_store(&mut self) -> PanelResult<Arc<dyn ProjectStore>> {
        self.services
            .projects()
            .inspect_err(|_| self.notices.push(Notice::ModelNotFound))
    }

    fn reject(
        &mut self,
        error: saved_requests_application::ApplicationError,
        message: &str,
    ) -> PanelError {
        tracing::warn!(error = %error, "{message}");
        self.notices.push(Notice::Error(error.user_message()));
        error.into()
    }
}

impl Selectable for SavedRequestsPanel {
    fn selected_items(&self) -> Vec<SavedRequestRecord> {
        self.list.selected_items()
    }

    fn has_selection(&self) -> bool {
        self.list.has_selection()
    }

    fn clear_selection(&mut self) {
        self.list.clear_selection();
    }
}

#[async_trait]
impl Deletable for SavedRequestsPanel {
    async fn delete(&mut self, items: Vec<SavedRequestRecord>) -> PanelResult<usize> {
        let store = self.record_store()?;
        let ids: Vec<String> = items.iter().filter_map(|r| r.id.clone()).collect();
        if ids.is_empty() {
            return Ok(0);
        }

        match DeleteRecords::new(store).execute(KIND, &ids).await {
            Ok(deleted) => {
                let count = deleted.len();
                tracing::info!(count, "Saved requests deleted");
                self.latest_deleted = deleted;
                self.list.clear_selection();
                self.notices.push(Notice::Deleted { count });
                Ok(count)
            }
            Err(e) => Err(self.reject(e, "Unable to delete saved requests")),
        }
    }

    async fn revert_deleted(&mut self) -> PanelResult<()> {
        self.notices.retain(|notice| !notice.has_revert_action());
        if self.latest_deleted.is_empty() {
            return Ok(());
        }
        let store = self.record_store()?;

        match RestoreRecords::new(store)
            .execute(KIND, &self.latest_deleted)
            .await
        {
            Ok(restored) => {
                tracing::info!(count = restored.len(), "Deleted requests restored");
                self.latest_deleted.clear();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unable to restore deleted requests");
                self.notices.push(Notice::RevertError);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Exportable for SavedRequestsPanel {
    async fn export_items(
        &mut self,
        selection: ExportSelection,
        options: ExportOptions,
    ) -> PanelResult<Option<ExportOutcome>> {
        let Ok(exporter) = self.services.exporter() else {
            self.notices.push(Notice::ExportModuleNotFound);
            return Err(PanelError::ModelNotFound(Collaborator::Exporter));
        };
        let is_drive = options.is_drive();
        let selected = matches!(selection, ExportSelection::Items(_));

        match ExportRecords::new(exporter).execute(selection, options).await {
            Ok(outcome) => {
                tracing::info!(exported = outcome.exported, "Saved requests exported");
                if is_drive {
                    self.notices.push(Notice::DriveSaved);
                }
                self.export_items = None;
                if selected {
                    self.list.clear_selection();
                }
                Ok(Some(outcome))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unable to export saved requests");
                self.notices.push(Notice::Error(e.user_message()));
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl ProjectAssociable for SavedRequestsPanel {
    async fn add_to_projects(&mut self, labels: Vec<String>) -> PanelResult<Vec<SavedRequestRecord>> {
        let records = self.list.selected_items();
        if records.is_empty() {
            return Err(PanelError::EmptySelection);
        }
        self.overlays.project_picker = false;

        let creates = !ProjectCreationBatch::partition(&labels, &self.known_projects)
            .add
            .is_empty();
        let stores = match self.record_store() {
            Ok(store) if creates => self.project_store().map(|projects| (store, Some(projects))),
            Ok(store) => Ok((store, None)),
            Err(e) => Err(e),
        };
        let (record_store, project_store) = match stores {
            Ok(stores) => stores,
            Err(e) => {
                self.notices.push(Notice::ProjectUpdateError);
                return Err(e);
            }
        };

        let input = AssignProjectsInput {
            records,
            labels,
            known_projects: self.known_projects.clone(),
        };
        match AssignProjects::new(record_store, project_store)
            .execute(input)
            .await
        {
            Ok(output) => {
                tracing::info!(
                    count = output.records.len(),
                    created = output.created.len(),
                    "Requests added to projects"
                );
                self.known_projects.extend(output.created);
                self.list.replace_records(&output.records);
                self.list.clear_selection();
                self.selected_projects.clear();
                Ok(output.records)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unable to add requests to projects");
                self.notices.push(Notice::ProjectUpdateError);
                Err(e.into())
            }
        }
    }
}
