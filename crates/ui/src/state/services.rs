//! Collaborators wired into the panel.

use std::sync::Arc;

use saved_requests_application::ports::{
    Clock, DataExporter, Navigator, ProjectStore, RecordStore,
};

use crate::error::{Collaborator, PanelError, PanelResult};

/// Ports the panel calls into. A missing collaborator is `None`; operations
/// that need it fail with [`PanelError::ModelNotFound`].
#[derive(Clone)]
pub struct PanelServices {
    /// Record persistence.
    pub records: Option<Arc<dyn RecordStore>>,
    /// Project listing and creation.
    pub projects: Option<Arc<dyn ProjectStore>>,
    /// Export module.
    pub exporter: Option<Arc<dyn DataExporter>>,
    /// Host router.
    pub navigator: Option<Arc<dyn Navigator>>,
    /// Time source for export file names.
    pub clock: Arc<dyn Clock>,
}

impl PanelServices {
    /// Creates services with no collaborators wired.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: None,
            projects: None,
            exporter: None,
            navigator: None,
            clock,
        }
    }

    /// Wires the record store.
    #[must_use]
    pub fn with_records(mut self, records: Arc<dyn RecordStore>) -> Self {
        self.records = Some(records);
        self
    }

    /// Wires the project store.
    #[must_use]
    pub fn with_projects(mut self, projects: Arc<dyn ProjectStore>) -> Self {
        self.projects = Some(projects);
        self
    }

    /// Wires the export module.
    #[must_use]
    pub fn with_exporter(mut self, exporter: Arc<dyn DataExporter>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    /// Wires the host router.
    #[must_use]
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub(crate) fn records(&self) -> PanelResult<Arc<dyn RecordStore>> {
        self.records
            .clone()
            .ok_or(PanelError::ModelNotFound(Collaborator::RecordStore))
    }

    pub(crate) fn projects(&self) -> PanelResult<Arc<dyn ProjectStore>> {
        self.projects
            .clone()
            .ok_or(PanelError::ModelNotFound(Collaborator::ProjectStore))
    }

    pub(crate) fn exporter(&self) -> PanelResult<Arc<dyn DataExporter>> {
        self.exporter
            .clone()
            .ok_or(PanelError::ModelNotFound(Collaborator::Exporter))
    }
}

impl std::fmt::Debug for PanelServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelServices")
            .field("records", &self.records.is_some())
            .field("projects", &self.projects.is_some())
            .field("exporter", &self.exporter.is_some())
            .field("navigator", &self.navigator.is_some())
            .finish_non_exhaustive()
    }
}
