//! Export port

use std::path::PathBuf;

use async_trait::async_trait;
use saved_requests_domain::{ExportOptions, ExportProvider, ExportSelection};

use crate::ApplicationResult;

/// Result of a finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Destination the artifact was written to.
    pub provider: ExportProvider,
    /// Location of the artifact, when the provider has a local one.
    pub location: Option<PathBuf>,
    /// Number of exported records.
    pub exported: usize,
}

/// Collaborator that produces export artifacts.
#[async_trait]
pub trait DataExporter: Send + Sync {
    /// Exports the selected records with the given options.
    ///
    /// # Errors
    /// Returns an error if the artifact cannot be produced.
    async fn export(
        &self,
        selection: ExportSelection,
        options: ExportOptions,
    ) -> ApplicationResult<ExportOutcome>;
}
