//! Export infrastructure.
//!
//! Writes saved requests to export files on the local disk.

mod file_exporter;

pub use file_exporter::{ExportDocument, FileDataExporter};

use saved_requests_application::ApplicationError;
use thiserror::Error;

use crate::serialization::SerializationError;

/// Export error type.
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error while writing the artifact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
    /// The file name is empty or points outside the export directory.
    #[error("Invalid export file name: '{0}'")]
    InvalidFileName(String),
    /// The destination is not handled by this exporter.
    #[error("Export provider '{0}' is not available")]
    UnsupportedProvider(String),
}

impl From<ExportError> for ApplicationError {
    fn from(error: ExportError) -> Self {
        Self::Export(error.to_string())
    }
}
