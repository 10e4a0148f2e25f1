//! Panel error types

use saved_requests_application::ApplicationError;
use thiserror::Error;

/// Collaborators the panel calls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collaborator {
    /// Persists and deletes request records.
    RecordStore,
    /// Lists and creates projects.
    ProjectStore,
    /// Produces export artifacts.
    Exporter,
    /// Routes to a request in the host.
    Navigator,
}

impl std::fmt::Display for Collaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::RecordStore => "record store",
            Self::ProjectStore => "project store",
            Self::Exporter => "export module",
            Self::Navigator => "navigator",
        })
    }
}

/// Failure of a panel operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// No collaborator is wired for the operation.
    #[error("{0} not found")]
    ModelNotFound(Collaborator),

    /// The collaborator rejected the operation.
    #[error(transparent)]
    Rejected(#[from] ApplicationError),

    /// The operation needs selected requests and there are none.
    #[error("no requests selected")]
    EmptySelection,
}

/// Result type alias for panel operations.
pub type PanelResult<T> = Result<T, PanelError>;
