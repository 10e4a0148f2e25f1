//! Application error types

use saved_requests_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The record store rejected the operation.
    #[error("storage error: {0}")]
    Storage(String),

    /// The project store rejected the operation.
    #[error("project error: {0}")]
    Project(String),

    /// The export module rejected the operation.
    #[error("export error: {0}")]
    Export(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    /// The message shown to the user, without the category prefix.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain(e) => e.to_string(),
            Self::Storage(msg)
            | Self::Project(msg)
            | Self::Export(msg)
            | Self::NotFound(msg) => msg.clone(),
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
