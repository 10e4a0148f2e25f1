//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A drag transfer payload could not be read as a request record.
    #[error("malformed transfer payload: {0}")]
    MalformedTransfer(String),

    /// A record could not be serialized for a transfer.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A settings value could not be interpreted.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
