//! Saved Requests Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits for the collaborators the panel talks to
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, DataExporter, ExportOutcome, Navigator, ProjectStore, RecordStore};
pub use use_cases::{
    AssignProjects, AssignProjectsInput, AssignProjectsOutput, ClearSavedRecords,
    DeleteRecords, ExportRecords, RestoreRecords, SaveRecord,
};
