//! Saved Requests Domain - Core types
//!
//! This crate defines the data model of the saved requests panel: records,
//! drag transfer markers, project bookkeeping, export options and settings.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod export;
pub mod id;
pub mod navigation;
pub mod project;
pub mod record;
pub mod settings;
pub mod transfer;

pub use error::{DomainError, DomainResult};
pub use export::{
    ExportOptions, ExportProvider, ExportSelection, ProviderOptions, SAVED_EXPORT_KIND,
    generate_file_name,
};
pub use id::{generate_id, next_revision};
pub use navigation::NavigationTarget;
pub use project::{
    NewProject, Project, ProjectCreationBatch, prepare_project_ids, update_records_projects,
};
pub use record::{DEFAULT_RECORD_NAME, DeletedRecord, RecordKind, SavedRequestRecord};
pub use settings::{ListType, PanelSettings};
pub use transfer::{
    DataTransfer, DropEffect, REQUEST_OBJECT_TYPE, SAVED_PANEL_SOURCE_TYPE, SAVED_REQUEST_TYPE,
};
