//! Saved Requests Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the settings repository and a
//! demo data generator used by the binary.

pub mod adapters;
pub mod export;
pub mod generator;
pub mod persistence;
pub mod serialization;

pub use adapters::{FixedClock, SystemClock, TracingNavigator};
pub use export::{ExportDocument, ExportError, FileDataExporter};
pub use generator::RecordGenerator;
pub use persistence::{
    DRAGGABLE_ENV, InMemoryProjectStore, InMemoryRecordStore, LIST_TYPE_ENV, SettingsError,
    SettingsRepository, apply_env_overrides,
};
pub use serialization::{
    SerializationError, from_json, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
