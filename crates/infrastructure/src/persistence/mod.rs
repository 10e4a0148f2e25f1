//! Persistence adapters
//!
//! In-memory stores for records and projects, and the file backed
//! settings repository.

mod memory_store;
mod settings_repository;

pub use memory_store::{InMemoryProjectStore, InMemoryRecordStore};
pub use settings_repository::{
    DRAGGABLE_ENV, LIST_TYPE_ENV, SettingsError, SettingsRepository, apply_env_overrides,
};
