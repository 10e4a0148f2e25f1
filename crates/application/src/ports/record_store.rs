//! Record store port
//!
//! Defines the interface of the component that persists request records.

use std::collections::BTreeMap;

use async_trait::async_trait;
use saved_requests_domain::{DeletedRecord, RecordKind, SavedRequestRecord};

use crate::ApplicationResult;

/// Persistence collaborator for request records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates or updates one record.
    ///
    /// Records without an identifier are created. Returns the stored record
    /// with its identifier and new revision.
    ///
    /// # Errors
    /// Returns an error if the record cannot be stored.
    async fn save(&self, record: SavedRequestRecord) -> ApplicationResult<SavedRequestRecord>;

    /// Deletes records by identifier.
    ///
    /// # Returns
    /// A map of deleted identifier to the revision of the deletion, used to
    /// restore the records.
    ///
    /// # Errors
    /// Returns an error if the records cannot be deleted.
    async fn delete(
        &self,
        kind: RecordKind,
        ids: &[String],
    ) -> ApplicationResult<BTreeMap<String, String>>;

    /// Restores previously deleted records.
    ///
    /// # Errors
    /// Returns an error if a record cannot be restored.
    async fn undelete(
        &self,
        kind: RecordKind,
        items: &[DeletedRecord],
    ) -> ApplicationResult<Vec<SavedRequestRecord>>;

    /// Stores a batch of changed records.
    ///
    /// # Errors
    /// Returns an error if the batch cannot be stored.
    async fn update_bulk(
        &self,
        kind: RecordKind,
        records: &[SavedRequestRecord],
    ) -> ApplicationResult<Vec<SavedRequestRecord>>;

    /// Removes every record of the named models.
    ///
    /// # Errors
    /// Returns an error if a model cannot be cleared.
    async fn destroy_models(&self, models: &[RecordKind]) -> ApplicationResult<()>;
}
