//! Restore deleted records use case.

use std::sync::Arc;

use saved_requests_domain::{DeletedRecord, RecordKind, SavedRequestRecord};

use crate::ApplicationResult;
use crate::ports::RecordStore;

/// Use case for undoing a delete.
pub struct RestoreRecords<S: RecordStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> RestoreRecords<S> {
    /// Creates a new `RestoreRecords` use case.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Restores the records. An empty list is a no-op.
    ///
    /// # Errors
    /// Returns the store's error if a record cannot be restored.
    pub async fn execute(
        &self,
        kind: RecordKind,
        items: &[DeletedRecord],
    ) -> ApplicationResult<Vec<SavedRequestRecord>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        self.store.undelete(kind, items).await
    }
}
