//! Save record use case.

use std::sync::Arc;

use saved_requests_domain::SavedRequestRecord;

use crate::ApplicationResult;
use crate::ports::RecordStore;

/// Use case for storing one record, new or edited.
pub struct SaveRecord<S: RecordStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> SaveRecord<S> {
    /// Creates a new `SaveRecord` use case.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Stores the record and returns it as persisted.
    ///
    /// # Errors
    /// Returns the store's error if it rejects the record.
    pub async fn execute(&self, record: SavedRequestRecord) -> ApplicationResult<SavedRequestRecord> {
        self.store.save(record).await
    }
}
