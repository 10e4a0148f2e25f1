//! Clear saved records use case.

use std::sync::Arc;

use saved_requests_domain::RecordKind;

use crate::ApplicationResult;
use crate::ports::RecordStore;

/// Use case that wipes the saved requests model.
pub struct ClearSavedRecords<S: RecordStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> ClearSavedRecords<S> {
    /// Creates a new `ClearSavedRecords` use case.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Removes every saved request. History is left untouched.
    ///
    /// # Errors
    /// Returns the store's error if the model cannot be cleared.
    pub async fn execute(&self) -> ApplicationResult<()> {
        self.store.destroy_models(&[RecordKind::Saved]).await
    }
}
