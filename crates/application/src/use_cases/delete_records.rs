//! Delete records use case.

use std::sync::Arc;

use saved_requests_domain::{DeletedRecord, RecordKind};

use crate::ApplicationResult;
use crate::ports::RecordStore;

/// Use case for deleting records while keeping what is needed to restore them.
pub struct DeleteRecords<S: RecordStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> DeleteRecords<S> {
    /// Creates a new `DeleteRecords` use case.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Deletes the records with the given identifiers.
    ///
    /// # Returns
    /// One [`DeletedRecord`] per record the store removed.
    ///
    /// # Errors
    /// Returns the store's error if the delete is rejected.
    pub async fn execute(
        &self,
        kind: RecordKind,
        ids: &[String],
    ) -> ApplicationResult<Vec<DeletedRecord>> {
        let revisions = self.store.delete(kind, ids).await?;
        Ok(DeletedRecord::from_revisions(revisions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MockRecordStore;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_delete_maps_revisions() {
        let store = Arc::new(MockRecordStore::default());
        let use_case = DeleteRecords::new(Arc::clone(&store));

        let deleted = use_case
            .execute(RecordKind::Saved, &["a".to_string(), "b".to_string()])
            .await
            .expect("Should succeed");

        assert_eq!(
            deleted,
            vec![
                DeletedRecord {
                    id: "a".into(),
                    rev: "2-d".into()
                },
                DeletedRecord {
                    id: "b".into(),
                    rev: "2-d".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_propagates_rejection() {
        let use_case = DeleteRecords::new(Arc::new(MockRecordStore::failing()));
        let result = use_case.execute(RecordKind::Saved, &["a".to_string()]).await;
        assert!(result.is_err());
    }
}
