//! In-memory record and project stores.
//!
//! Both stores keep the revision bookkeeping of the request store format:
//! every write bumps `_rev`, deletes keep a tombstone so the record can be
//! restored with the revision the delete returned.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use saved_requests_application::ports::{ProjectStore, RecordStore};
use saved_requests_application::{ApplicationError, ApplicationResult};
use saved_requests_domain::{
    DeletedRecord, NewProject, Project, RecordKind, SavedRequestRecord, generate_id, next_revision,
};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Partition {
    live: BTreeMap<String, SavedRequestRecord>,
    tombstones: BTreeMap<String, SavedRequestRecord>,
}

impl Partition {
    /// Fails when `record` carries a revision other than the stored one.
    fn check(&self, record: &SavedRequestRecord) -> ApplicationResult<()> {
        let Some(id) = record.id.as_deref() else {
            return Ok(());
        };
        let current = self.live.get(id).and_then(|stored| stored.rev.as_deref());
        match (current, record.rev.as_deref()) {
            (Some(current), Some(given)) if current != given => Err(ApplicationError::Storage(
                format!("document update conflict for {id}"),
            )),
            _ => Ok(()),
        }
    }

    /// Stores `record`, rejecting stale revisions of existing records.
    fn put(&mut self, mut record: SavedRequestRecord) -> ApplicationResult<SavedRequestRecord> {
        self.check(&record)?;
        let id = record.id.clone().unwrap_or_else(generate_id);
        let current = self.live.get(&id).and_then(|stored| stored.rev.clone());

        record.rev = Some(next_revision(current.as_deref().or(record.rev.as_deref())));
        record.id = Some(id.clone());
        self.live.insert(id, record.clone());
        Ok(record)
    }

    /// Stores every record or none of them.
    fn put_all(
        &mut self,
        records: Vec<SavedRequestRecord>,
    ) -> ApplicationResult<Vec<SavedRequestRecord>> {
        for record in &records {
            self.check(record)?;
        }
        records.into_iter().map(|record| self.put(record)).collect()
    }
}

/// Thread-safe in-memory request store, partitioned by [`RecordKind`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    partitions: Arc<RwLock<HashMap<RecordKind, Partition>>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts records into a partition, assigning identifiers where missing.
    ///
    /// # Errors
    /// Returns an error if a record carries a stale revision.
    pub async fn seed(
        &self,
        kind: RecordKind,
        records: Vec<SavedRequestRecord>,
    ) -> ApplicationResult<Vec<SavedRequestRecord>> {
        let mut partitions = self.partitions.write().await;
        partitions.entry(kind).or_default().put_all(records)
    }

    /// Lists live records of a partition, ordered by identifier.
    pub async fn list(&self, kind: RecordKind) -> Vec<SavedRequestRecord> {
        let partitions = self.partitions.read().await;
        partitions
            .get(&kind)
            .map(|p| p.live.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Reads one live record.
    pub async fn get(&self, kind: RecordKind, id: &str) -> Option<SavedRequestRecord> {
        let partitions = self.partitions.read().await;
        partitions.get(&kind).and_then(|p| p.live.get(id).cloned())
    }

    /// Number of live records in a partition.
    pub async fn count(&self, kind: RecordKind) -> usize {
        let partitions = self.partitions.read().await;
        partitions.get(&kind).map_or(0, |p| p.live.len())
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn save(&self, record: SavedRequestRecord) -> ApplicationResult<SavedRequestRecord> {
        let mut partitions = self.partitions.write().await;
        let stored = partitions.entry(RecordKind::Saved).or_default().put(record)?;
        tracing::debug!(id = stored.id_or_empty(), "Request saved");
        Ok(stored)
    }

    async fn delete(
        &self,
        kind: RecordKind,
        ids: &[String],
    ) -> ApplicationResult<BTreeMap<String, String>> {
        let mut partitions = self.partitions.write().await;
        let partition = partitions.entry(kind).or_default();

        if let Some(missing) = ids.iter().find(|id| !partition.live.contains_key(*id)) {
            return Err(ApplicationError::NotFound(format!("{kind} request {missing}")));
        }

        let mut revisions = BTreeMap::new();
        for id in ids {
            if let Some(mut record) = partition.live.remove(id) {
                let rev = next_revision(record.rev.as_deref());
                record.rev = Some(rev.clone());
                partition.tombstones.insert(id.clone(), record);
                revisions.insert(id.clone(), rev);
            }
        }
        Ok(revisions)
    }

    async fn undelete(
        &self,
        kind: RecordKind,
        items: &[DeletedRecord],
    ) -> ApplicationResult<Vec<SavedRequestRecord>> {
        let mut partitions = self.partitions.write().await;
        let partition = partitions.entry(kind).or_default();

        let unknown = items.iter().find(|item| {
            partition
                .tombstones
                .get(&item.id)
                .is_none_or(|tomb| tomb.rev.as_deref() != Some(item.rev.as_str()))
        });
        if let Some(item) = unknown {
            return Err(ApplicationError::NotFound(format!(
                "deleted {kind} request {} at revision {}",
                item.id, item.rev
            )));
        }

        let mut restored = Vec::with_capacity(items.len());
        for item in items {
            if let Some(mut record) = partition.tombstones.remove(&item.id) {
                record.rev = Some(next_revision(Some(&item.rev)));
                partition.live.insert(item.id.clone(), record.clone());
                restored.push(record);
            }
        }
        Ok(restored)
    }

    async fn update_bulk(
        &self,
        kind: RecordKind,
        records: &[SavedRequestRecord],
    ) -> ApplicationResult<Vec<SavedRequestRecord>> {
        let mut partitions = self.partitions.write().await;
        let partition = partitions.entry(kind).or_default();

        if let Some(unsaved) = records.iter().find(|r| r.id.is_none()) {
            return Err(ApplicationError::Storage(format!(
                "cannot update unsaved request '{}'",
                unsaved.display_name()
            )));
        }

        partition.put_all(records.to_vec())
    }

    async fn destroy_models(&self, models: &[RecordKind]) -> ApplicationResult<()> {
        let mut partitions = self.partitions.write().await;
        for kind in models {
            partitions.remove(kind);
        }
        Ok(())
    }
}

/// Thread-safe in-memory project store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn list(&self) -> ApplicationResult<Vec<Project>> {
        Ok(self.projects.read().await.clone())
    }

    async fn create_bulk(&self, projects: Vec<NewProject>) -> ApplicationResult<Vec<Project>> {
        if let Some(unnamed) = projects.iter().position(|p| p.name.trim().is_empty()) {
            return Err(ApplicationError::Project(format!(
                "project at position {unnamed} has no name"
            )));
        }

        let created: Vec<Project> = projects
            .into_iter()
            .map(|p| Project {
                id: generate_id(),
                name: p.name,
                requests: p.requests,
            })
            .collect();

        self.projects.write().await.extend(created.iter().cloned());
        Ok(created)
    }
}
