//! In-process collaborators for use case tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use saved_requests_domain::{
    DeletedRecord, ExportOptions, ExportSelection, NewProject, Project, RecordKind,
    SavedRequestRecord,
};

use crate::ports::{DataExporter, ExportOutcome, ProjectStore, RecordStore};
use crate::{ApplicationError, ApplicationResult};

/// Record store that remembers every call and can be told to fail.
#[derive(Default)]
pub struct MockRecordStore {
    pub saved: Mutex<Vec<SavedRequestRecord>>,
    pub deleted: Mutex<Vec<String>>,
    pub restored: Mutex<Vec<DeletedRecord>>,
    pub updated: Mutex<Vec<SavedRequestRecord>>,
    pub destroyed: Mutex<Vec<RecordKind>>,
    pub fail: bool,
}

impl MockRecordStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> ApplicationResult<()> {
        if self.fail {
            Err(ApplicationError::Storage("store offline".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn save(&self, mut record: SavedRequestRecord) -> ApplicationResult<SavedRequestRecord> {
        self.check()?;
        record.id.get_or_insert_with(|| "new-id".to_string());
        record.rev = Some("1-a".to_string());
        self.saved.lock().expect("Lock poisoned").push(record.clone());
        Ok(record)
    }

    async fn delete(
        &self,
        _kind: RecordKind,
        ids: &[String],
    ) -> ApplicationResult<BTreeMap<String, String>> {
        self.check()?;
        self.deleted.lock().expect("Lock poisoned").extend_from_slice(ids);
        Ok(ids.iter().map(|id| (id.clone(), "2-d".to_string())).collect())
    }

    async fn undelete(
        &self,
        _kind: RecordKind,
        items: &[DeletedRecord],
    ) -> ApplicationResult<Vec<SavedRequestRecord>> {
        self.check()?;
        self.restored.lock().expect("Lock poisoned").extend_from_slice(items);
        Ok(items
            .iter()
            .map(|item| SavedRequestRecord {
                id: Some(item.id.clone()),
                ..SavedRequestRecord::default()
            })
            .collect())
    }

    async fn update_bulk(
        &self,
        _kind: RecordKind,
        records: &[SavedRequestRecord],
    ) -> ApplicationResult<Vec<SavedRequestRecord>> {
        self.check()?;
        self.updated.lock().expect("Lock poisoned").extend_from_slice(records);
        Ok(records.to_vec())
    }

    async fn destroy_models(&self, models: &[RecordKind]) -> ApplicationResult<()> {
        self.check()?;
        self.destroyed.lock().expect("Lock poisoned").extend_from_slice(models);
        Ok(())
    }
}

/// Project store that names created projects `created-<n>`.
#[derive(Default)]
pub struct MockProjectStore {
    pub created: Mutex<Vec<NewProject>>,
    pub fail: bool,
}

#[async_trait]
impl ProjectStore for MockProjectStore {
    async fn list(&self) -> ApplicationResult<Vec<Project>> {
        Ok(Vec::new())
    }

    async fn create_bulk(&self, projects: Vec<NewProject>) -> ApplicationResult<Vec<Project>> {
        if self.fail {
            return Err(ApplicationError::Project("projects offline".into()));
        }
        let mut created = self.created.lock().expect("Lock poisoned");
        let start = created.len();
        let result = projects
            .iter()
            .enumerate()
            .map(|(i, p)| Project {
                id: format!("created-{}", start + i),
                name: p.name.clone(),
                requests: p.requests.clone(),
            })
            .collect();
        created.extend(projects);
        Ok(result)
    }
}

/// Exporter that records the options it was called with.
#[derive(Default)]
pub struct MockExporter {
    pub calls: Mutex<Vec<(ExportSelection, ExportOptions)>>,
    pub fail: bool,
}

#[async_trait]
impl DataExporter for MockExporter {
    async fn export(
        &self,
        selection: ExportSelection,
        options: ExportOptions,
    ) -> ApplicationResult<ExportOutcome> {
        if self.fail {
            return Err(ApplicationError::Export("no space left".into()));
        }
        let outcome = ExportOutcome {
            provider: options.provider,
            location: None,
            exported: selection.len().unwrap_or_default(),
        };
        self.calls
            .lock()
            .expect("Lock poisoned")
            .push((selection, options));
        Ok(outcome)
    }
}
