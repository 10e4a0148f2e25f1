//! In-process collaborators for panel tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use saved_requests_application::ports::{
    Clock, DataExporter, ExportOutcome, Navigator, ProjectStore, RecordStore,
};
use saved_requests_application::{ApplicationError, ApplicationResult};
use saved_requests_domain::{
    DeletedRecord, ExportOptions, ExportSelection, NavigationTarget, NewProject, Project,
    RecordKind, SavedRequestRecord,
};

/// A stored record with id `id` and revision `1-a`.
pub fn stored(id: &str) -> SavedRequestRecord {
    SavedRequestRecord {
        id: Some(id.into()),
        rev: Some("1-a".into()),
        ..SavedRequestRecord::new("GET", format!("https://api.domain.com/{id}"), id)
    }
}

struct TestClock(DateTime<Utc>);

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock stopped at 2024-05-06.
pub fn clock() -> Arc<dyn Clock> {
    let instant = Utc
        .with_ymd_and_hms(2024, 5, 6, 12, 0, 0)
        .single()
        .expect("valid instant");
    Arc::new(TestClock(instant))
}

/// Record store that remembers every call and can be told to fail.
#[derive(Default)]
pub struct MockRecordStore {
    pub saved: Mutex<Vec<SavedRequestRecord>>,
    pub deleted: Mutex<Vec<String>>,
    pub restored: Mutex<Vec<DeletedRecord>>,
    pub updated: Mutex<Vec<SavedRequestRecord>>,
    pub destroyed: Mutex<Vec<RecordKind>>,
    fail: AtomicBool,
}

impl MockRecordStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> ApplicationResult<()> {
        if self.fail.load(Ordering::SeqCst) {
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
        record.rev = Some("2-s".to_string());
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
        Ok(items.iter().map(|item| stored(&item.id)).collect())
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
    pub known: Mutex<Vec<Project>>,
    pub created: Mutex<Vec<NewProject>>,
}

#[async_trait]
impl ProjectStore for MockProjectStore {
    async fn list(&self) -> ApplicationResult<Vec<Project>> {
        Ok(self.known.lock().expect("Lock poisoned").clone())
    }

    async fn create_bulk(&self, projects: Vec<NewProject>) -> ApplicationResult<Vec<Project>> {
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
            return Err(ApplicationError::Export("disk full".into()));
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

/// Navigator that records every target.
#[derive(Default)]
pub struct MockNavigator {
    pub targets: Mutex<Vec<NavigationTarget>>,
}

impl Navigator for MockNavigator {
    fn navigate(&self, target: NavigationTarget) {
        self.targets.lock().expect("Lock poisoned").push(target);
    }
}
