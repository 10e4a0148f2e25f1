//! JSON file exporter for saved requests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use saved_requests_application::ApplicationResult;
use saved_requests_application::ports::{Clock, DataExporter, ExportOutcome};
use saved_requests_domain::{
    ExportOptions, ExportProvider, ExportSelection, RecordKind, SavedRequestRecord,
};
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::ExportError;
use crate::persistence::InMemoryRecordStore;
use crate::serialization::to_json_stable_bytes;

/// Version written into export documents.
const EXPORT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Top level object of an export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// When the export was produced.
    pub created_at: DateTime<Utc>,
    /// Version of the producing application.
    pub version: String,
    /// Export kind, `ARC#SavedExport` for this panel.
    pub kind: String,
    /// Exported requests.
    pub requests: Vec<SavedRequestRecord>,
}

/// Exporter writing one JSON document per export into a directory.
///
/// `ExportSelection::All` is resolved against the saved partition of the
/// record store at export time. Drive exports are not handled.
pub struct FileDataExporter {
    directory: PathBuf,
    store: Arc<InMemoryRecordStore>,
    clock: Arc<dyn Clock>,
}

impl FileDataExporter {
    /// Creates an exporter writing into `directory`.
    #[must_use]
    pub fn new(
        directory: impl Into<PathBuf>,
        store: Arc<InMemoryRecordStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            directory: directory.into(),
            store,
            clock,
        }
    }

    /// Directory the export files are written to.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn target_path(&self, file: &str) -> Result<PathBuf, ExportError> {
        let name = Path::new(file);
        let is_plain_name = name.file_name().is_some_and(|n| n == name.as_os_str());
        if file.trim().is_empty() || !is_plain_name {
            return Err(ExportError::InvalidFileName(file.to_string()));
        }
        Ok(self.directory.join(name))
    }

    async fn write(
        &self,
        selection: ExportSelection,
        options: &ExportOptions,
    ) -> Result<ExportOutcome, ExportError> {
        if options.provider != ExportProvider::File {
            return Err(ExportError::UnsupportedProvider(
                options.provider.as_str().to_string(),
            ));
        }
        let path = self.target_path(&options.file)?;

        let requests = match selection {
            ExportSelection::All => self.store.list(RecordKind::Saved).await,
            ExportSelection::Items(items) => items,
        };
        let document = ExportDocument {
            created_at: self.clock.now(),
            version: EXPORT_VERSION.to_string(),
            kind: options.kind.clone(),
            requests,
        };

        fs::create_dir_all(&self.directory).await?;
        fs::write(&path, to_json_stable_bytes(&document)?).await?;

        Ok(ExportOutcome {
            provider: ExportProvider::File,
            location: Some(path),
            exported: document.requests.len(),
        })
    }
}

#[async_trait]
impl DataExporter for FileDataExporter {
    async fn export(
        &self,
        selection: ExportSelection,
        options: ExportOptions,
    ) -> ApplicationResult<ExportOutcome> {
        let outcome = self.write(selection, &options).await;
        match &outcome {
            Ok(done) => tracing::info!(
                file = %options.file,
                exported = done.exported,
                "Saved requests exported"
            ),
            Err(e) => tracing::warn!(file = %options.file, error = %e, "Export failed"),
        }
        outcome.map_err(Into::into)
    }
}
