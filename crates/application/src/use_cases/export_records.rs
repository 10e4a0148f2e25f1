//! Export records use case.

use std::sync::Arc;

use saved_requests_domain::{ExportOptions, ExportSelection, SAVED_EXPORT_KIND};

use crate::ApplicationResult;
use crate::ports::{DataExporter, ExportOutcome};

/// Use case for exporting saved requests.
pub struct ExportRecords<E: DataExporter + ?Sized> {
    exporter: Arc<E>,
}

impl<E: DataExporter + ?Sized> ExportRecords<E> {
    /// Creates a new `ExportRecords` use case.
    #[must_use]
    pub const fn new(exporter: Arc<E>) -> Self {
        Self { exporter }
    }

    /// Exports the selection. The export kind is always the saved export kind,
    /// whatever the dialog sent.
    ///
    /// # Errors
    /// Returns the exporter's error if the artifact cannot be produced.
    pub async fn execute(
        &self,
        selection: ExportSelection,
        mut options: ExportOptions,
    ) -> ApplicationResult<ExportOutcome> {
        SAVED_EXPORT_KIND.clone_into(&mut options.kind);
        self.exporter.export(selection, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MockExporter;
    use chrono::NaiveDate;
    use saved_requests_domain::ExportProvider;

    fn options() -> ExportOptions {
        ExportOptions::for_date(NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date"))
    }

    #[tokio::test]
    async fn test_export_forces_saved_kind() {
        let exporter = Arc::new(MockExporter::default());
        let mut options = options();
        options.kind = "ARC#AllDataExport".into();

        ExportRecords::new(Arc::clone(&exporter))
            .execute(ExportSelection::All, options)
            .await
            .expect("Should succeed");

        let calls = exporter.calls.lock().expect("Lock poisoned");
        assert_eq!(calls[0].1.kind, SAVED_EXPORT_KIND);
        assert_eq!(calls[0].0, ExportSelection::All);
    }

    #[tokio::test]
    async fn test_export_reports_provider() {
        let exporter = Arc::new(MockExporter::default());
        let mut options = options();
        options.provider = ExportProvider::Drive;

        let outcome = ExportRecords::new(exporter)
            .execute(ExportSelection::Items(Vec::new()), options)
            .await
            .expect("Should succeed");

        assert_eq!(outcome.provider, ExportProvider::Drive);
        assert_eq!(outcome.exported, 0);
    }

    #[tokio::test]
    async fn test_export_propagates_rejection() {
        let exporter = Arc::new(MockExporter {
            fail: true,
            ..MockExporter::default()
        });
        let result = ExportRecords::new(exporter)
            .execute(ExportSelection::All, options())
            .await;
        assert!(result.is_err());
    }
}
