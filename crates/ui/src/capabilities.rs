//! Capabilities of request list panels.
//!
//! Each trait is one behavior a request list panel can offer. The saved
//! requests panel implements all of them; a history panel would skip
//! [`ProjectAssociable`].

use async_trait::async_trait;
use saved_requests_application::ExportOutcome;
use saved_requests_domain::{ExportOptions, ExportSelection, SavedRequestRecord};

use crate::error::PanelResult;

/// A panel with a row selection.
pub trait Selectable {
    /// Selected records, in list order.
    fn selected_items(&self) -> Vec<SavedRequestRecord>;

    /// Whether any row is selected.
    fn has_selection(&self) -> bool {
        !self.selected_items().is_empty()
    }

    /// Deselects every row.
    fn clear_selection(&mut self);
}

/// A panel that deletes records and can undo the last delete.
#[async_trait]
pub trait Deletable: Send {
    /// Deletes `items` and remembers them for [`Deletable::revert_deleted`].
    ///
    /// # Returns
    /// The number of deleted records.
    ///
    /// # Errors
    /// Fails when no record store is wired or the store rejects the delete.
    async fn delete(&mut self, items: Vec<SavedRequestRecord>) -> PanelResult<usize>;

    /// Restores the records removed by the last delete.
    ///
    /// # Errors
    /// Fails when no record store is wired.
    async fn revert_deleted(&mut self) -> PanelResult<()>;
}

/// A panel that exports records.
#[async_trait]
pub trait Exportable: Send {
    /// Exports the selection with the given options.
    ///
    /// # Returns
    /// The export outcome, or `None` when the export module rejected it.
    ///
    /// # Errors
    /// Fails when no export module is wired.
    async fn export_items(
        &mut self,
        selection: ExportSelection,
        options: ExportOptions,
    ) -> PanelResult<Option<ExportOutcome>>;
}

/// A panel that adds its selected records to projects.
#[async_trait]
pub trait ProjectAssociable: Send {
    /// Adds the selected records to the labelled projects, creating the
    /// projects that do not exist yet.
    ///
    /// # Returns
    /// The updated records.
    ///
    /// # Errors
    /// Fails on an empty selection, a missing store or a rejected update.
    async fn add_to_projects(&mut self, labels: Vec<String>) -> PanelResult<Vec<SavedRequestRecord>>;
}
