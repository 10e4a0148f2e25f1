//! Drag and drop transfer data.
//!
//! Components that exchange requests by dragging agree on a small set of
//! type markers. A saved request row carries all three markers; a history row
//! carries only the generic one, which is what lets the saved list accept it
//! while refusing its own rows.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::record::SavedRequestRecord;

/// Generic marker: the value is a serialized request record.
pub const REQUEST_OBJECT_TYPE: &str = "arc/request-object";

/// Set by the saved list; the value is the record identifier.
pub const SAVED_REQUEST_TYPE: &str = "arc/saved-request";

/// Provenance marker of the saved panel; the value is the record identifier.
pub const SAVED_PANEL_SOURCE_TYPE: &str = "arc-source/saved-panel";

/// Operation a drag allows or a drop target performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DropEffect {
    /// No operation.
    #[default]
    None,
    /// Copy the item.
    Copy,
    /// Move the item.
    Move,
    /// Link to the item.
    Link,
}

/// Data attached to a drag operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    /// Operations the drag source allows.
    pub effect_allowed: DropEffect,
    /// Operation selected by the drop target.
    pub drop_effect: DropEffect,
}

impl DataTransfer {
    /// Creates an empty transfer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transfer holding the given `(type, data)` pairs.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut transfer = Self::new();
        for (kind, data) in entries {
            transfer.set_data(kind, data);
        }
        transfer
    }

    /// Sets the data for a type, replacing any previous value.
    pub fn set_data(&mut self, kind: impl Into<String>, data: impl Into<String>) {
        let kind = kind.into();
        let data = data.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == kind) {
            entry.1 = data;
        } else {
            self.entries.push((kind, data));
        }
    }

    /// Returns the data stored for a type.
    #[must_use]
    pub fn get_data(&self, kind: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, data)| data.as_str())
    }

    /// Types present on the transfer, in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(kind, _)| kind.as_str())
    }

    /// Whether the transfer carries data of the given type.
    #[must_use]
    pub fn has_type(&self, kind: &str) -> bool {
        self.types().any(|k| k == kind)
    }

    /// Whether the saved list may accept this transfer.
    ///
    /// The generic request marker must be present and the saved list marker
    /// absent, so the list never accepts its own rows.
    #[must_use]
    pub fn accepts_saved_drop(&self) -> bool {
        self.has_type(REQUEST_OBJECT_TYPE) && !self.has_type(SAVED_REQUEST_TYPE)
    }

    /// Builds the transfer a saved list row starts a drag with.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized.
    pub fn from_saved_record(record: &SavedRequestRecord) -> DomainResult<Self> {
        let data = serde_json::to_string(record)
            .map_err(|e| DomainError::InvalidRecord(e.to_string()))?;
        let id = record.id_or_empty();

        let mut transfer = Self::new();
        transfer.set_data(REQUEST_OBJECT_TYPE, data);
        transfer.set_data(SAVED_REQUEST_TYPE, id);
        transfer.set_data(SAVED_PANEL_SOURCE_TYPE, id);
        transfer.effect_allowed = DropEffect::Copy;
        Ok(transfer)
    }

    /// Reads the request record carried under the generic marker.
    ///
    /// Returns `Ok(None)` when the marker is missing or its value is empty.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedTransfer`] if the value is not a record.
    pub fn request_object(&self) -> DomainResult<Option<SavedRequestRecord>> {
        match self.get_data(REQUEST_OBJECT_TYPE) {
            None | Some("") => Ok(None),
            Some(data) => serde_json::from_str(data)
                .map(Some)
                .map_err(|e| DomainError::MalformedTransfer(e.to_string())),
        }
    }
}
