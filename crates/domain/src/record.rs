//! Saved request records.
//!
//! Records keep the field names used by the request store (`_id`, `_rev`,
//! `legacyProject`) so a record serialized here can be read by any other
//! component that understands the store format. Fields this crate does not
//! model are kept in [`SavedRequestRecord::extra`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name given to records that arrive without one.
pub const DEFAULT_RECORD_NAME: &str = "Unnamed";

/// Display fields that only history entries carry.
pub const HISTORY_ONLY_FIELDS: &[&str] = &["timeLabel", "dayTime", "hasHeader", "header"];

/// The store partition a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Saved requests.
    #[default]
    Saved,
    /// Request history.
    History,
}

impl RecordKind {
    /// Returns the store name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::History => "history",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A saved HTTP request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRequestRecord {
    /// Store identifier. `None` for records that were never persisted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Store revision.
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    /// Request URL.
    #[serde(default)]
    pub url: String,
    /// HTTP method.
    #[serde(default)]
    pub method: String,
    /// User facing name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Store partition marker, `"saved"` once the record is edited from this panel.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Identifiers of the projects this request belongs to.
    #[serde(default)]
    pub projects: Vec<String>,
    /// Deprecated single project reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_project: Option<String>,
    /// Every other field of the stored document.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SavedRequestRecord {
    /// Creates an unsaved record.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns the record name, or the default name when it has none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_RECORD_NAME,
        }
    }

    /// Returns the identifier, or an empty string for unsaved records.
    #[must_use]
    pub fn id_or_empty(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Turns a record dropped from another list into a new saved request.
    ///
    /// Identifier, revision and history display fields are removed so the
    /// store treats the record as new. A missing name becomes
    /// [`DEFAULT_RECORD_NAME`].
    #[must_use]
    pub fn into_new_record(mut self) -> Self {
        self.id = None;
        self.rev = None;
        for field in HISTORY_ONLY_FIELDS {
            self.extra.remove(*field);
        }
        if self.name.as_deref().is_none_or(str::is_empty) {
            self.name = Some(DEFAULT_RECORD_NAME.to_string());
        }
        self
    }

    /// Folds `legacy_project` into `projects` and clears it.
    ///
    /// The legacy identifier is only added when it is not listed yet.
    pub fn merge_legacy_project(&mut self) {
        if let Some(legacy) = self.legacy_project.take()
            && !self.projects.contains(&legacy)
        {
            self.projects.push(legacy);
        }
    }
}

/// Identifier and revision of a deleted record, used to restore it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedRecord {
    /// Identifier of the removed record.
    #[serde(rename = "_id")]
    pub id: String,
    /// Revision the store assigned to the deletion.
    #[serde(rename = "_rev")]
    pub rev: String,
}

impl DeletedRecord {
    /// Builds the list from the `{id: revision}` map a delete returns.
    #[must_use]
    pub fn from_revisions(revisions: BTreeMap<String, String>) -> Vec<Self> {
        revisions
            .into_iter()
            .map(|(id, rev)| Self { id, rev })
            .collect()
    }
}
