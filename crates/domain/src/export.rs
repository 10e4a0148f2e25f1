//! Export options for saved requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::SavedRequestRecord;

/// Export kind written by the saved requests panel.
pub const SAVED_EXPORT_KIND: &str = "ARC#SavedExport";

/// Default drive folder for drive exports.
pub const DEFAULT_DRIVE_FOLDER: &str = "My Drive";

/// Where the export artifact goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportProvider {
    /// A local file.
    #[default]
    File,
    /// A remote drive.
    Drive,
}

impl ExportProvider {
    /// Returns the provider name used in export options.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Drive => "drive",
        }
    }
}

/// Provider specific options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOptions {
    /// Parent folders on the remote drive.
    #[serde(default)]
    pub parents: Vec<String>,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            parents: vec![DEFAULT_DRIVE_FOLDER.to_string()],
        }
    }
}

/// Options chosen in the export dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Target file name.
    pub file: String,
    /// Export kind.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Destination.
    #[serde(default)]
    pub provider: ExportProvider,
    /// Destination options.
    #[serde(default)]
    pub provider_options: ProviderOptions,
}

fn default_kind() -> String {
    SAVED_EXPORT_KIND.to_string()
}

impl ExportOptions {
    /// Default options for an export made on `date`.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            file: generate_file_name(date),
            kind: default_kind(),
            provider: ExportProvider::File,
            provider_options: ProviderOptions::default(),
        }
    }

    /// Whether the export goes to a remote drive.
    #[must_use]
    pub fn is_drive(&self) -> bool {
        self.provider == ExportProvider::Drive
    }
}

/// Default export file name, `arc-saved-export-YYYY-MM-DD.arc`.
#[must_use]
pub fn generate_file_name(date: NaiveDate) -> String {
    format!("arc-saved-export-{}.arc", date.format("%Y-%m-%d"))
}

/// Which records an export covers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExportSelection {
    /// Every saved request in the store.
    #[default]
    All,
    /// The given records.
    Items(Vec<SavedRequestRecord>),
}

impl ExportSelection {
    /// Number of listed records, `None` for [`ExportSelection::All`].
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::All => None,
            Self::Items(items) => Some(items.len()),
        }
    }

    /// Whether this is an explicit, empty selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
        assert_eq!(generate_file_name(date), "arc-saved-export-2024-03-07.arc");
    }

    #[test]
    fn test_default_options() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 20).expect("valid date");
        let options = ExportOptions::for_date(date);
        assert_eq!(options.kind, SAVED_EXPORT_KIND);
        assert_eq!(options.provider, ExportProvider::File);
        assert_eq!(options.provider_options.parents, vec!["My Drive".to_string()]);
        assert!(!options.is_drive());
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ExportOptions =
            serde_json::from_str(r#"{"file":"out.arc","provider":"drive"}"#).expect("valid");
        assert!(options.is_drive());
        assert_eq!(options.kind, SAVED_EXPORT_KIND);
    }

    #[test]
    fn test_selection_len() {
        assert_eq!(ExportSelection::All.len(), None);
        assert!(ExportSelection::Items(Vec::new()).is_empty());
        assert!(!ExportSelection::All.is_empty());
    }
}
