//! Panel settings.
//!
//! Defines the user preferences the saved requests panel reads at startup.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::export::{DEFAULT_DRIVE_FOLDER, ExportProvider};

/// Row density of the request list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Two line rows.
    #[default]
    Default,
    /// Single line rows with padding.
    Comfortable,
    /// Dense single line rows.
    Compact,
}

impl ListType {
    /// Row height in pixels.
    #[must_use]
    pub const fn item_height(self) -> u32 {
        match self {
            Self::Default => 56,
            Self::Comfortable => 40,
            Self::Compact => 36,
        }
    }

    /// Whether rows render a second line with the request name.
    #[must_use]
    pub const fn has_two_lines(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl FromStr for ListType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "comfortable" => Ok(Self::Comfortable),
            "compact" => Ok(Self::Compact),
            other => Err(DomainError::InvalidSetting(format!("list type '{other}'"))),
        }
    }
}

/// User settings for the saved requests panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSettings {
    /// Whether rows can be dragged and foreign requests dropped.
    #[serde(default = "default_draggable")]
    pub draggable_enabled: bool,

    /// Row density.
    #[serde(default)]
    pub list_type: ListType,

    /// Destination preselected in the export dialog.
    #[serde(default)]
    pub export_provider: ExportProvider,

    /// Drive folders preselected for drive exports.
    #[serde(default = "default_drive_parents")]
    pub drive_parents: Vec<String>,
}

fn default_draggable() -> bool {
    true
}

fn default_drive_parents() -> Vec<String> {
    vec![DEFAULT_DRIVE_FOLDER.to_string()]
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            draggable_enabled: default_draggable(),
            list_type: ListType::default(),
            export_provider: ExportProvider::default(),
            drive_parents: default_drive_parents(),
        }
    }
}
