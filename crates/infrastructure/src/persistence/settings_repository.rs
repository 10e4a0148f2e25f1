//! Panel settings persistence.
//!
//! Stores the panel settings in the platform-specific config directory:
//! - Linux: ~/.config/saved-requests/settings.json
//! - macOS: ~/Library/Application Support/saved-requests/settings.json
//! - Windows: %APPDATA%/saved-requests/settings.json

use std::path::PathBuf;

use saved_requests_domain::{ListType, PanelSettings};
use tokio::fs;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

const APP_DIR: &str = "saved-requests";
const SETTINGS_FILE: &str = "settings.json";

/// Environment variable that turns drag and drop on or off.
pub const DRAGGABLE_ENV: &str = "SAVED_REQUESTS_DRAGGABLE";

/// Environment variable that selects the list density.
pub const LIST_TYPE_ENV: &str = "SAVED_REQUESTS_LIST_TYPE";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for panel settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    config_dir: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository rooted at the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: dirs::config_dir().map(|p| p.join(APP_DIR)),
        }
    }

    /// Creates a repository rooted at `dir`.
    #[must_use]
    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(dir.into()),
        }
    }

    /// Returns the path where settings are stored, if available.
    #[must_use]
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.config_dir.as_deref().map(|p| p.join(SETTINGS_FILE))
    }

    /// Loads the panel settings.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<PanelSettings, SettingsError> {
        let Some(path) = self.settings_path() else {
            return Ok(PanelSettings::default());
        };

        if !fs::try_exists(&path).await? {
            return Ok(PanelSettings::default());
        }

        let content = fs::read(&path).await?;
        Ok(from_json_bytes(&content)?)
    }

    /// Saves the panel settings.
    ///
    /// # Errors
    /// Returns an error if there is no config directory or the write fails.
    pub async fn save(&self, settings: &PanelSettings) -> Result<(), SettingsError> {
        let Some(config_dir) = self.config_dir.as_deref() else {
            return Err(SettingsError::NoConfigDir);
        };

        fs::create_dir_all(config_dir).await?;

        let content = to_json_stable_bytes(settings)?;
        fs::write(config_dir.join(SETTINGS_FILE), content).await?;
        Ok(())
    }
}

/// Applies environment overrides to loaded settings.
///
/// `lookup` resolves a variable name, usually `std::env::var(..).ok()`.
/// Values that cannot be interpreted are ignored with a warning.
#[must_use]
pub fn apply_env_overrides<F>(mut settings: PanelSettings, lookup: F) -> PanelSettings
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(DRAGGABLE_ENV) {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => settings.draggable_enabled = true,
            "0" | "false" | "no" | "off" => settings.draggable_enabled = false,
            other => tracing::warn!(variable = DRAGGABLE_ENV, value = other, "Ignoring override"),
        }
    }

    if let Some(value) = lookup(LIST_TYPE_ENV) {
        match value.parse::<ListType>() {
            Ok(list_type) => settings.list_type = list_type,
            Err(e) => tracing::warn!(variable = LIST_TYPE_ENV, error = %e, "Ignoring override"),
        }
    }

    settings
}
