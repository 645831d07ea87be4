//! Editor configuration.
//!
//! Supports JSON and TOML files, selected by extension, stored by default
//! in the platform configuration directory. Every field has a default so
//! partial files are accepted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use warpkit_core::TransformMode;

use crate::error::{SettingsError, SettingsResult};

/// Application directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "warpkit";

/// Default settings file name.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Largest accepted JSON indentation width.
pub const MAX_JSON_INDENT: usize = 16;

/// Editor preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Side length of the square handle hit regions
    pub handle_size: f64,
    /// Distance of the rotation handle above the top edge
    pub rotate_handle_offset: f64,
    /// Transform mode active when the editor starts
    pub initial_mode: TransformMode,
    /// Indentation width of saved documents
    pub json_indent: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            handle_size: 8.0,
            rotate_handle_offset: 20.0,
            initial_mode: TransformMode::Translation,
            json_indent: 4,
        }
    }
}

impl EditorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/warpkit/settings.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Loads from `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.handle_size.is_finite() || self.handle_size <= 0.0 {
            return Err(SettingsError::invalid(
                "handle_size",
                format!("must be positive and finite, got {}", self.handle_size),
            ));
        }

        if !self.rotate_handle_offset.is_finite() || self.rotate_handle_offset < 0.0 {
            return Err(SettingsError::invalid(
                "rotate_handle_offset",
                format!(
                    "must be non-negative and finite, got {}",
                    self.rotate_handle_offset
                ),
            ));
        }

        if self.json_indent > MAX_JSON_INDENT {
            return Err(SettingsError::invalid(
                "json_indent",
                format!("must be at most {}, got {}", MAX_JSON_INDENT, self.json_indent),
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
