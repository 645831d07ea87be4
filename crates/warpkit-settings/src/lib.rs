//! WarpKit Settings Crate
//!
//! Handles editor configuration: handle geometry, the initial transform
//! mode, and document formatting preferences.

pub mod config;
pub mod error;

pub use config::{EditorSettings, APP_DIR_NAME, MAX_JSON_INDENT, SETTINGS_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
