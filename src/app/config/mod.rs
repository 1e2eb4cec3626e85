// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[service]` - Location of the generation service
//! - `[resolutions]` - Offered and initially checked resolution options
//!
//! The file is never written by the application.
//!
//! See [`crate::app::paths`] for where the file is looked up.
//!
//! # Examples
//!
//! ```no_run
//! use wallgen_client::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("{}", config.service.base_url);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::generation::resolution::split_identifiers;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Generation service location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Scheme, host and port of the service, e.g. `http://localhost:8080`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_upload_path")]
    pub upload_path: String,

    #[serde(default = "default_health_path")]
    pub health_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            upload_path: default_upload_path(),
            health_path: default_health_path(),
        }
    }
}

/// Resolution picker settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionsConfig {
    /// Identifiers offered as checkboxes, in display order.
    #[serde(default = "default_resolution_options")]
    pub options: Vec<String>,

    /// Identifiers checked when the window opens.
    #[serde(default = "default_checked_resolutions")]
    pub checked: Vec<String>,
}

impl Default for ResolutionsConfig {
    fn default() -> Self {
        Self {
            options: default_resolution_options(),
            checked: default_checked_resolutions(),
        }
    }
}

impl ResolutionsConfig {
    /// Replaces the offered options with a comma-separated list (CLI form).
    /// Every listed id starts checked.
    pub fn set_options_from_list(&mut self, list: &str) {
        let options = split_identifiers(list);
        if options.is_empty() {
            return;
        }
        self.checked = options.clone();
        self.options = options;
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub resolutions: ResolutionsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_upload_path() -> String {
    DEFAULT_UPLOAD_PATH.to_string()
}

fn default_health_path() -> String {
    DEFAULT_HEALTH_PATH.to_string()
}

fn default_resolution_options() -> Vec<String> {
    DEFAULT_RESOLUTIONS.iter().map(|s| (*s).to_string()).collect()
}

fn default_checked_resolutions() -> Vec<String> {
    DEFAULT_CHECKED_RESOLUTIONS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "using default configuration");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).expect("failed to write config");
        path
    }

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(
            temp_dir.path(),
            r#"
[general]
language = "fr"
theme_mode = "Dark"

[service]
base_url = "http://wallgen.lan:9000"
upload_path = "/api/upload"

[resolutions]
options = ["1080p", "4k"]
checked = ["4k"]
"#,
        );

        let config = load_from_path(&path).expect("failed to load config");

        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.service.base_url, "http://wallgen.lan:9000");
        assert_eq!(config.service.upload_path, "/api/upload");
        assert_eq!(config.service.health_path, DEFAULT_HEALTH_PATH);
        assert_eq!(config.resolutions.options, vec!["1080p", "4k"]);
        assert_eq!(config.resolutions.checked, vec!["4k"]);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "[general]\nlanguage = \"en-US\"\n");

        let config = load_from_path(&path).expect("failed to load config");

        assert_eq!(config.service, ServiceConfig::default());
        assert_eq!(config.resolutions, ResolutionsConfig::default());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "this is = not toml = at all");

        let result = load_from_path(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "[general]\ntheme_mode = \"sepia\"\n");

        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_invalid_file_returns_warning_key() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_config(temp_dir.path(), "[service\nbase_url = ");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn default_service_points_at_local_server() {
        let service = ServiceConfig::default();
        assert_eq!(service.base_url, "http://localhost:8080");
        assert_eq!(service.upload_path, "/upload");
        assert_eq!(service.health_path, "/healthz");
    }

    #[test]
    fn set_options_from_list_checks_every_listed_id() {
        let mut resolutions = ResolutionsConfig::default();
        resolutions.set_options_from_list("720p, 1080p,,");

        assert_eq!(resolutions.options, vec!["720p", "1080p"]);
        assert_eq!(resolutions.checked, vec!["720p", "1080p"]);
    }

    #[test]
    fn set_options_from_empty_list_keeps_current() {
        let mut resolutions = ResolutionsConfig::default();
        resolutions.set_options_from_list(" , ");
        assert_eq!(resolutions, ResolutionsConfig::default());
    }
}
