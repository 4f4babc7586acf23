// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in a sectioned `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[planner]` - Initial toolbar state (title, section, tab strip)
//! - `[features]` - Optional toolbar capabilities such as sign-in/sign-out
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set `COMET_PLANNER_CONFIG_DIR`
//! 3. Falls back to the platform config directory
//!
//! # Examples
//!
//! ```no_run
//! use comet_planner::config;
//!
//! let (mut config, _warning) = config::load();
//! config.features.profile_controls = true;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Initial state of the planning toolbar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannerConfig {
    #[serde(default = "default_plan_title")]
    pub default_title: String,

    /// Index of the tab selected at startup. Stored as-is; out-of-range
    /// values leave no tab highlighted.
    #[serde(default = "default_section_index")]
    pub initial_section: usize,

    #[serde(default = "default_show_tabs")]
    pub show_tabs: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_title: default_plan_title(),
            initial_section: DEFAULT_SECTION_INDEX,
            show_tabs: DEFAULT_SHOW_TABS,
        }
    }
}

/// Optional capabilities that are present in the code but off by default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeaturesConfig {
    /// Show the sign-in / sign-out controls in the toolbar.
    #[serde(default = "default_profile_controls")]
    pub profile_controls: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            profile_controls: DEFAULT_PROFILE_CONTROLS,
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub planner: PlannerConfig,

    #[serde(default)]
    pub features: FeaturesConfig,
}

fn default_plan_title() -> String {
    DEFAULT_PLAN_TITLE.to_string()
}

fn default_section_index() -> usize {
    DEFAULT_SECTION_INDEX
}

fn default_show_tabs() -> bool {
    DEFAULT_SHOW_TABS
}

fn default_profile_controls() -> bool {
    DEFAULT_PROFILE_CONTROLS
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns the config and an optional i18n warning key. A missing file is not
/// an error; an unreadable one yields the defaults plus a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("ignoring unreadable config {}: {}", path.display(), err);
            (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.planner.default_title, "Your plan");
        assert_eq!(config.planner.initial_section, 0);
        assert!(config.planner.show_tabs);
        assert!(!config.features.profile_controls);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            planner: PlannerConfig {
                default_title: "Spring schedule".to_string(),
                initial_section: 1,
                show_tabs: false,
            },
            features: FeaturesConfig {
                profile_controls: true,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[features]\nprofile_controls = true\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert!(loaded.features.profile_controls);
        assert_eq!(loaded.planner, PlannerConfig::default());
        assert_eq!(loaded.general, GeneralConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[planner\nbroken")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("failed to save config");

        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
