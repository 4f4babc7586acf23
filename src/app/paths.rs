// SPDX-License-Identifier: MPL-2.0
//! Directory resolution for configuration and plan data.
//!
//! Both directories follow the same priority order:
//! 1. **Explicit override** passed to a `_with_override()` function (tests)
//! 2. **CLI arguments** `--data-dir` / `--config-dir`, set once through
//!    [`init_cli_overrides`]
//! 3. **Environment variables** `COMET_PLANNER_DATA_DIR` /
//!    `COMET_PLANNER_CONFIG_DIR` (ignored when empty)
//! 4. **Platform default** from the `dirs` crate with [`APP_NAME`] appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "CometPlanner";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "COMET_PLANNER_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "COMET_PLANNER_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` CLI values.
///
/// Only the first call has an effect. Returns `false` when the overrides were
/// already initialized.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    data_set && config_set
}

/// Returns the directory holding plan documents.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_DATA_DIR.get().and_then(Clone::clone),
        ENV_DATA_DIR,
        dirs::data_dir,
    )
}

/// Returns the directory holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_CONFIG_DIR.get().and_then(Clone::clone),
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

fn resolve(
    override_path: Option<PathBuf>,
    cli_path: Option<PathBuf>,
    env_var: &str,
    platform_dir: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path.or(cli_path) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
