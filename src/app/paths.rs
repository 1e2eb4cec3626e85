// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` is looked up.
//!
//! The first candidate that is set wins: an explicit directory (tests),
//! `--config-dir`, `WALLGEN_CONFIG_DIR`, then `WallGen/` under the platform
//! config directory. The client only reads from it.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

pub const APP_NAME: &str = "WallGen";

pub const ENV_CONFIG_DIR: &str = "WALLGEN_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Records `--config-dir`. Call once, before the first config load.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let Some(dir) = config_dir else {
        return;
    };
    if CLI_CONFIG_DIR.set(PathBuf::from(dir)).is_err() {
        tracing::warn!("--config-dir already recorded, ignoring");
    }
}

fn env_config_dir(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|dir| !dir.is_empty()).map(PathBuf::from)
}

/// Resolves the config directory. `None` only when the platform has no
/// config directory and nothing overrides it.
#[must_use]
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| CLI_CONFIG_DIR.get().cloned())
        .or_else(|| env_config_dir(std::env::var_os(ENV_CONFIG_DIR)))
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}
