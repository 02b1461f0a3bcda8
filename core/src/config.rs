// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::event::validate_time;
use crate::{DayOrder, EventStatus, Platform};

/// The name of the PostCal application.
pub const APP_NAME: &str = "postcal";

const DEFAULT_TIME: &str = "09:00";

/// Configuration for the PostCal core.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Path to the JSON file holding the events. Events are kept in memory only when unset.
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Time of day prefilled in new drafts, as `HH:MM`.
    #[serde(default = "default_time")]
    pub default_time: String,

    /// Platform prefilled in new drafts.
    #[serde(default)]
    pub default_platform: Platform,

    /// Status prefilled in new drafts.
    #[serde(default)]
    pub default_status: EventStatus,

    /// Ordering of events inside a day.
    #[serde(default)]
    pub day_order: DayOrder,

    /// If true, an empty calendar is filled with sample events on startup.
    #[serde(default)]
    pub seed_demo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            default_time: default_time(),
            default_platform: Platform::default(),
            default_status: EventStatus::default(),
            day_order: DayOrder::default(),
            seed_demo: false,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(path) = &self.data_path {
            self.data_path = Some(
                expand_path(path).map_err(|e| format!("Failed to expand data path: {e}"))?,
            );
        }

        validate_time(&self.default_time)
            .map_err(|e| format!("Invalid default_time in config: {e}"))?;

        Ok(())
    }
}

fn default_time() -> String {
    DEFAULT_TIME.to_string()
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}

/// The directory for application state, e.g. `$XDG_STATE_HOME/postcal`.
pub fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir
        .map(|a| a.join(APP_NAME))
        .ok_or("User-specific state directory not found".into())
}
