// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use postcal_core::{APP_NAME, Config as CoreConfig, get_state_dir};

const POSTCAL_CONFIG_ENV: &str = "POSTCAL_CONFIG";

const EVENTS_FILE: &str = "events.json";

/// Loads the configuration from `--config`, `$POSTCAL_CONFIG` or the default location.
///
/// An explicitly given file must exist. Without one, a missing default file means defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(POSTCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
}

/// Points the events file at the state directory when the configuration leaves it unset,
/// so that separate invocations see the same calendar.
pub fn with_default_data_path(mut config: CoreConfig) -> Result<CoreConfig, Box<dyn Error>> {
    if config.data_path.is_none() {
        let path = get_state_dir()?.join(EVENTS_FILE);
        tracing::debug!(path = %path.display(), "using default events file");
        config.data_path = Some(path);
    }
    Ok(config)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
