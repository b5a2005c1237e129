//! Application configuration management.
//!
//! This module handles loading and saving the session configuration,
//! which covers the profile endpoint URL, the login route, and the
//! HTTP request timeout.
//!
//! Configuration is stored at `~/.config/sessiongate/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "sessiongate";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default profile endpoint
const DEFAULT_PROFILE_URL: &str = "http://127.0.0.1:8000/profile/me/";

/// Default login route path
const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile_url: String,
    pub login_route: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_url: DEFAULT_PROFILE_URL.to_string(),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
