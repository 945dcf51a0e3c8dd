// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use lamusica_admin::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Point the client at a different backend
//! config.api_base_url = Some("http://10.0.0.5:8080/api".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.api_base_url, Some("http://10.0.0.5:8080/api".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::{DEFAULT_API_BASE_URL, DEFAULT_TOAST_LIMIT, DEFAULT_TOAST_REMOVE_DELAY_SECS};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LaMusicaAdmin";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub toast_limit: Option<usize>,
    #[serde(default)]
    pub toast_remove_delay_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Some(DEFAULT_API_BASE_URL.to_string()),
            toast_limit: Some(DEFAULT_TOAST_LIMIT),
            toast_remove_delay_secs: Some(DEFAULT_TOAST_REMOVE_DELAY_SECS),
        }
    }
}

impl Config {
    /// Returns the configured API base URL, falling back to the default.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Returns the configured toast queue bound, falling back to the default.
    #[must_use]
    pub fn toast_limit(&self) -> usize {
        self.toast_limit.unwrap_or(DEFAULT_TOAST_LIMIT)
    }

    /// Returns the configured removal delay in seconds, falling back to the default.
    #[must_use]
    pub fn toast_remove_delay_secs(&self) -> u64 {
        self.toast_remove_delay_secs
            .unwrap_or(DEFAULT_TOAST_REMOVE_DELAY_SECS)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
