//! Configuration schema for marketcart
//!
//! Configuration is stored at `~/.config/marketcart/config.toml`

use crate::config::ConfigManager;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage key the cart is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "@GoMarketplace_products";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Cart persistence settings
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,

    /// Record cart events to the activity log
    pub activity_log: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
            activity_log: true,
        }
    }
}

/// Key-value storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend: "file" or "memory"
    pub backend: String,

    /// Storage file for the file backend (defaults under the state dir)
    pub path: Option<PathBuf>,

    /// Key the cart is stored under
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            path: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StorageConfig {
    /// Storage file path, falling back to the default location
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(ConfigManager::default_storage_path)
    }
}
