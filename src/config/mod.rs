//! Configuration management for marketcart
//!
//! The config file selects the storage backend and key the cart lives
//! under and whether cart events go to the activity log. Both the
//! storage file and the activity log default to the per-user state dir.

pub mod schema;

pub use schema::Config;

use crate::error::{CartError, CartResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Loads and saves the cart configuration file
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager for `~/.config/marketcart/config.toml`
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Manager for an explicit file (`--config` / `MARKETCART_CONFIG`)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("marketcart")
            .join("config.toml")
    }

    /// Per-user directory holding the cart storage file and activity log
    pub fn state_dir() -> PathBuf {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("marketcart")
    }

    /// Storage file used by the file backend when `storage.path` is unset
    pub fn default_storage_path() -> PathBuf {
        Self::state_dir().join("storage.json")
    }

    /// Where cart mutations and load failures are appended
    pub fn activity_log_path() -> PathBuf {
        Self::state_dir().join("activity.log")
    }

    /// Load configuration; a missing file means the default file backend and key
    pub async fn load(&self) -> CartResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using default cart storage");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> CartResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| CartError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| CartError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write configuration, as `config init` does
    pub async fn save(&self, config: &Config) -> CartResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            CartError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensure the config directory exists
    async fn ensure_config_dir(&self) -> CartResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CartError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.toml");
        let manager = ConfigManager::with_path(path);

        let config = manager.load().await.unwrap();
        assert_eq!(config.storage.key, "@GoMarketplace_products");
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let manager = ConfigManager::with_path(path);

        let mut config = Config::default();
        config.storage.backend = "memory".to_string();
        config.general.activity_log = false;

        manager.save(&config).await.unwrap();
        let loaded = manager.load().await.unwrap();

        assert_eq!(loaded.storage.backend, "memory");
        assert!(!loaded.general.activity_log);
    }

    #[test]
    fn cart_files_live_in_state_dir() {
        let state = ConfigManager::state_dir();
        assert!(state.ends_with("marketcart"));
        assert_eq!(ConfigManager::default_storage_path(), state.join("storage.json"));
        assert_eq!(ConfigManager::activity_log_path(), state.join("activity.log"));
    }

    #[tokio::test]
    async fn invalid_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[storage\nkey = ").unwrap();

        let manager = ConfigManager::with_path(path.clone());
        match manager.load().await {
            Err(CartError::ConfigInvalid { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected ConfigInvalid, got {:?}", other),
        }
    }
}
