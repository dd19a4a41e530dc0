//! Storage factory for creating the configured key-value backend

use crate::config::schema::StorageConfig;
use crate::error::{CartError, CartResult};
use crate::storage::backend::KeyValueStore;
use crate::storage::file::FileStore;
use crate::storage::memory::MemoryStore;
use std::sync::Arc;

/// Available storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// JSON document on disk
    File,
    /// In-process map
    Memory,
}

impl Backend {
    /// Parse a backend name from configuration
    pub fn parse(name: &str) -> CartResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Backend::File),
            "memory" => Ok(Backend::Memory),
            other => Err(CartError::UnknownBackend(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Backend::File => "file",
            Backend::Memory => "memory",
        }
    }
}

/// Create the key-value store described by `config`
pub fn open_store(config: &StorageConfig) -> CartResult<Arc<dyn KeyValueStore>> {
    match Backend::parse(&config.backend)? {
        Backend::File => Ok(Arc::new(FileStore::new(config.resolved_path()))),
        Backend::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parse() {
        assert_eq!(Backend::parse("file").unwrap(), Backend::File);
        assert_eq!(Backend::parse(" Memory ").unwrap(), Backend::Memory);
        assert!(matches!(
            Backend::parse("redis"),
            Err(CartError::UnknownBackend(_))
        ));
    }

    #[test]
    fn backend_name() {
        assert_eq!(Backend::File.name(), "file");
        assert_eq!(Backend::Memory.name(), "memory");
    }

    #[test]
    fn open_store_uses_configured_backend() {
        let config = StorageConfig {
            backend: "memory".to_string(),
            ..StorageConfig::default()
        };
        let store = open_store(&config).unwrap();
        assert_eq!(store.backend_name(), "memory");

        let store = open_store(&StorageConfig::default()).unwrap();
        assert_eq!(store.backend_name(), "file");
    }
}
