//! File-backed key-value store
//!
//! All keys live in one JSON object on disk. Every `set` rewrites the
//! whole document to a sibling temp file and renames it into place, so
//! readers never observe a half-written file.

use crate::error::{CartError, CartResult};
use crate::storage::backend::KeyValueStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// Key-value store persisted as a JSON object file
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write of the document
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> CartResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            CartError::io(format!("reading storage file {}", self.path.display()), e)
        })?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            CartError::StorageBackend(format!(
                "storage file {} is not a JSON object of strings: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn write_document(&self, document: &BTreeMap<String, String>) -> CartResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| CartError::io("creating storage directory", e))?;
            }
        }

        let content = serde_json::to_string_pretty(document)?;
        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, content)
            .await
            .map_err(|e| CartError::io(format!("writing storage file {}", tmp.display()), e))?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            CartError::io(format!("replacing storage file {}", self.path.display()), e)
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> CartResult<Option<String>> {
        let mut document = self.read_document().await?;
        Ok(document.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> CartResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document().await?;
        document.insert(key.to_string(), value.to_string());
        self.write_document(&document).await?;

        debug!("Wrote {} to {}", key, self.path.display());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("storage.json"));
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_and_get_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("storage.json");
        let store = FileStore::new(&path);

        store.set("k", "[1,2]").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("[1,2]"));

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("k").await.unwrap().as_deref(), Some("[1,2]"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn set_keeps_other_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("storage.json"));

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        store.set("a", "3").await.unwrap();

        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn corrupt_document_is_a_backend_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get("k").await,
            Err(CartError::StorageBackend(_))
        ));
    }
}
