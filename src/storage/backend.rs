//! Key-value storage abstraction
//!
//! Provides a trait for the string key-value store the cart persists
//! into. Backends may suspend on both reads and writes.

use crate::error::CartResult;
use async_trait::async_trait;

/// Abstract key-value store interface
///
/// Implementations:
/// - [`MemoryStore`](super::MemoryStore): in-process map, lost on exit
/// - [`FileStore`](super::FileStore): JSON document on disk
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> CartResult<Option<String>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> CartResult<()>;

    /// Get the human-readable backend name for display
    fn backend_name(&self) -> &'static str;
}
