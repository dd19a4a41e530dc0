//! Error types for marketcart
//!
//! All modules use `CartResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// All errors that can occur in marketcart
#[derive(Error, Debug)]
pub enum CartError {
    // Usage errors
    #[error("Cart accessed outside of a mounted CartProvider")]
    OutsideProvider,

    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    #[error("Quantity of {0} is already at its maximum")]
    QuantityLimit(String),

    // Persistence errors
    #[error("Failed to read persisted cart under {key}: {reason}")]
    PersistenceRead { key: String, reason: String },

    #[error("Failed to persist cart under {key}")]
    PersistenceWrite {
        key: String,
        #[source]
        source: Box<CartError>,
    },

    #[error("Storage backend error: {0}")]
    StorageBackend(String),

    #[error("Unknown storage backend: {0}")]
    UnknownBackend(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CartError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Wrap a storage failure as a failed cart write
    pub fn write_failed(key: impl Into<String>, source: CartError) -> Self {
        Self::PersistenceWrite {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Check if the failed operation can be retried as-is
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::PersistenceWrite { .. } | Self::StorageBackend(_) | Self::Io { .. }
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::OutsideProvider => Some("Mount the CartProvider before requesting the cart"),
            Self::PersistenceWrite { .. } => {
                Some("The cart was left unchanged. Check that the storage file is writable")
            }
            Self::UnknownBackend(_) => Some("Set storage.backend to \"file\" or \"memory\""),
            Self::ConfigInvalid { .. } => Some("Run: marketcart config init --force"),
            _ => None,
        }
    }
}
