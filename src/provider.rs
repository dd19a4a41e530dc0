//! Session scope that owns the cart store
//!
//! A [`CartProvider`] is created unmounted. [`CartProvider::mount`] loads
//! the persisted cart once; from then on [`CartProvider::cart`] hands out
//! the shared [`CartStore`]. Asking for the cart before mounting, or after
//! unmounting, is an integration mistake and fails with
//! [`CartError::OutsideProvider`].

use crate::activity::ActivityLog;
use crate::config::Config;
use crate::error::{CartError, CartResult};
use crate::storage::{open_store, KeyValueStore};
use crate::store::CartStore;
use std::sync::Arc;
use tracing::debug;

/// Owner of the cart store for one session
pub struct CartProvider {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    activity: Option<ActivityLog>,
    store: Option<Arc<CartStore>>,
}

impl CartProvider {
    /// Create an unmounted provider over an explicit storage backend
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            activity: None,
            store: None,
        }
    }

    /// Create an unmounted provider from configuration
    pub fn from_config(config: &Config) -> CartResult<Self> {
        let storage = open_store(&config.storage)?;
        let provider = Self::new(storage, config.storage.key.clone());
        Ok(provider.with_activity(ActivityLog::new(config)))
    }

    /// Record cart events to an activity log
    pub fn with_activity(mut self, activity: ActivityLog) -> Self {
        self.activity = Some(activity);
        self
    }

    /// Load the persisted cart and start serving it
    ///
    /// Mounting an already mounted provider keeps the existing store.
    pub async fn mount(&mut self) -> Arc<CartStore> {
        if let Some(store) = &self.store {
            return Arc::clone(store);
        }

        let store = Arc::new(
            CartStore::load_with_activity(
                Arc::clone(&self.storage),
                self.key.clone(),
                self.activity.clone(),
            )
            .await,
        );
        debug!("Cart provider mounted on {}", self.key);
        self.store = Some(Arc::clone(&store));
        store
    }

    /// Stop serving the cart; handles already given out keep working
    pub fn unmount(&mut self) {
        if self.store.take().is_some() {
            debug!("Cart provider unmounted from {}", self.key);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    /// Get the cart store of the active session
    pub fn cart(&self) -> CartResult<Arc<CartStore>> {
        self.store.clone().ok_or(CartError::OutsideProvider)
    }
}
