//! Cart store: the canonical in-memory cart mirrored to a key-value store
//!
//! Every mutation runs as one unit under a single async lock:
//! compute the new cart, write it to storage, then swap it into memory
//! and publish it to subscribers. A failed write leaves both memory and
//! subscribers untouched, and two mutations issued back to back can never
//! read the same stale cart.

use crate::activity::ActivityLog;
use crate::cart::{Cart, Change, ProductInfo};
use crate::error::{CartError, CartResult};
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

/// Stateful cart with an injected storage backend
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    state: Mutex<Cart>,
    updates: watch::Sender<Cart>,
    activity: Option<ActivityLog>,
}

impl CartStore {
    /// Load the persisted cart under `key`, starting empty when absent or unreadable
    pub async fn load(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self::load_with_activity(storage, key, None).await
    }

    /// Load the persisted cart and record events to `activity`
    pub async fn load_with_activity(
        storage: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        activity: Option<ActivityLog>,
    ) -> Self {
        let key = key.into();
        let cart = read_persisted(storage.as_ref(), &key, activity.as_ref()).await;

        debug!(
            "Loaded cart with {} item(s) from {} backend",
            cart.len(),
            storage.backend_name()
        );

        let (updates, _) = watch::channel(cart.clone());
        Self {
            storage,
            key,
            state: Mutex::new(cart),
            updates,
            activity,
        }
    }

    /// Storage key the cart is persisted under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Snapshot of the current cart
    pub fn products(&self) -> Cart {
        self.updates.borrow().clone()
    }

    /// Receive every cart that has been persisted from now on
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.updates.subscribe()
    }

    /// Add a product, merging into an existing line item
    pub async fn add_to_cart(&self, product: ProductInfo) -> CartResult<Cart> {
        product.validate()?;
        let id = product.id.clone();
        self.mutate("add", &id, move |cart| cart.add(product)).await
    }

    /// Increase the quantity of an item already in the cart
    pub async fn increment(&self, id: &str) -> CartResult<Cart> {
        self.mutate("increment", id, |cart| cart.increment(id)).await
    }

    /// Decrease the quantity of an item, removing it when it reaches zero
    pub async fn decrement(&self, id: &str) -> CartResult<Cart> {
        self.mutate("decrement", id, |cart| cart.decrement(id)).await
    }

    async fn mutate<F>(&self, op: &'static str, id: &str, apply: F) -> CartResult<Cart>
    where
        F: FnOnce(&mut Cart) -> Change,
    {
        let mut current = self.state.lock().await;

        let mut next = current.clone();
        let change = apply(&mut next);
        match change {
            Change::Missing => debug!("{}: no item with id {}, cart unchanged", op, id),
            Change::AtLimit => {
                warn!("{} {} not applied: quantity at maximum", op, id);
                return Err(CartError::QuantityLimit(id.to_string()));
            }
            _ => {}
        }

        let raw = next
            .to_persisted()
            .map_err(|e| CartError::write_failed(&self.key, e.into()))?;
        if let Err(e) = self.storage.set(&self.key, &raw).await {
            warn!("{} {} not applied: {}", op, id, e);
            return Err(CartError::write_failed(&self.key, e));
        }

        *current = next.clone();
        self.updates.send_replace(next.clone());
        drop(current);

        info!("{} {}: {} ({} item(s))", op, id, change.as_str(), next.len());
        if let Some(activity) = &self.activity {
            let mut data = serde_json::json!({
                "id": id,
                "change": change.as_str(),
                "items": next.len(),
            });
            if let Change::Quantity(quantity) = change {
                data["quantity"] = quantity.into();
            }
            activity.log(&format!("cart.{}", op), &data).await;
        }

        Ok(next)
    }
}

async fn read_persisted(
    storage: &dyn KeyValueStore,
    key: &str,
    activity: Option<&ActivityLog>,
) -> Cart {
    let failure = match storage.get(key).await {
        Ok(None) => return Cart::new(),
        Ok(Some(raw)) => match Cart::from_persisted(&raw) {
            Ok((cart, repairs)) => {
                if repairs.zero_quantity > 0 {
                    warn!(
                        "Dropped {} persisted item(s) with zero quantity under {}",
                        repairs.zero_quantity, key
                    );
                }
                if repairs.duplicates > 0 {
                    warn!(
                        "Merged {} persisted item(s) with a repeated id under {}",
                        repairs.duplicates, key
                    );
                }
                return cart;
            }
            Err(e) => CartError::PersistenceRead {
                key: key.to_string(),
                reason: e.to_string(),
            },
        },
        Err(e) => CartError::PersistenceRead {
            key: key.to_string(),
            reason: e.to_string(),
        },
    };

    warn!("{}; starting with an empty cart", failure);
    if let Some(activity) = activity {
        activity
            .log(
                "cart.load_failed",
                &serde_json::json!({ "key": key, "error": failure.to_string() }),
            )
            .await;
    }

    Cart::new()
}
