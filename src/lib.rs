//! Marketcart - persistent shopping cart
//!
//! Holds an ordered list of cart line items, applies add / increment /
//! decrement with merge and delete-on-zero semantics, and mirrors every
//! change to a key-value store before publishing it to subscribers.

pub mod activity;
pub mod cart;
pub mod cli;
pub mod config;
pub mod error;
pub mod provider;
pub mod storage;
pub mod store;
pub mod ui;

pub use cart::{Cart, LineItem, ProductInfo, Repairs};
pub use error::{CartError, CartResult};
pub use provider::CartProvider;
pub use store::CartStore;
