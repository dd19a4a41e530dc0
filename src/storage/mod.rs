//! Key-value storage backends for the persisted cart
//!
//! - `file`: one JSON document on disk, replaced atomically per write
//! - `memory`: in-process map, useful for tests and ephemeral sessions

mod backend;
mod factory;
mod file;
mod memory;

pub use backend::KeyValueStore;
pub use factory::{open_store, Backend};
pub use file::FileStore;
pub use memory::MemoryStore;
