//! Storage abstraction for ShopSmart.
//!
//! This module defines the `KeyValueStore` trait and its backends.
//!
//! ## Architecture
//!
//! The list is persisted as one JSON document under a single key
//! (`LIST_KEY`), overwritten wholesale on every mutation:
//! - `MemoryStore`: in-process map, for tests and ephemeral sessions
//! - `FileStore`: one `<key>.json` file per key in a directory
//!
//! Backends do not interpret the stored text; encoding and decoding the list
//! is the list store's job.

pub mod file;
pub mod memory;
pub mod traits;

// Re-export public types
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;

/// Key under which the serialized shopping list is stored.
pub const LIST_KEY: &str = "shoppingList";
