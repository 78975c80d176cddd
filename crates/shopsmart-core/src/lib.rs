//! # ShopSmart Core
//!
//! Core library for ShopSmart - a single-list shopping companion.
//!
//! This crate provides the list model, persistence abstractions, and the
//! suggestion matcher independent of any front end.
//!
//! ## Architecture
//!
//! - **item**: `ShoppingItem` and the pure `ShoppingList` transforms
//! - **ids**: Monotonic item id generation
//! - **list_store**: Mutations with a persistence side channel
//! - **pending**: Two-step preview/commit for destructive operations
//! - **share**: Plain-text rendering for sharing
//! - **storage**: Key-value store trait and backends
//! - **suggest**: Autocomplete over the grocery vocabulary
//! - **templates**: Fixed bulk-load templates

pub mod error;
pub mod fs;
pub mod ids;
pub mod item;
pub mod list_store;
pub mod pending;
pub mod share;
pub mod storage;
pub mod suggest;
pub mod templates;

pub use error::{CartError, Result};
pub use item::{ItemId, ShoppingItem, ShoppingList};
pub use list_store::{AddOutcome, ClearOutcome, ListStore, StorageWarning};
pub use pending::{CommitOutcome, PendingOperation, Preview};
pub use storage::KeyValueStore;
pub use suggest::SuggestionMatcher;
pub use templates::Template;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
