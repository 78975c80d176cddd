//! Error types for ShopSmart core operations.
//!
//! Storage failures are reported here but the list store never lets them
//! escape a mutation; see `list_store::StorageWarning`. The remaining
//! variants are notices the front end maps to user-facing messages.

use thiserror::Error;

/// Result type alias for ShopSmart operations.
pub type Result<T> = std::result::Result<T, CartError>;

/// Core error type for ShopSmart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Persisted list could not be read
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Persisted list could not be written
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// Stored JSON could not be decoded or encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An item with the same name (ignoring case) is already on the list
    #[error("Item already exists: {0}")]
    DuplicateItem(String),

    /// Clear was requested but no item is checked
    #[error("No checked items to clear")]
    NothingToClear,

    /// Share was requested but every item is checked
    #[error("No items to share")]
    NothingToShare,

    /// Every id above the highest saved id is taken
    #[error("No item ids left; delete the item with the largest id")]
    IdsExhausted,

    /// Template key is not one of the known templates
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for CartError {
    fn from(err: serde_json::Error) -> Self {
        CartError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CartError::DuplicateItem("Milk".to_string()).to_string(),
            "Item already exists: Milk"
        );
        assert_eq!(CartError::NothingToClear.to_string(), "No checked items to clear");
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        assert!(matches!(CartError::from(err), CartError::Serialization(_)));
    }
}
