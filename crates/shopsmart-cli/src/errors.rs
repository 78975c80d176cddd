//! CLI error types for structured error handling.
//!
//! Handlers return `anyhow::Result`; `main` downcasts to `CliError` (or the
//! core `CartError`) to choose the exit code and hint.

use std::fmt;

use shopsmart_core::CartError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Item or template not found
    NotFound { message: String, hint: String },

    /// Item with the same name already exists
    Duplicate(String),

    /// Invalid user input
    InvalidInput { message: String, hint: Option<String> },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::Duplicate(name) => {
                write!(f, "Item already exists: '{}' is already in your list", name)
            }
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Hint line shown under the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::Duplicate(_) => None,
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::Duplicate(_) => exit_codes::DUPLICATE_ITEM,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

impl From<CartError> for CliError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::DuplicateItem(name) => CliError::Duplicate(name),
            CartError::UnknownTemplate(name) => CliError::not_found(
                format!("Template '{}' not found", name),
                "Run `shopsmart template list` to see available templates.",
            ),
            other => CliError::invalid_input(other.to_string()),
        }
    }
}

/// Exit code and hint for an error bubbling out of a handler.
pub fn classify(err: &anyhow::Error) -> (i32, Option<String>) {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return (cli_err.exit_code(), cli_err.hint().map(String::from));
    }
    if let Some(CartError::DuplicateItem(_)) = err.downcast_ref::<CartError>() {
        return (exit_codes::DUPLICATE_ITEM, None);
    }
    (1, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::not_found("x", "y").exit_code(), exit_codes::NOT_FOUND);
        assert_eq!(CliError::Duplicate("Milk".into()).exit_code(), exit_codes::DUPLICATE_ITEM);
        assert_eq!(CliError::invalid_input("x").exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_unknown_template_maps_to_not_found() {
        let err = CliError::from(CartError::UnknownTemplate("dessert".into()));
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
        assert!(err.hint().unwrap().contains("template list"));
    }

    #[test]
    fn test_classify_through_anyhow() {
        let err = anyhow::Error::new(CliError::Duplicate("Eggs".into()));
        assert_eq!(classify(&err).0, exit_codes::DUPLICATE_ITEM);

        let err = anyhow::anyhow!("boom");
        assert_eq!(classify(&err), (1, None));
    }
}
