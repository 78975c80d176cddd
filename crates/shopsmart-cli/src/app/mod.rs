//! Application-level utilities for the ShopSmart CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Store directory resolution

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
