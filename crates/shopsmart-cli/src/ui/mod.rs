//! UI primitives for the ShopSmart CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, colors, checkbox symbols
//! - **Render**: Headers, badges, hints, tables
//! - **Format**: String utilities (truncate, timestamps)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::{Terminal, UiContext};
pub use mode::{OutputMode, OutputRequest};
pub use theme::Badge;

pub use render::{badge, blank_line, header, hint, print, print_error, table, Column};
