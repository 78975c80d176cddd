//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};

use shopsmart_core::ItemId;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Creation time encoded in an item id.
pub fn added_at(id: ItemId) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(id)
}

/// Format an item's creation time for display.
pub fn format_added(id: ItemId, pretty: bool) -> String {
    match added_at(id) {
        Some(dt) if pretty => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        Some(dt) => dt.to_rfc3339(),
        None => "-".to_string(),
    }
}

/// "1 item" / "3 items".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_very_short_max() {
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_format_added() {
        // 2024-01-02T03:04:05Z
        let id = 1_704_164_645_000;
        assert_eq!(format_added(id, true), "2024-01-02 03:04 UTC");
        assert!(format_added(id, false).starts_with("2024-01-02T03:04:05"));
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 items");
        assert_eq!(count_label(1), "1 item");
        assert_eq!(count_label(12), "12 items");
    }
}
