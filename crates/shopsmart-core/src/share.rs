//! Plain-text rendering of the list for sharing.

use crate::error::{CartError, Result};
use crate::item::ShoppingList;

/// Bullet placed before each shared item.
pub const BULLET: &str = "\u{2022}"; // •

/// Text handed to the platform share target.
///
/// Returns `None` when nothing is left to buy. Otherwise a count header,
/// a blank line, then one bullet per unchecked item in storage order.
pub fn share_text(list: &ShoppingList) -> Option<String> {
    let unchecked: Vec<&str> = list.unchecked().map(|item| item.name.as_str()).collect();
    if unchecked.is_empty() {
        return None;
    }

    let mut text = format!("Shopping List ({} items):\n\n", unchecked.len());
    let lines: Vec<String> = unchecked
        .iter()
        .map(|name| format!("{} {}", BULLET, name))
        .collect();
    text.push_str(&lines.join("\n"));
    Some(text)
}

/// `share_text`, reporting an all-checked list as `CartError::NothingToShare`.
pub fn try_share_text(list: &ShoppingList) -> Result<String> {
    share_text(list).ok_or(CartError::NothingToShare)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ShoppingItem;

    #[test]
    fn test_all_checked_shares_nothing() {
        let mut milk = ShoppingItem::new(1, "Milk");
        milk.checked = true;
        assert!(share_text(&ShoppingList::from_items(vec![milk])).is_none());
        assert!(share_text(&ShoppingList::new()).is_none());
        assert!(matches!(
            try_share_text(&ShoppingList::new()),
            Err(CartError::NothingToShare)
        ));
    }

    #[test]
    fn test_format() {
        let mut bread = ShoppingItem::new(2, "Bread");
        bread.checked = true;
        let list = ShoppingList::from_items(vec![
            ShoppingItem::new(1, "Milk"),
            bread,
            ShoppingItem::new(3, "Eggs"),
        ]);

        let text = share_text(&list).unwrap();
        assert_eq!(text, "Shopping List (2 items):\n\n\u{2022} Milk\n\u{2022} Eggs");
    }
}
