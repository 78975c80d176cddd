//! Shopping items and the pure list transforms.
//!
//! Every transform consumes the list and hands back the new one, so the
//! owner always holds exactly one authoritative value. Persistence lives in
//! `list_store`.

use serde::{Deserialize, Serialize};

/// Item identifier: creation-time milliseconds since the Unix epoch.
pub type ItemId = i64;

/// A single entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Unique identifier
    pub id: ItemId,

    /// Trimmed, non-empty display name
    pub name: String,

    /// Whether the item has been picked up
    #[serde(default)]
    pub checked: bool,

    /// Always 1 today
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl ShoppingItem {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            checked: false,
            quantity: default_quantity(),
        }
    }

    /// Case-insensitive name comparison used for duplicate detection.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Ordered collection of items in storage (insertion) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<ShoppingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ShoppingItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// First item whose name matches `name` ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.has_name(name))
    }

    pub fn unchecked(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter().filter(|item| !item.checked)
    }

    /// Number of items still to buy; drives the header counter.
    pub fn unchecked_count(&self) -> usize {
        self.unchecked().count()
    }

    pub fn checked_count(&self) -> usize {
        self.items.len() - self.unchecked_count()
    }

    /// Highest id on the list, if any.
    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(|item| item.id).max()
    }

    /// Put `item` at the front of the list.
    pub fn prepend(mut self, item: ShoppingItem) -> Self {
        self.items.insert(0, item);
        self
    }

    /// Flip `checked` on the item with `id`; unchanged if absent.
    pub fn toggled(mut self, id: ItemId) -> Self {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.checked = !item.checked;
        }
        self
    }

    /// Drop the item with `id`; unchanged if absent.
    pub fn without(mut self, id: ItemId) -> Self {
        self.items.retain(|item| item.id != id);
        self
    }

    /// Drop every checked item, returning the new list and how many went.
    pub fn without_checked(mut self) -> (Self, usize) {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        let removed = before - self.items.len();
        (self, removed)
    }

    /// Copy sorted for display: unchecked first, stable within each group.
    pub fn visible_order(&self) -> Self {
        let (mut unchecked, checked): (Vec<_>, Vec<_>) =
            self.items.iter().cloned().partition(|item| !item.checked);
        unchecked.extend(checked);
        Self { items: unchecked }
    }
}

impl FromIterator<ShoppingItem> for ShoppingList {
    fn from_iter<I: IntoIterator<Item = ShoppingItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a ShoppingItem;
    type IntoIter = std::slice::Iter<'a, ShoppingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ItemId, name: &str, checked: bool) -> ShoppingItem {
        ShoppingItem {
            checked,
            ..ShoppingItem::new(id, name)
        }
    }

    fn names(list: &ShoppingList) -> Vec<&str> {
        list.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_visible_order_is_stable_partition() {
        let list = ShoppingList::from_items(vec![
            item(1, "A", true),
            item(2, "B", false),
            item(3, "C", true),
        ]);

        assert_eq!(names(&list.visible_order()), vec!["B", "A", "C"]);
        // Storage order untouched
        assert_eq!(names(&list), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let list = ShoppingList::from_items(vec![item(1, "Milk", false), item(2, "Eggs", true)]);
        let round_trip = list.clone().toggled(2).toggled(2);
        assert_eq!(round_trip, list);
    }

    #[test]
    fn test_without_checked_counts_removed() {
        let list = ShoppingList::from_items(vec![
            item(1, "Milk", true),
            item(2, "Eggs", false),
            item(3, "Bread", true),
        ]);
        let (list, removed) = list.without_checked();
        assert_eq!(removed, 2);
        assert_eq!(names(&list), vec!["Eggs"]);
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let list = ShoppingList::from_items(vec![item(1, "Greek Yogurt", false)]);
        assert!(list.find_by_name("greek YOGURT").is_some());
        assert!(list.find_by_name("yogurt").is_none());
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let list: ShoppingList = serde_json::from_str(r#"[{"id": 5, "name": "Milk"}]"#).unwrap();
        let milk = &list.items()[0];
        assert!(!milk.checked);
        assert_eq!(milk.quantity, 1);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let list = ShoppingList::from_items(vec![ShoppingItem::new(7, "Rice")]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"id":7,"name":"Rice","checked":false,"quantity":1}]"#);
    }
}
