//! JSON shapes for command output.

use shopsmart_core::{ShoppingItem, ShoppingList};

use crate::ui::format::format_added;

/// Convert an item to JSON for output.
pub fn item_json(item: &ShoppingItem) -> serde_json::Value {
    serde_json::json!({
        "id": item.id,
        "name": item.name,
        "checked": item.checked,
        "quantity": item.quantity,
        "added_at": format_added(item.id, false),
    })
}

/// Convert a list (already in the desired order) to JSON for output.
pub fn list_json(list: &ShoppingList) -> serde_json::Value {
    let items: Vec<serde_json::Value> = list.items().iter().map(item_json).collect();
    serde_json::json!({
        "total": list.len(),
        "unchecked": list.unchecked_count(),
        "items": items,
    })
}

/// Print a JSON value on stdout.
pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_json_counts() {
        let mut eggs = ShoppingItem::new(2, "Eggs");
        eggs.checked = true;
        let list = ShoppingList::from_items(vec![ShoppingItem::new(1, "Milk"), eggs]);

        let json = list_json(&list);
        assert_eq!(json["total"], 2);
        assert_eq!(json["unchecked"], 1);
        assert_eq!(json["items"][0]["name"], "Milk");
        assert_eq!(json["items"][1]["checked"], true);
    }
}
