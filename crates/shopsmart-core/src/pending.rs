//! Two-step confirmation for destructive operations.
//!
//! A caller first asks for a `Preview` of what an operation would do, shows
//! it to the user, and only then hands the same operation to
//! `ListStore::commit`. Previewing never touches storage.

use serde::Serialize;

use crate::item::ShoppingList;
use crate::templates::Template;

/// Operation that needs the user's confirmation before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOperation {
    /// Replace the whole list with a template
    LoadTemplate(Template),
    /// Remove every checked item
    ClearChecked,
}

/// What a pending operation would do to a given list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// Short title for the confirmation prompt
    pub title: String,
    /// One-sentence question to confirm
    pub message: String,
    /// Items that would disappear
    pub removes: usize,
    /// Items that would be created
    pub adds: usize,
    /// False when committing would change nothing
    pub actionable: bool,
}

impl PendingOperation {
    pub fn preview(&self, list: &ShoppingList) -> Preview {
        match self {
            Self::LoadTemplate(template) => Preview {
                title: "Load Template".to_string(),
                message: format!(
                    "Load {} template? This will replace your current list.",
                    template.key()
                ),
                removes: list.len(),
                adds: template.len(),
                actionable: true,
            },
            Self::ClearChecked => {
                let checked = list.checked_count();
                if checked == 0 {
                    Preview {
                        title: "No checked items".to_string(),
                        message: "No checked items to clear!".to_string(),
                        removes: 0,
                        adds: 0,
                        actionable: false,
                    }
                } else {
                    Preview {
                        title: "Clear Checked Items".to_string(),
                        message: format!("Clear {} checked items?", checked),
                        removes: checked,
                        adds: 0,
                        actionable: true,
                    }
                }
            }
        }
    }
}

/// Result of `ListStore::commit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    TemplateLoaded { template: Template, loaded: usize },
    Cleared(usize),
    NothingToClear,
    /// Template not loaded because no ids are left; the list is unchanged
    IdsExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ShoppingItem;

    #[test]
    fn test_template_preview_counts() {
        let list = ShoppingList::from_items(vec![ShoppingItem::new(1, "Milk")]);
        let preview = PendingOperation::LoadTemplate(Template::Bbq).preview(&list);
        assert!(preview.actionable);
        assert_eq!(preview.removes, 1);
        assert_eq!(preview.adds, 15);
        assert_eq!(
            preview.message,
            "Load bbq template? This will replace your current list."
        );
    }

    #[test]
    fn test_clear_preview_without_checked_items() {
        let list = ShoppingList::from_items(vec![ShoppingItem::new(1, "Milk")]);
        let preview = PendingOperation::ClearChecked.preview(&list);
        assert!(!preview.actionable);
        assert_eq!(preview.removes, 0);
    }

    #[test]
    fn test_clear_preview_counts_checked() {
        let mut eggs = ShoppingItem::new(2, "Eggs");
        eggs.checked = true;
        let list = ShoppingList::from_items(vec![ShoppingItem::new(1, "Milk"), eggs]);
        let preview = PendingOperation::ClearChecked.preview(&list);
        assert!(preview.actionable);
        assert_eq!(preview.message, "Clear 1 checked items?");
    }
}
