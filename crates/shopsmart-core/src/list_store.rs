//! List mutations with a persistence side channel.
//!
//! `ListStore` never owns the list. Callers pass the current `ShoppingList`
//! in by value and get the new one back; after every mutation the store
//! writes the full list under `LIST_KEY`. Storage failures never escape as
//! errors: they are logged and queued as `StorageWarning`s for the caller to
//! drain with `take_warnings`.

use std::fmt;

use tracing::{debug, info, warn};

use crate::error::{CartError, Result};
use crate::ids::{Clock, IdGenerator, SystemClock};
use crate::item::{ItemId, ShoppingItem, ShoppingList};
use crate::pending::{CommitOutcome, PendingOperation};
use crate::share;
use crate::storage::{KeyValueStore, LIST_KEY};
use crate::templates::Template;

/// Non-fatal storage problem raised during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageWarning {
    /// Saved list could not be read or decoded; the session started empty.
    ReadFailed(String),
    /// The latest list could not be saved; in-memory state is still current.
    WriteFailed(String),
}

impl fmt::Display for StorageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed(reason) => write!(f, "Could not read saved list: {}", reason),
            Self::WriteFailed(reason) => write!(f, "Could not save list: {}", reason),
        }
    }
}

/// Result of `ListStore::add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// New item created with this id
    Added(ItemId),
    /// An item with this name (ignoring case) already exists
    Duplicate(String),
    /// Name was empty after trimming
    Blank,
    /// No id is left above the highest saved one
    IdsExhausted,
}

impl AddOutcome {
    /// Map the outcome onto the error taxonomy.
    pub fn into_result(self) -> Result<ItemId> {
        match self {
            Self::Added(id) => Ok(id),
            Self::Duplicate(name) => Err(CartError::DuplicateItem(name)),
            Self::Blank => Err(CartError::InvalidInput("Item name is empty".to_string())),
            Self::IdsExhausted => Err(CartError::IdsExhausted),
        }
    }
}

/// Result of `ListStore::clear_checked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared(usize),
    NothingToClear,
}

impl ClearOutcome {
    pub fn into_result(self) -> Result<usize> {
        match self {
            Self::Cleared(count) => Ok(count),
            Self::NothingToClear => Err(CartError::NothingToClear),
        }
    }
}

/// Mutation and query surface over a persisted shopping list.
#[derive(Debug)]
pub struct ListStore<S, C = SystemClock> {
    store: S,
    ids: IdGenerator<C>,
    warnings: Vec<StorageWarning>,
}

impl<S: KeyValueStore> ListStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ListStore<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            ids: IdGenerator::with_clock(clock),
            warnings: Vec::new(),
        }
    }

    /// Read the saved list.
    ///
    /// A missing key yields an empty list. So does a read or decode failure,
    /// which is additionally queued as `StorageWarning::ReadFailed`.
    pub fn load(&mut self) -> ShoppingList {
        let list = match self.read_list() {
            Ok(list) => list,
            Err(err) => {
                warn!(error = %err, "Failed to load shopping list; starting empty");
                self.warnings
                    .push(StorageWarning::ReadFailed(err.to_string()));
                ShoppingList::new()
            }
        };
        if let Some(max) = list.max_id() {
            self.ids.observe(max);
        }
        debug!(items = list.len(), "Loaded shopping list");
        list
    }

    fn read_list(&self) -> Result<ShoppingList> {
        match self.store.get(LIST_KEY)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(ShoppingList::new()),
        }
    }

    /// Prepend a new unchecked item named `name` (trimmed).
    ///
    /// Blank names and case-insensitive duplicates leave the list untouched
    /// and skip persistence.
    pub fn add(&mut self, list: ShoppingList, name: &str) -> (ShoppingList, AddOutcome) {
        let name = name.trim();
        if name.is_empty() {
            return (list, AddOutcome::Blank);
        }
        if let Some(existing) = list.find_by_name(name) {
            let existing = existing.name.clone();
            debug!(name, existing = %existing, "Rejected duplicate item");
            return (list, AddOutcome::Duplicate(existing));
        }

        let id = match self.ids.next_id() {
            Ok(id) => id,
            Err(err) => {
                warn!(error = %err, name, "No id available for new item");
                return (list, AddOutcome::IdsExhausted);
            }
        };
        let list = list.prepend(ShoppingItem::new(id, name));
        info!(id, name, "Added item");
        self.persist(&list);
        (list, AddOutcome::Added(id))
    }

    /// Flip `checked` on `id`. Persists even when `id` is absent.
    pub fn toggle(&mut self, list: ShoppingList, id: ItemId) -> ShoppingList {
        let list = list.toggled(id);
        debug!(id, "Toggled item");
        self.persist(&list);
        list
    }

    /// Remove `id`. Persists even when `id` is absent.
    pub fn delete(&mut self, list: ShoppingList, id: ItemId) -> ShoppingList {
        let list = list.without(id);
        debug!(id, "Deleted item");
        self.persist(&list);
        list
    }

    /// Remove every checked item.
    pub fn clear_checked(&mut self, list: ShoppingList) -> (ShoppingList, ClearOutcome) {
        if list.checked_count() == 0 {
            return (list, ClearOutcome::NothingToClear);
        }
        let (list, removed) = list.without_checked();
        info!(removed, "Cleared checked items");
        self.persist(&list);
        (list, ClearOutcome::Cleared(removed))
    }

    /// Replace the whole list with fresh unchecked items named `names`.
    ///
    /// Names are trimmed; blanks and repeats (ignoring case) are skipped so
    /// the resulting list keeps unique names. If no ids are left the list
    /// comes back unchanged and nothing is written.
    pub fn load_template<N: AsRef<str>>(&mut self, list: ShoppingList, names: &[N]) -> ShoppingList {
        match self.replace_with(&list, names) {
            Ok(fresh) => fresh,
            Err(err) => {
                warn!(error = %err, "Template not loaded");
                list
            }
        }
    }

    fn replace_with<N: AsRef<str>>(
        &mut self,
        list: &ShoppingList,
        names: &[N],
    ) -> Result<ShoppingList> {
        let mut unique: Vec<&str> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || unique.iter().any(|seen| seen.to_lowercase() == name.to_lowercase()) {
                continue;
            }
            unique.push(name);
        }

        let ids = self.ids.next_batch(unique.len())?;
        let fresh: ShoppingList = ids
            .into_iter()
            .zip(unique)
            .map(|(id, name)| ShoppingItem::new(id, name))
            .collect();
        info!(replaced = list.len(), loaded = fresh.len(), "Loaded template items");
        self.persist(&fresh);
        Ok(fresh)
    }

    /// `load_template` with one of the built-in templates.
    pub fn load_named_template(&mut self, list: ShoppingList, template: Template) -> ShoppingList {
        debug!(template = %template, "Loading template");
        self.load_template(list, template.items())
    }

    /// Apply a previewed operation.
    pub fn commit(
        &mut self,
        list: ShoppingList,
        operation: &PendingOperation,
    ) -> (ShoppingList, CommitOutcome) {
        match operation {
            PendingOperation::LoadTemplate(template) => {
                debug!(template = %template, "Committing template load");
                match self.replace_with(&list, template.items()) {
                    Ok(fresh) => {
                        let loaded = fresh.len();
                        (fresh, CommitOutcome::TemplateLoaded { template: *template, loaded })
                    }
                    Err(err) => {
                        warn!(error = %err, template = %template, "Template not loaded");
                        (list, CommitOutcome::IdsExhausted)
                    }
                }
            }
            PendingOperation::ClearChecked => {
                let (list, outcome) = self.clear_checked(list);
                let outcome = match outcome {
                    ClearOutcome::Cleared(count) => CommitOutcome::Cleared(count),
                    ClearOutcome::NothingToClear => CommitOutcome::NothingToClear,
                };
                (list, outcome)
            }
        }
    }

    /// Display order: unchecked first, otherwise stable.
    pub fn visible_order(&self, list: &ShoppingList) -> ShoppingList {
        list.visible_order()
    }

    /// Share text for the unchecked items, if any.
    pub fn share_text(&self, list: &ShoppingList) -> Option<String> {
        share::share_text(list)
    }

    /// Warnings queued since the last call.
    pub fn take_warnings(&mut self) -> Vec<StorageWarning> {
        std::mem::take(&mut self.warnings)
    }

    pub fn warnings(&self) -> &[StorageWarning] {
        &self.warnings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self, list: &ShoppingList) {
        let result = serde_json::to_string(list)
            .map_err(CartError::from)
            .and_then(|json| self.store.set(LIST_KEY, &json));
        if let Err(err) = result {
            warn!(error = %err, items = list.len(), "Failed to save shopping list");
            self.warnings
                .push(StorageWarning::WriteFailed(err.to_string()));
        }
    }
}
