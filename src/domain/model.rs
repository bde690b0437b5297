use serde::{Deserialize, Serialize};

/// A todo item. It carries no attributes yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item;

/// An ordered list of items.
///
/// Boards have value semantics: nothing in the public API mutates the
/// sequence in place. Adding an item goes through
/// [`ItemUseCase::add_item`](crate::app::item_use_case::ItemUseCase::add_item),
/// which hands back a new board and leaves the old one untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoBoard {
    items: Vec<Item>,
}

impl TodoBoard {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
