use crate::domain::model::{Item, TodoBoard};

/// Adds an item to a board and returns the new board.
///
/// The input board is only borrowed, so every other holder of it keeps
/// seeing the original items.
pub fn append(board: &TodoBoard, item: Item) -> TodoBoard {
    let mut items = Vec::with_capacity(board.count() + 1);
    items.extend_from_slice(board.items());
    items.push(item);
    TodoBoard::from_items(items)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ItemUseCase;

impl ItemUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn add_item(&self, board: &TodoBoard, item: Item) -> TodoBoard {
        let updated = append(board, item);
        tracing::debug!("Added item to board, count {} -> {}", board.count(), updated.count());
        updated
    }
}
