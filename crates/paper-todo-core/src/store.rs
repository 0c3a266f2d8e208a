//! Item Store
//!
//! Owns the active and completed lists. Operations are positional; the
//! reducer resolves stable ids to positions right before calling them.
//! Out-of-range positions are silent no-ops.

use crate::domain::{CompletedItem, Entity, Item, ItemId, MetaField, Priority};

/// Which of the two lists an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Active,
    Completed,
}

/// Result of a text edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    Updated,
    /// The new text was blank, so the item was deleted
    Removed,
    Unchanged,
    /// No item at that position
    Missing,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStore {
    active: Vec<Item>,
    completed: Vec<CompletedItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded lists, dropping blank active items
    pub fn from_lists(active: Vec<Item>, completed: Vec<CompletedItem>) -> Self {
        let active = active.into_iter().filter(|item| !item.is_blank()).collect();
        Self { active, completed }
    }

    pub fn active(&self) -> &[Item] {
        &self.active
    }

    pub fn completed(&self) -> &[CompletedItem] {
        &self.completed
    }

    /// Current position of an item, computed from list order
    pub fn position(&self, kind: ListKind, id: ItemId) -> Option<usize> {
        match kind {
            ListKind::Active => position_of(&self.active, id),
            ListKind::Completed => position_of(&self.completed, id),
        }
    }

    /// Append a new item; blank text is ignored
    pub fn add_item(&mut self, text: &str, priority: Priority, date: Option<String>) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let item = Item::new(text, priority, date);
        let id = item.id;
        self.active.push(item);
        Some(id)
    }

    /// Replace the text at `index`; clearing it deletes the item
    pub fn edit_text(&mut self, index: usize, new_text: &str) -> EditResult {
        if index >= self.active.len() {
            return EditResult::Missing;
        }
        let new_text = new_text.trim();
        if new_text.is_empty() {
            self.active.remove(index);
            return EditResult::Removed;
        }
        let item = &mut self.active[index];
        if item.text == new_text {
            return EditResult::Unchanged;
        }
        item.text = new_text.to_string();
        EditResult::Updated
    }

    pub fn edit_meta(&mut self, index: usize, field: MetaField) -> bool {
        match self.active.get_mut(index) {
            Some(item) => {
                item.apply_meta(field);
                true
            }
            None => false,
        }
    }

    /// Archive the item at `index`; blank items are dropped instead
    pub fn complete(&mut self, index: usize, timestamp: impl Into<String>) -> bool {
        if index >= self.active.len() {
            return false;
        }
        let item = self.active.remove(index);
        if !item.is_blank() {
            self.completed.push(CompletedItem::new(item, timestamp));
        }
        true
    }

    /// Move an archived item back to the end of the active list
    pub fn restore(&mut self, index: usize) -> bool {
        if index >= self.completed.len() {
            return false;
        }
        let done = self.completed.remove(index);
        self.active.push(done.into_item());
        true
    }

    pub fn delete_at(&mut self, index: usize, kind: ListKind) -> bool {
        match kind {
            ListKind::Active if index < self.active.len() => {
                self.active.remove(index);
                true
            }
            ListKind::Completed if index < self.completed.len() => {
                self.completed.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Move an active item from `from` to the insertion point `to`.
    ///
    /// `to` is measured before the source is removed (`0..=len`). When it
    /// lies after the source it is decremented by one to account for the
    /// removal. Returns whether the order changed.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.active.len();
        if from >= len || to > len || to == from {
            return false;
        }
        let adjusted = if to > from { to - 1 } else { to };
        if adjusted == from {
            return false;
        }
        let item = self.active.remove(from);
        self.active.insert(adjusted, item);
        true
    }
}

fn position_of<T: Entity<Id = ItemId>>(items: &[T], id: ItemId) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str]) -> ItemStore {
        let mut store = ItemStore::new();
        for text in texts {
            store.add_item(text, Priority::Low, None);
        }
        store
    }

    fn texts(store: &ItemStore) -> Vec<&str> {
        store.active().iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn test_add_grows_by_one_per_nonempty_text() {
        let mut store = ItemStore::new();
        for (n, text) in ["a", "b", "c"].iter().enumerate() {
            assert!(store.add_item(text, Priority::Low, None).is_some());
            assert_eq!(store.active().len(), n + 1);
        }
        assert!(store.add_item("", Priority::Low, None).is_none());
        assert!(store.add_item("   ", Priority::High, None).is_none());
        assert_eq!(store.active().len(), 3);
    }

    #[test]
    fn test_add_trims_text() {
        let mut store = ItemStore::new();
        store.add_item("  Buy milk \n", Priority::Low, None);
        assert_eq!(texts(&store), vec!["Buy milk"]);
    }

    #[test]
    fn test_edit_text_updates_or_removes() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.edit_text(0, "alpha"), EditResult::Updated);
        assert_eq!(store.edit_text(0, " alpha "), EditResult::Unchanged);
        assert_eq!(store.edit_text(1, "  "), EditResult::Removed);
        assert_eq!(texts(&store), vec!["alpha"]);
        assert_eq!(store.edit_text(7, "x"), EditResult::Missing);
    }

    #[test]
    fn test_edit_meta() {
        let mut store = store_with(&["a"]);
        assert!(store.edit_meta(0, MetaField::Priority(Priority::High)));
        assert!(store.edit_meta(0, MetaField::Date(Some("2024-01-02".into()))));
        assert!(!store.edit_meta(3, MetaField::Priority(Priority::Medium)));
        let item = &store.active()[0];
        assert_eq!(item.priority, Priority::High);
        assert_eq!(item.date.as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn test_complete_then_restore_preserves_item() {
        let mut store = ItemStore::new();
        store.add_item("Report", Priority::Medium, Some("2024-03-04".into()));
        let original = store.active()[0].clone();

        assert!(store.complete(0, "2024/3/4 09:00:00"));
        assert!(store.active().is_empty());
        assert_eq!(store.completed()[0].timestamp, "2024/3/4 09:00:00");

        let j = store.position(ListKind::Completed, original.id).unwrap();
        assert!(store.restore(j));
        assert_eq!(store.active(), &[original]);
        assert!(store.completed().is_empty());
    }

    #[test]
    fn test_complete_drops_blank_item() {
        let mut store = ItemStore::from_lists(Vec::new(), Vec::new());
        store.active.push(Item::new("", Priority::Low, None));
        assert!(store.complete(0, "now"));
        assert!(store.active().is_empty());
        assert!(store.completed().is_empty());
    }

    #[test]
    fn test_restore_appends_to_end() {
        let mut store = store_with(&["a", "b"]);
        store.complete(0, "t");
        store.restore(0);
        assert_eq!(texts(&store), vec!["b", "a"]);
    }

    #[test]
    fn test_invalid_positions_are_noops() {
        let mut store = store_with(&["a"]);
        let before = store.clone();
        assert!(!store.complete(5, "t"));
        assert!(!store.restore(0));
        assert!(!store.delete_at(1, ListKind::Active));
        assert!(!store.delete_at(0, ListKind::Completed));
        assert!(!store.move_item(4, 0));
        assert!(!store.move_item(0, 9));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_at_each_list() {
        let mut store = store_with(&["a", "b"]);
        store.complete(1, "t");
        assert!(store.delete_at(0, ListKind::Completed));
        assert!(store.delete_at(0, ListKind::Active));
        assert_eq!(store, ItemStore::new());
    }

    #[test]
    fn test_move_to_end() {
        let mut store = store_with(&["A", "B", "C"]);
        assert!(store.move_item(0, 3));
        assert_eq!(texts(&store), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_move_upwards() {
        let mut store = store_with(&["A", "B", "C"]);
        assert!(store.move_item(2, 0));
        assert_eq!(texts(&store), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_move_onto_own_slot_is_noop() {
        let mut store = store_with(&["A", "B", "C"]);
        assert!(!store.move_item(1, 1));
        assert!(!store.move_item(1, 2));
        assert_eq!(texts(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_move_inverse_restores_order() {
        let names = ["A", "B", "C", "D", "E"];
        for a in 0..names.len() {
            for b in 0..=names.len() {
                let mut store = store_with(&names);
                if !store.move_item(a, b) {
                    continue;
                }
                let landed = if b > a { b - 1 } else { b };
                let back = if a > landed { a + 1 } else { a };
                assert!(store.move_item(landed, back));
                assert_eq!(texts(&store), names.to_vec(), "move({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_from_lists_drops_blank_items() {
        let store = ItemStore::from_lists(
            vec![Item::new(" ", Priority::Low, None), Item::new("kept", Priority::Low, None)],
            Vec::new(),
        );
        assert_eq!(texts(&store), vec!["kept"]);
    }
}
