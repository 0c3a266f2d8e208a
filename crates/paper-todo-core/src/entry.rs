//! Blank-row entry model
//!
//! The editable active list always ends with at least one blank row used
//! to type new items. Blank rows carry a draft id instead of an item id
//! and are never persisted.

use crate::domain::{Entity, Item, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DraftId(u64);

/// Identity of a rendered row in the editable active list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey {
    Item(ItemId),
    Blank(DraftId),
}

/// Where focus goes after a tab on a row's text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Row(RowKey),
    /// The last row was left; synthesize a blank row and focus it
    NewBlank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankRows {
    drafts: Vec<DraftId>,
    next: u64,
}

impl Default for BlankRows {
    fn default() -> Self {
        Self {
            drafts: vec![DraftId(0)],
            next: 1,
        }
    }
}

impl BlankRows {
    pub fn drafts(&self) -> &[DraftId] {
        &self.drafts
    }

    pub fn last(&self) -> Option<DraftId> {
        self.drafts.last().copied()
    }

    pub fn contains(&self, draft: DraftId) -> bool {
        self.drafts.contains(&draft)
    }

    /// Append a fresh blank row
    pub fn push(&mut self) -> DraftId {
        let draft = DraftId(self.next);
        self.next += 1;
        self.drafts.push(draft);
        draft
    }

    /// The draft became a real item. A fresh trailing row replaces it when
    /// it was the last one, so exactly one trailing blank row remains.
    pub fn commit(&mut self, draft: DraftId) -> bool {
        let Some(pos) = self.drafts.iter().position(|d| *d == draft) else {
            return false;
        };
        self.drafts.remove(pos);
        if pos == self.drafts.len() {
            self.push();
        }
        true
    }

    /// Drop an abandoned blank row, unless it is the only one left
    pub fn abandon(&mut self, draft: DraftId) -> bool {
        if self.drafts.len() <= 1 {
            return false;
        }
        let before = self.drafts.len();
        self.drafts.retain(|d| *d != draft);
        self.drafts.len() != before
    }

    /// Back to a single fresh blank row
    pub fn reset(&mut self) {
        self.drafts.clear();
        self.push();
    }
}

/// Row keys in display order: items first, then blank rows
pub fn row_keys(items: &[Item], blanks: &BlankRows) -> Vec<RowKey> {
    items
        .iter()
        .map(|item| RowKey::Item(item.id()))
        .chain(blanks.drafts().iter().map(|d| RowKey::Blank(*d)))
        .collect()
}

/// Tab navigation: the next row's text field, or a new blank row after
/// the last one. `None` when `current` is not rendered.
pub fn next_focus(rows: &[RowKey], current: RowKey) -> Option<FocusTarget> {
    let pos = rows.iter().position(|row| *row == current)?;
    Some(match rows.get(pos + 1) {
        Some(next) => FocusTarget::Row(*next),
        None => FocusTarget::NewBlank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    #[test]
    fn test_starts_with_one_blank_row() {
        let blanks = BlankRows::default();
        assert_eq!(blanks.drafts().len(), 1);
    }

    #[test]
    fn test_commit_last_keeps_one_trailing_row() {
        let mut blanks = BlankRows::default();
        let first = blanks.last().unwrap();
        assert!(blanks.commit(first));
        assert_eq!(blanks.drafts().len(), 1);
        assert_ne!(blanks.last(), Some(first));
    }

    #[test]
    fn test_commit_middle_does_not_add() {
        let mut blanks = BlankRows::default();
        let first = blanks.last().unwrap();
        let second = blanks.push();
        assert!(blanks.commit(first));
        assert_eq!(blanks.drafts(), &[second]);
    }

    #[test]
    fn test_commit_unknown_draft() {
        let mut blanks = BlankRows::default();
        assert!(!blanks.commit(DraftId(42)));
        assert_eq!(blanks.drafts().len(), 1);
    }

    #[test]
    fn test_abandon_never_removes_last_blank_row() {
        let mut blanks = BlankRows::default();
        let only = blanks.last().unwrap();
        assert!(!blanks.abandon(only));
        let extra = blanks.push();
        assert!(blanks.abandon(extra));
        assert_eq!(blanks.drafts(), &[only]);
    }

    #[test]
    fn test_reset() {
        let mut blanks = BlankRows::default();
        blanks.push();
        blanks.push();
        blanks.reset();
        assert_eq!(blanks.drafts().len(), 1);
    }

    #[test]
    fn test_tab_moves_to_next_row_or_new_blank() {
        let items = vec![Item::new("A", Priority::Low, None), Item::new("B", Priority::Low, None)];
        let blanks = BlankRows::default();
        let rows = row_keys(&items, &blanks);
        assert_eq!(rows.len(), 3);

        assert_eq!(next_focus(&rows, rows[0]), Some(FocusTarget::Row(rows[1])));
        assert_eq!(next_focus(&rows, rows[1]), Some(FocusTarget::Row(rows[2])));
        assert_eq!(next_focus(&rows, rows[2]), Some(FocusTarget::NewBlank));
        assert_eq!(next_focus(&rows, RowKey::Blank(DraftId(99))), None);
    }
}
