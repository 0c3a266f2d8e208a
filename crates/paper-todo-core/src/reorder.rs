//! Reorder Controller
//!
//! Drag state machine for the active list: `Idle -> Dragging -> Idle`.
//! The drag source and the hovered row are kept as ids and resolved to
//! positions against the current list, so an edit landing mid-gesture
//! cannot shift the drop onto the wrong row.

use crate::domain::{Entity, Item, ItemId};

/// Row under the pointer and which vertical half of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hover {
    pub id: ItemId,
    pub lower_half: bool,
}

impl Hover {
    pub fn upper(id: ItemId) -> Self {
        Self { id, lower_half: false }
    }

    pub fn lower(id: ItemId) -> Self {
        Self { id, lower_half: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        id: ItemId,
        hover: Option<Hover>,
    },
}

impl DragState {
    /// Begin a drag. A press outside the drag handle never starts one.
    pub fn start(&mut self, items: &[Item], id: ItemId, on_handle: bool) -> bool {
        if !on_handle || !items.iter().any(|item| item.id() == id) {
            *self = DragState::Idle;
            return false;
        }
        *self = DragState::Dragging { id, hover: None };
        true
    }

    /// Track the row under the pointer. Hovering anything that is not an
    /// item clears the target. Hovering the dragged row itself clears it
    /// too, except during the end-of-list preview: the row then sits at
    /// the end under the pointer and stands for the end position.
    pub fn hover(&mut self, items: &[Item], hover: Option<Hover>) {
        let keep_end = self.at_end(items);
        if let DragState::Dragging { id, hover: current } = self {
            match hover {
                Some(h) if h.id == *id => {
                    if !keep_end {
                        *current = None;
                    }
                }
                other => *current = other,
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn dragged_id(&self) -> Option<ItemId> {
        match self {
            DragState::Dragging { id, .. } => Some(*id),
            DragState::Idle => None,
        }
    }

    /// Insertion index in `0..=len`: the hovered row's position for the
    /// upper half, one past it for the lower half
    pub fn target(&self, items: &[Item]) -> Option<usize> {
        let DragState::Dragging { hover: Some(hover), .. } = self else {
            return None;
        };
        let pos = items.iter().position(|item| item.id() == hover.id)?;
        Some(if hover.lower_half { pos + 1 } else { pos })
    }

    /// The dragged row is shown at the end of the list
    pub fn at_end(&self, items: &[Item]) -> bool {
        self.target(items) == Some(items.len())
    }

    /// Position of the single row carrying the drop indicator. `None`
    /// while the end-of-list preview is active.
    pub fn indicator(&self, items: &[Item]) -> Option<usize> {
        if self.at_end(items) {
            return None;
        }
        self.target(items)
    }

    /// Display order of the item positions. While the target is the end of
    /// the list the dragged row is shown last; the data is untouched.
    pub fn visual_order(&self, items: &[Item]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..items.len()).collect();
        if self.at_end(items) {
            if let Some(source) = self.source(items) {
                order.remove(source);
                order.push(source);
            }
        }
        order
    }

    /// End the gesture. Returns `(from, to)` for a move when a target was
    /// recorded and differs from the source.
    pub fn finish(&mut self, items: &[Item]) -> Option<(usize, usize)> {
        let result = match (self.source(items), self.target(items)) {
            (Some(from), Some(to)) if from != to => Some((from, to)),
            _ => None,
        };
        *self = DragState::Idle;
        result
    }

    fn source(&self, items: &[Item]) -> Option<usize> {
        let id = self.dragged_id()?;
        items.iter().position(|item| item.id() == id)
    }
}
