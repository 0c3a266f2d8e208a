//! Application events
//!
//! Every user interaction is translated into one of these and handed to
//! `AppState::apply`.

use crate::domain::{ItemId, MetaField};
use crate::entry::{DraftId, RowKey};
use crate::reorder::Hover;
use crate::store::ListKind;
use crate::view::{ExportFormat, View};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A blank row lost focus holding text
    EntryCommitted { draft: DraftId, text: String },
    /// A blank row lost focus while empty
    EntryAbandoned { draft: DraftId },
    /// Tab pressed in a row's text field
    TabPressed { from: RowKey },
    TextEdited { id: ItemId, text: String },
    MetaChanged { id: ItemId, field: MetaField },
    /// Checkbox clicked on an active row
    CompletionToggled { id: ItemId, timestamp: String },
    /// Checkbox clicked on a completed row
    Restored { id: ItemId },
    RowDeleted { id: ItemId, list: ListKind },
    DragStarted { id: ItemId, on_handle: bool },
    DragMoved { hover: Option<Hover> },
    DragDropped,
    ViewSwitched(View),
    OrientationToggled,
    ExportStarted(ExportFormat),
    ExportFinished,
}

/// What the caller has to do after an event was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Write both lists to storage
    pub persist: bool,
    /// The render revision was bumped; every row is rebuilt
    pub rerender: bool,
    /// Row whose text field should take focus once rendered
    pub focus: Option<RowKey>,
    /// Refused because an export is in flight
    pub rejected: bool,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    /// Persisted and re-rendered
    pub fn saved() -> Self {
        Self {
            persist: true,
            rerender: true,
            ..Self::default()
        }
    }

    /// Persisted without touching the rendered rows
    pub fn saved_in_place() -> Self {
        Self {
            persist: true,
            ..Self::default()
        }
    }

    pub fn render() -> Self {
        Self {
            rerender: true,
            ..Self::default()
        }
    }

    pub fn focus(key: RowKey) -> Self {
        Self {
            focus: Some(key),
            ..Self::default()
        }
    }

    pub fn rejected() -> Self {
        Self {
            rejected: true,
            ..Self::default()
        }
    }
}
