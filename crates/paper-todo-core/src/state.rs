//! Application State
//!
//! One explicit state object owns both lists plus the view, drag, entry
//! and export state. `apply` is the only writer.

use crate::domain::Priority;
use crate::entry::{next_focus, row_keys, BlankRows, FocusTarget, RowKey};
use crate::event::{AppEvent, Outcome};
use crate::repository::{KeyValueStore, ListRepository};
use crate::reorder::DragState;
use crate::store::{EditResult, ItemStore, ListKind};
use crate::view::{ExportStatus, ViewState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    items: ItemStore,
    view: ViewState,
    drag: DragState,
    blanks: BlankRows,
    export: ExportStatus,
    revision: u64,
}

impl AppState {
    pub fn new(items: ItemStore) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn blanks(&self) -> &BlankRows {
        &self.blanks
    }

    pub fn export(&self) -> ExportStatus {
        self.export
    }

    /// Render generation; rows are keyed on it
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Keys of the editable active rows in display order
    pub fn row_keys(&self) -> Vec<RowKey> {
        row_keys(self.items.active(), &self.blanks)
    }

    /// Apply an event and write both lists through `repo` when it asks
    /// for it. Storage failures are logged and otherwise ignored.
    pub fn dispatch<S: KeyValueStore + ?Sized>(&mut self, event: AppEvent, repo: &ListRepository<'_, S>) -> Outcome {
        let outcome = self.apply(event);
        if outcome.persist {
            if let Err(e) = repo.save(&self.items) {
                log::warn!("Failed to persist lists: {}", e);
            }
        }
        outcome
    }

    pub fn apply(&mut self, event: AppEvent) -> Outcome {
        if self.export.is_busy() && event != AppEvent::ExportFinished {
            log::info!("Export in progress, ignoring {:?}", event);
            return Outcome::rejected();
        }

        let outcome = match event {
            AppEvent::EntryCommitted { draft, text } => {
                if !self.blanks.contains(draft) {
                    return Outcome::none();
                }
                if self.items.add_item(&text, Priority::Low, None).is_none() {
                    self.blanks.abandon(draft);
                    return Outcome::none();
                }
                self.blanks.commit(draft);
                Outcome::saved()
            }
            AppEvent::EntryAbandoned { draft } => {
                self.blanks.abandon(draft);
                Outcome::none()
            }
            AppEvent::TabPressed { from } => match next_focus(&self.row_keys(), from) {
                Some(FocusTarget::Row(key)) => Outcome::focus(key),
                Some(FocusTarget::NewBlank) => {
                    let draft = self.blanks.push();
                    Outcome::focus(RowKey::Blank(draft))
                }
                None => Outcome::none(),
            },
            AppEvent::TextEdited { id, text } => {
                let Some(index) = self.items.position(ListKind::Active, id) else {
                    return Outcome::none();
                };
                match self.items.edit_text(index, &text) {
                    EditResult::Updated | EditResult::Removed => Outcome::saved(),
                    // Redraw so the field shows the stored, trimmed text
                    EditResult::Unchanged => Outcome::render(),
                    EditResult::Missing => Outcome::none(),
                }
            }
            AppEvent::MetaChanged { id, field } => {
                let Some(index) = self.items.position(ListKind::Active, id) else {
                    return Outcome::none();
                };
                if self.items.edit_meta(index, field) {
                    Outcome::saved_in_place()
                } else {
                    Outcome::none()
                }
            }
            AppEvent::CompletionToggled { id, timestamp } => {
                let Some(index) = self.items.position(ListKind::Active, id) else {
                    return Outcome::none();
                };
                if self.items.complete(index, timestamp) {
                    Outcome::saved()
                } else {
                    Outcome::none()
                }
            }
            AppEvent::Restored { id } => match self.items.position(ListKind::Completed, id) {
                Some(index) if self.items.restore(index) => Outcome::saved(),
                _ => Outcome::none(),
            },
            AppEvent::RowDeleted { id, list } => match self.items.position(list, id) {
                Some(index) if self.items.delete_at(index, list) => Outcome::saved(),
                _ => Outcome::none(),
            },
            AppEvent::DragStarted { id, on_handle } => {
                self.drag.start(self.items.active(), id, on_handle);
                Outcome::none()
            }
            AppEvent::DragMoved { hover } => {
                self.drag.hover(self.items.active(), hover);
                Outcome::none()
            }
            AppEvent::DragDropped => {
                if !self.drag.is_dragging() {
                    return Outcome::none();
                }
                let moved = match self.drag.finish(self.items.active()) {
                    Some((from, to)) => {
                        log::debug!("Drop moves row {} to {}", from, to);
                        self.items.move_item(from, to)
                    }
                    None => false,
                };
                // Always rebuild rows to clear the drag preview
                Outcome {
                    persist: moved,
                    ..Outcome::render()
                }
            }
            AppEvent::ViewSwitched(view) => {
                self.view.view = view;
                self.drag = DragState::Idle;
                self.blanks.reset();
                Outcome::render()
            }
            AppEvent::OrientationToggled => {
                self.view.orientation = self.view.orientation.toggled();
                Outcome::none()
            }
            AppEvent::ExportStarted(format) => {
                self.drag = DragState::Idle;
                self.export = ExportStatus::Busy(format);
                log::info!("Export started: {:?} of {:?}", format, self.view.view);
                Outcome::none()
            }
            AppEvent::ExportFinished => {
                self.export = ExportStatus::Idle;
                Outcome::none()
            }
        };

        if outcome.rerender {
            self.revision += 1;
        }
        outcome
    }
}
