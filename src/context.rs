//! Application Context
//!
//! The single controller: every component sends its events through
//! `AppContext::dispatch`, which runs the reducer and persists the lists.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{DndSignals, DragGesture, Half};
use paper_todo_core::{
    AppConfig, AppEvent, AppState, ExportFormat, Hover, ItemId, ListRepository, Orientation, Outcome, RowKey,
};

use crate::export;
use crate::storage::BrowserStorage;
use crate::store::{UiStateStoreFields, UiStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: UiStore,
    /// `web_sys::Storage` is not `Send`, so it lives in local storage
    storage: StoredValue<BrowserStorage, LocalStorage>,
    config: StoredValue<AppConfig>,
    /// Drag gesture signals for the active list
    pub dnd: DndSignals<ItemId>,
}

impl AppContext {
    pub fn new(store: UiStore, storage: BrowserStorage, config: AppConfig, dnd: DndSignals<ItemId>) -> Self {
        Self {
            store,
            storage: StoredValue::new_local(storage),
            config: StoredValue::new(config),
            dnd,
        }
    }

    /// Read the state, tracking it
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&*self.store.app().read())
    }

    /// Read the state without subscribing
    pub fn with_state_untracked<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&*self.store.app().read_untracked())
    }

    /// Run an event through the reducer and persist when it asks for it
    pub fn dispatch(&self, event: AppEvent) -> Outcome {
        let store = self.store;
        self.storage.with_value(|storage| {
            self.config.with_value(|config| {
                let repo = ListRepository::new(storage, &config.storage);
                store.app().write().dispatch(event, &repo)
            })
        })
    }

    /// Ask the row `key` of the current render to take focus
    pub fn request_focus(&self, key: RowKey) {
        let revision = self.with_state_untracked(|s| s.revision());
        self.store.focus().set(Some((key, revision)));
    }

    /// Whether `key` in render `revision` should take focus now
    pub fn focus_requested(&self, key: RowKey, revision: u64) -> bool {
        self.store.focus().get() == Some((key, revision))
    }

    pub fn clear_focus(&self) {
        self.store.focus().set(None);
    }

    /// Tab in a row's text field. Navigation is resolved before the row's
    /// own edit is committed, since committing may remove or rebuild it.
    pub fn tab_from(&self, key: RowKey, commit: AppEvent) {
        let target = self.dispatch(AppEvent::TabPressed { from: key }).focus;
        self.dispatch(commit);
        if let Some(target) = target {
            self.request_focus(target);
        }
    }

    /// Translate a drag gesture into a reducer event
    pub fn on_drag(&self, gesture: DragGesture<ItemId>) {
        let event = match gesture {
            DragGesture::Started { key, on_handle } => AppEvent::DragStarted { id: key, on_handle },
            DragGesture::Hovered(hover) => AppEvent::DragMoved {
                hover: hover.map(|(id, half)| Hover {
                    id,
                    lower_half: half == Half::Lower,
                }),
            },
            DragGesture::Released => AppEvent::DragDropped,
        };
        self.dispatch(event);
    }

    pub fn page_width_mm(&self, orientation: Orientation) -> u32 {
        self.config.with_value(|config| orientation.page_width_mm(&config.export))
    }

    /// Snapshot the visible list and hand it to the rasterizer. The export
    /// page is rendered while the state is busy; mutations are refused
    /// until the export finishes.
    pub fn start_export(&self, format: ExportFormat) {
        if self.dispatch(AppEvent::ExportStarted(format)).rejected {
            return;
        }
        let view = self.with_state_untracked(|s| s.view());
        let scale = self.config.with_value(|config| config.export.scale);
        let ctx = *self;
        spawn_local(async move {
            match export::run_export(format, view, scale).await {
                Ok(()) => log::info!("Exported {}", format.file_name(view.view)),
                Err(e) => log::error!("Export failed: {}", e),
            }
            ctx.dispatch(AppEvent::ExportFinished);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Locale-style completion time, e.g. `2024/5/1 09:03:07`
pub fn completion_timestamp() -> String {
    chrono::Local::now().format("%Y/%-m/%-d %H:%M:%S").to_string()
}
