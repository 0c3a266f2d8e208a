//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: list state and
//! focus requests are tracked separately.

use paper_todo_core::{AppState, RowKey};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Both lists plus view, drag, entry and export state
    pub app: AppState,
    /// Row whose text field should grab focus, tagged with the render
    /// revision it belongs to
    pub focus: Option<(RowKey, u64)>,
}

impl UiState {
    pub fn new(app: AppState) -> Self {
        Self { app, focus: None }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;
