//! Paper Todo Core
//!
//! Layered like the app it drives:
//! - domain: items and completed items
//! - repository: key-value persistence of the two lists
//! - store / reorder / entry / view: list operations and UI state machines
//! - state: the single reducer over all of the above

pub mod config;
pub mod domain;
pub mod entry;
pub mod error;
pub mod event;
pub mod reorder;
pub mod repository;
pub mod state;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use domain::{CompletedItem, Item, ItemId, MetaField, Priority};
pub use entry::{DraftId, RowKey};
pub use error::{PersistError, StorageError};
pub use event::{AppEvent, Outcome};
pub use reorder::{DragState, Hover};
pub use repository::{KeyValueStore, ListRepository, MemoryStore};
pub use state::AppState;
pub use store::{ItemStore, ListKind};
pub use view::{ExportFormat, ExportStatus, Orientation, RowMode, View, ViewState};
