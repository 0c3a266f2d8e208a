//! Domain Layer
//!
//! Items and their archived (completed) form.
//! This layer has NO external dependencies (except serde and uuid).

mod entity;
mod item;

pub use entity::Entity;
pub use item::{CompletedItem, Item, ItemId, MetaField, Priority};
