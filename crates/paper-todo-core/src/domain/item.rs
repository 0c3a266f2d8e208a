//! Item Entity
//!
//! A todo entry and its archived form. Both serialize to the flat JSON
//! shapes kept in browser storage: `{text, priority, date}` plus
//! `timestamp` for completed entries.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::entity::Entity;

/// Stable identifier of a list entry.
///
/// Positions are derived from list order at render time; the id is what
/// rows and events refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// Item priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Localized label shown in selectors and exports
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "低",
            Priority::Medium => "中",
            Priority::High => "高",
        }
    }

    /// Unknown values fall back to `Low`
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Low,
        }
    }
}

/// Metadata edit that leaves the row structure untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaField {
    Priority(Priority),
    /// `None` (or an empty string from a date input) clears the date
    Date(Option<String>),
}

/// A todo item in the active list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Older saves carry no id; a fresh one is generated on load
    #[serde(default)]
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<String>,
}

impl Item {
    pub fn new(text: impl Into<String>, priority: Priority, date: Option<String>) -> Self {
        Self {
            id: ItemId::new(),
            text: text.into(),
            priority,
            date: date.filter(|d| !d.trim().is_empty()),
        }
    }

    /// Whether the text is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn apply_meta(&mut self, field: MetaField) {
        match field {
            MetaField::Priority(priority) => self.priority = priority,
            MetaField::Date(date) => self.date = date.filter(|d| !d.trim().is_empty()),
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// An archived item with its completion moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedItem {
    #[serde(flatten)]
    pub item: Item,
    /// Locale-formatted completion time, never changed after archiving
    pub timestamp: String,
}

impl CompletedItem {
    pub fn new(item: Item, timestamp: impl Into<String>) -> Self {
        Self {
            item,
            timestamp: timestamp.into(),
        }
    }

    /// Drop the timestamp and hand back the original item
    pub fn into_item(self) -> Item {
        self.item
    }
}

impl Entity for CompletedItem {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.item.id
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|d| !d.trim().is_empty()))
}
