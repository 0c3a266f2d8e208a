//! Domain Layer - Core Entity Trait
//!
//! Every list entry carries a stable identity independent of its position.

/// Core trait for all list entries
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
