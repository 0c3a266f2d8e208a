//! Repository Layer
//!
//! Key-value persistence of the two lists.

mod traits;
mod memory;
mod lists;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use lists::ListRepository;
