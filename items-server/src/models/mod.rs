//! Domain models with validation at construction
//!
//! Request bodies are validated when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod validation;

pub use item::{Item, ItemName, ItemPatch, NewItem};
pub use validation::ValidationError;
