//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod item;
pub mod pagination;

pub use validation::ValidationError;
pub use item::{ItemChanges, ItemDescription, ItemName, NewItem};
pub use pagination::{ListParams, ListQuery};
