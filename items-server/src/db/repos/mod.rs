//! Repository implementations for database access
//!
//! Repositories borrow the connection of an open unit of work; they never
//! begin or commit transactions themselves.

pub mod items;

pub use items::{DbError, Item, ItemRepo};
