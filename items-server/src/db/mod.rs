//! Database layer - connection pool, schema, unit of work and repositories
//!
//! # Design Principles
//!
//! - One transaction per request, opened by `unit_of_work::run`
//! - Repositories never see the pool, only the transaction's connection
//! - Absence is a return value; only storage failures are errors

pub mod pool;
pub mod repos;
pub mod schema;
pub mod unit_of_work;

pub use pool::{create_lazy_pool, create_pool};
pub use repos::*;
