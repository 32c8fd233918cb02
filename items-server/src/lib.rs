//! items-server: CRUD HTTP service for a single `items` table
//!
//! Request pipeline: extractor validation → unit of work → repository →
//! mapped response. See [`http::build_router`] for the route table.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{PoolConfig, ServerConfig};
