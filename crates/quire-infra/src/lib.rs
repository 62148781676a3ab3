//! # Quire Infrastructure
//!
//! Concrete implementations of the ports defined in `quire-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL post storage via SeaORM
//! - `minimal` - No external services, in-memory storage only

pub mod database;
pub mod render;

pub use database::{DatabaseConfig, InMemoryPostRepository};
pub use render::MiniJinjaRenderer;

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, connect};
