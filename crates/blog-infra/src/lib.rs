//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM. Without it
//!   only the in-memory repositories are built.

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use database::DatabaseConfig;
pub use memory::{InMemoryPostRepository, InMemoryThemeRepository};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresThemeRepository};
