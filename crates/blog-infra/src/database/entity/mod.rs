//! SeaORM entities for the blog tables.

pub mod post;
pub mod theme;
