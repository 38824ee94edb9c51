//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate contains posts, themes and their use cases with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
