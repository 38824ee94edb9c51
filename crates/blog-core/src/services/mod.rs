//! Use cases - business operations composed from repository ports.

mod post_service;
mod theme_service;

pub use post_service::PostService;
pub use theme_service::ThemeService;
