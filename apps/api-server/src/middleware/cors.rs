//! Cross-origin policy.

use actix_cors::Cors;

/// Any origin, method and header may call the API; there is no auth boundary.
pub fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
