//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Note: Data is lost on process restart.

mod post;
mod theme;

pub use post::InMemoryPostRepository;
pub use theme::InMemoryThemeRepository;

use std::collections::BTreeMap;

/// Rows keyed by id plus the next id to hand out.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Case-insensitive substring match.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
