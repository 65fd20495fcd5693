//! In-memory backing state shared by every interpreter.
//!
//! [`StoreState`] pairs the per-author [`PostTable`] with the key-value
//! [`Cache`]. The state backend threads it by value; the fake async backend
//! keeps one behind a mutex.

mod cache;
pub mod codec;
mod table;

pub use cache::Cache;
pub use codec::CodecError;
pub use table::PostTable;

/// The database and the cache a program runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    /// Author id to (post id to post).
    pub database: PostTable,
    /// Serialized post lists keyed by user id.
    pub cache: Cache,
}

impl StoreState {
    /// Creates a state with an empty database and an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the database.
    #[must_use]
    pub fn with_database(mut self, database: PostTable) -> Self {
        self.database = database;
        self
    }

    /// Replaces the cache.
    #[must_use]
    pub fn with_cache(mut self, cache: Cache) -> Self {
        self.cache = cache;
        self
    }
}
