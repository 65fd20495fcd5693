//! The effect vocabulary as a set of capabilities.
//!
//! Seven operations in three families, each returning its result in the
//! interpreter's [`Carrier`]:
//!
//! | family     | operation                          | result                  |
//! |------------|------------------------------------|-------------------------|
//! | key-value  | `kv_get(key)`                      | `Option<String>`        |
//! |            | `kv_put(key, value)`               | `bool` (stored)         |
//! |            | `kv_delete(key)`                   | `bool` (was present)    |
//! | database   | `get_posts(user_id)`               | `Vec<Post>`             |
//! |            | `create_post(post)`                | `PersistedPost`         |
//! |            | `update_post(post_id, update)`     | `Option<PersistedPost>` |
//! | network    | `net_send(payload, address)`       | `()`                    |
//!
//! Tagless-final programs call these methods directly; free-monad programs
//! are folded into them by [`Program::interpret`](crate::free::Program::interpret).
//! Either way, the backend is whichever implementation is supplied.

use serde_json::Value;

use crate::domain::{PersistedPost, Post, PostId, PostUpdate, UserId};
use crate::effect::Carrier;

/// String key-value cache operations.
pub trait KvStore: Carrier {
    /// Looks up `key`.
    fn kv_get(&self, key: &str) -> Self::Of<Option<String>>;

    /// Stores `value` under `key`, reporting success.
    fn kv_put(&self, key: &str, value: &str) -> Self::Of<bool>;

    /// Removes `key`, reporting whether an entry existed.
    fn kv_delete(&self, key: &str) -> Self::Of<bool>;
}

/// Post database operations.
pub trait Database: Carrier {
    /// All posts by `user_id` in creation order; empty for unknown users.
    fn get_posts(&self, user_id: UserId) -> Self::Of<Vec<Post>>;

    /// Stores `post` under the next id for its author.
    fn create_post(&self, post: Post) -> Self::Of<PersistedPost>;

    /// Merges `update` into the author's post `post_id`, or yields `None`
    /// if there is no such post.
    fn update_post(&self, post_id: PostId, update: PostUpdate) -> Self::Of<Option<PersistedPost>>;
}

/// Outbound delivery.
pub trait Network: Carrier {
    /// Delivers `payload` to `address`. Always succeeds.
    fn net_send(&self, payload: Value, address: &str) -> Self::Of<()>;
}

/// Every capability a blog program may use.
pub trait Algebra: KvStore + Database + Network {}

impl<P> Algebra for P where P: KvStore + Database + Network {}
