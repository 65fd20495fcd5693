//! Blog-level helpers built from the raw instructions.
//!
//! These own the cache format: posts are cached as a JSON array under the
//! author's id, and the same array is what gets delivered over the network.

use super::{Program, kv_delete, kv_get, kv_put, net_send};
use crate::domain::{Post, UserId};
use crate::store::codec::{self, cache_key};

/// The cached posts of `user_id`, or `None` on a miss.
///
/// An entry that does not decode counts as a miss.
pub fn cache_get_posts(user_id: UserId) -> Program<Option<Vec<Post>>> {
    let key = cache_key(user_id);
    kv_get(key.clone()).map(move |entry| codec::decode_cached(&key, entry))
}

/// Caches `posts` for `user_id`.
///
/// Yields `false` without touching the cache if the posts cannot be encoded.
pub fn cache_store_posts(user_id: UserId, posts: &[Post]) -> Program<bool> {
    match codec::encode_posts(posts) {
        Ok(value) => kv_put(cache_key(user_id), value),
        Err(error) => {
            tracing::warn!(user_id = %user_id, "Skipping cache write: {}", error);
            Program::pure(false)
        }
    }
}

/// Drops the cached posts of `user_id`.
pub fn cache_invalidate(user_id: UserId) -> Program<bool> {
    kv_delete(cache_key(user_id))
}

/// Delivers `posts` to `address` as a JSON array.
pub fn net_send_posts(posts: &[Post], address: impl Into<String>) -> Program<()> {
    let address = address.into();
    match codec::posts_payload(posts) {
        Ok(payload) => net_send(payload, address),
        Err(error) => {
            tracing::warn!(address = %address, "Skipping delivery: {}", error);
            Program::pure(())
        }
    }
}
