use crate::algebra::Algebra;
use crate::domain::{PersistedPost, Post, PostId, PostUpdate, UserId};
use crate::store::codec::{self, cache_key};

/// Blog-level helpers over an interpreter's capabilities.
///
/// The wrapper owns the cache format (a JSON array of posts keyed by the
/// author's id) so that programs never touch raw strings.
#[derive(Debug, Clone)]
pub struct BlogApi<P> {
    interpreter: P,
}

impl<P: Algebra> BlogApi<P> {
    /// Wraps `interpreter`.
    pub const fn new(interpreter: P) -> Self {
        Self { interpreter }
    }

    /// The wrapped interpreter.
    pub const fn interpreter(&self) -> &P {
        &self.interpreter
    }

    /// The cached posts of `user_id`, or `None` on a miss.
    ///
    /// An entry that does not decode counts as a miss.
    pub fn cache_get_posts(&self, user_id: UserId) -> P::Of<Option<Vec<Post>>> {
        let key = cache_key(user_id);
        let entry = self.interpreter.kv_get(&key);
        P::map(entry, move |entry| codec::decode_cached(&key, entry))
    }

    /// Caches `posts` for `user_id`; `false` if they cannot be encoded.
    pub fn cache_store_posts(&self, user_id: UserId, posts: &[Post]) -> P::Of<bool> {
        match codec::encode_posts(posts) {
            Ok(value) => self.interpreter.kv_put(&cache_key(user_id), &value),
            Err(error) => {
                tracing::warn!(user_id = %user_id, "Skipping cache write: {}", error);
                P::pure(false)
            }
        }
    }

    /// Drops the cached posts of `user_id`.
    pub fn cache_invalidate(&self, user_id: UserId) -> P::Of<bool> {
        self.interpreter.kv_delete(&cache_key(user_id))
    }

    /// `user_id`'s posts in creation order.
    pub fn db_get_posts(&self, user_id: UserId) -> P::Of<Vec<Post>> {
        self.interpreter.get_posts(user_id)
    }

    /// Stores `post` under a fresh id.
    pub fn db_create_post(&self, post: Post) -> P::Of<PersistedPost> {
        self.interpreter.create_post(post)
    }

    /// Applies `update` to the author's post `post_id`.
    pub fn db_update_post(
        &self,
        post_id: PostId,
        update: PostUpdate,
    ) -> P::Of<Option<PersistedPost>> {
        self.interpreter.update_post(post_id, update)
    }

    /// Delivers `posts` to `address` as a JSON array.
    pub fn net_send_posts(&self, posts: &[Post], address: &str) -> P::Of<()> {
        match codec::posts_payload(posts) {
            Ok(payload) => self.interpreter.net_send(payload, address),
            Err(error) => {
                tracing::warn!(address, "Skipping delivery: {}", error);
                P::pure(())
            }
        }
    }
}
