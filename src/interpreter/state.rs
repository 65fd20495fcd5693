use serde_json::Value;

use crate::algebra::{Database, KvStore, Network};
use crate::domain::{PersistedPost, Post, PostId, PostUpdate, UserId};
use crate::effect::{Carrier, State};
use crate::store::StoreState;

/// Deterministic backend: every operation is a `State` transition over a
/// [`StoreState`].
///
/// Running a program means calling `run` on the returned `State` with an
/// initial store; the final store comes back alongside the result and
/// nothing else is touched.
///
/// # Examples
///
/// ```rust
/// use blog_effects::algebra::KvStore;
/// use blog_effects::interpreter::StateInterpreter;
/// use blog_effects::store::StoreState;
///
/// let (stored, state) = StateInterpreter.kv_put("1", "[]").run(StoreState::new());
/// assert!(stored);
/// assert_eq!(state.cache.get("1").as_deref(), Some("[]"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateInterpreter;

impl Carrier for StateInterpreter {
    type Of<A: Send + 'static> = State<StoreState, A>;

    fn pure<A: Send + 'static>(value: A) -> Self::Of<A> {
        State::pure(value)
    }

    fn flat_map<A, B, F>(effect: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Self::Of<B> + Send + 'static,
    {
        effect.flat_map(function)
    }

    fn map<A, B, F>(effect: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        effect.fmap(function)
    }
}

/// Runs `operation` against the store and keeps whatever it leaves behind.
fn update_store<A, F>(operation: F) -> State<StoreState, A>
where
    A: 'static,
    F: FnOnce(&mut StoreState) -> A + Send + 'static,
{
    State::new(move |mut state: StoreState| {
        let result = operation(&mut state);
        (result, state)
    })
}

impl KvStore for StateInterpreter {
    fn kv_get(&self, key: &str) -> Self::Of<Option<String>> {
        let key = key.to_owned();
        State::gets(move |state: &StoreState| state.cache.get(&key))
    }

    fn kv_put(&self, key: &str, value: &str) -> Self::Of<bool> {
        let (key, value) = (key.to_owned(), value.to_owned());
        update_store(move |state| state.cache.put(key, value))
    }

    fn kv_delete(&self, key: &str) -> Self::Of<bool> {
        let key = key.to_owned();
        update_store(move |state| state.cache.delete(&key))
    }
}

impl Database for StateInterpreter {
    fn get_posts(&self, user_id: UserId) -> Self::Of<Vec<Post>> {
        State::gets(move |state: &StoreState| state.database.posts_of(user_id))
    }

    fn create_post(&self, post: Post) -> Self::Of<PersistedPost> {
        update_store(move |state| state.database.create(post))
    }

    fn update_post(&self, post_id: PostId, update: PostUpdate) -> Self::Of<Option<PersistedPost>> {
        update_store(move |state| state.database.update(post_id, &update))
    }
}

impl Network for StateInterpreter {
    fn net_send(&self, _payload: Value, _address: &str) -> Self::Of<()> {
        State::pure(())
    }
}
