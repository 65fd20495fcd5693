use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::Value;

use crate::algebra::{Database, KvStore, Network};
use crate::config::Latency;
use crate::domain::samples::seeded_posts;
use crate::domain::{PersistedPost, Post, PostId, PostUpdate, UserId};
use crate::effect::{AsyncIO, Carrier};
use crate::store::{PostTable, StoreState};

/// Asynchronous fake backend with artificial latency.
///
/// Each instance owns its store, created once at construction; clones share
/// it. Every operation first sleeps for its configured [`Latency`] and only
/// then touches the store, holding the lock just for that step.
///
/// # Examples
///
/// ```rust
/// use blog_effects::algebra::KvStore;
/// use blog_effects::config::Latency;
/// use blog_effects::interpreter::FakeInterpreter;
///
/// let runtime = tokio::runtime::Builder::new_current_thread()
///     .enable_time()
///     .build()
///     .unwrap();
///
/// let interpreter = FakeInterpreter::new(Latency::none());
/// runtime.block_on(async {
///     assert!(interpreter.kv_put("1", "[]").await);
///     assert_eq!(interpreter.kv_get("1").await.as_deref(), Some("[]"));
/// });
/// ```
#[derive(Debug, Clone)]
pub struct FakeInterpreter {
    store: Arc<Mutex<StoreState>>,
    latency: Latency,
}

impl FakeInterpreter {
    /// An interpreter over an empty store.
    pub fn new(latency: Latency) -> Self {
        Self::with_state(StoreState::new(), latency)
    }

    /// An interpreter over `state`.
    pub fn with_state(state: StoreState, latency: Latency) -> Self {
        Self {
            store: Arc::new(Mutex::new(state)),
            latency,
        }
    }

    /// An interpreter whose database starts with the sample posts.
    pub fn seeded(latency: Latency) -> Self {
        let database = seeded_posts()
            .into_iter()
            .fold(PostTable::new(), PostTable::with_post);
        Self::with_state(StoreState::new().with_database(database), latency)
    }

    /// The configured latencies.
    pub const fn latency(&self) -> Latency {
        self.latency
    }

    /// A copy of the store as it is right now.
    pub fn snapshot(&self) -> StoreState {
        self.store.lock().clone()
    }

    /// Waits `delay`, then runs `operation` on the locked store.
    fn after<A, F>(&self, operation_name: &'static str, delay: Duration, operation: F) -> AsyncIO<A>
    where
        A: Send + 'static,
        F: FnOnce(&mut StoreState) -> A + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        AsyncIO::delay_async(delay).fmap(move |()| {
            tracing::debug!(operation = operation_name, ?delay, "fake store operation");
            let mut state = store.lock();
            operation(&mut state)
        })
    }
}

impl Carrier for FakeInterpreter {
    type Of<A: Send + 'static> = AsyncIO<A>;

    fn pure<A: Send + 'static>(value: A) -> Self::Of<A> {
        AsyncIO::pure(value)
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

impl KvStore for FakeInterpreter {
    fn kv_get(&self, key: &str) -> Self::Of<Option<String>> {
        let key = key.to_owned();
        self.after("kv_get", self.latency.cache, move |state| state.cache.get(&key))
    }

    fn kv_put(&self, key: &str, value: &str) -> Self::Of<bool> {
        let (key, value) = (key.to_owned(), value.to_owned());
        self.after("kv_put", self.latency.cache, move |state| {
            state.cache.put(key, value)
        })
    }

    fn kv_delete(&self, key: &str) -> Self::Of<bool> {
        let key = key.to_owned();
        self.after("kv_delete", self.latency.cache, move |state| {
            state.cache.delete(&key)
        })
    }
}

impl Database for FakeInterpreter {
    fn get_posts(&self, user_id: UserId) -> Self::Of<Vec<Post>> {
        self.after("get_posts", self.latency.get_posts, move |state| {
            state.database.posts_of(user_id)
        })
    }

    fn create_post(&self, post: Post) -> Self::Of<PersistedPost> {
        self.after("create_post", self.latency.create_post, move |state| {
            state.database.create(post)
        })
    }

    fn update_post(&self, post_id: PostId, update: PostUpdate) -> Self::Of<Option<PersistedPost>> {
        self.after("update_post", self.latency.update_post, move |state| {
            state.database.update(post_id, &update)
        })
    }
}

impl Network for FakeInterpreter {
    fn net_send(&self, payload: Value, address: &str) -> Self::Of<()> {
        let address = address.to_owned();
        AsyncIO::delay_async(self.latency.net_send).fmap(move |()| {
            tracing::debug!(address = %address, %payload, "delivered");
        })
    }
}

static_assertions::assert_impl_all!(FakeInterpreter: Send, Sync);
