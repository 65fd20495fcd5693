//! Shared fixtures and a recording decorator for the program tests.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;

use blog_effects::algebra::{Algebra, Database, KvStore, Network};
use blog_effects::domain::samples::{cool_post, john};
use blog_effects::domain::{PersistedPost, Post, PostId, PostUpdate, User, UserId};
use blog_effects::effect::Carrier;
use blog_effects::store::codec::encode_posts;
use blog_effects::store::{Cache, PostTable, StoreState};
use serde_json::Value;

// =============================================================================
// Fixtures
// =============================================================================

/// A second author, to check that ids and cache entries stay per author.
pub fn jane() -> User {
    User::new(UserId::new(2), "Jane Doe", "jane.doe@example.com")
}

/// John's post 1 is `cool_post`; the cache is empty.
pub fn cool_post_uncached() -> StoreState {
    StoreState::new().with_database(
        PostTable::new().with_post(PersistedPost::new(PostId::FIRST, cool_post())),
    )
}

/// John's post 1 has an outdated body and his posts are cached.
pub fn rusty_post_cached() -> StoreState {
    let mut rusty = cool_post();
    rusty.body = "Some old and rusty text".to_string();
    let cached = encode_posts(std::slice::from_ref(&rusty)).unwrap();

    StoreState::new()
        .with_database(PostTable::new().with_post(PersistedPost::new(PostId::FIRST, rusty)))
        .with_cache(Cache::new().with_entry("1", cached))
}

/// Changes only the body of one of John's posts.
pub fn body_update(body: &str) -> PostUpdate {
    PostUpdate::builder(john()).body(body).build().unwrap()
}

/// `count` distinct posts by `author`.
pub fn numbered_posts(author: &User, count: usize) -> Vec<Post> {
    (1..=count)
        .map(|n| Post::new(format!("Post {n}"), format!("Body {n}"), ["numbered"], author.clone()))
        .collect()
}

// =============================================================================
// Recording decorator
// =============================================================================

/// One operation as seen by [`Recording`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    KvGet(String),
    KvPut(String, String),
    KvDelete(String),
    GetPosts(UserId),
    CreatePost(Post),
    UpdatePost(PostId, PostUpdate),
    NetSend(Value, String),
}

impl Call {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::KvGet(_) => "kvGet",
            Self::KvPut(..) => "kvPut",
            Self::KvDelete(_) => "kvDelete",
            Self::GetPosts(_) => "getPosts",
            Self::CreatePost(_) => "createPost",
            Self::UpdatePost(..) => "updatePost",
            Self::NetSend(..) => "netSend",
        }
    }
}

/// Records every operation, when it runs, before delegating to `I`.
#[derive(Debug, Clone)]
pub struct Recording<I> {
    inner: I,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl<I: Algebra> Recording<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.calls().iter().map(Call::name).collect()
    }

    fn record<A, O>(&self, call: Call, operation: O) -> I::Of<A>
    where
        A: Send + 'static,
        O: FnOnce(&I) -> I::Of<A> + Send + 'static,
    {
        let inner = self.inner.clone();
        let calls = Arc::clone(&self.calls);
        I::flat_map(I::pure(()), move |()| {
            calls.lock().push(call);
            operation(&inner)
        })
    }
}

impl<I: Carrier> Carrier for Recording<I> {
    type Of<A: Send + 'static> = I::Of<A>;

    fn pure<A: Send + 'static>(value: A) -> Self::Of<A> {
        I::pure(value)
    }

    fn flat_map<A, B, F>(effect: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Self::Of<B> + Send + 'static,
    {
        I::flat_map(effect, function)
    }
}

impl<I: Algebra> KvStore for Recording<I> {
    fn kv_get(&self, key: &str) -> Self::Of<Option<String>> {
        let key = key.to_owned();
        self.record(Call::KvGet(key.clone()), move |inner| inner.kv_get(&key))
    }

    fn kv_put(&self, key: &str, value: &str) -> Self::Of<bool> {
        let (key, value) = (key.to_owned(), value.to_owned());
        self.record(Call::KvPut(key.clone(), value.clone()), move |inner| {
            inner.kv_put(&key, &value)
        })
    }

    fn kv_delete(&self, key: &str) -> Self::Of<bool> {
        let key = key.to_owned();
        self.record(Call::KvDelete(key.clone()), move |inner| inner.kv_delete(&key))
    }
}

impl<I: Algebra> Database for Recording<I> {
    fn get_posts(&self, user_id: UserId) -> Self::Of<Vec<Post>> {
        self.record(Call::GetPosts(user_id), move |inner| inner.get_posts(user_id))
    }

    fn create_post(&self, post: Post) -> Self::Of<PersistedPost> {
        self.record(Call::CreatePost(post.clone()), move |inner| {
            inner.create_post(post)
        })
    }

    fn update_post(&self, post_id: PostId, update: PostUpdate) -> Self::Of<Option<PersistedPost>> {
        self.record(Call::UpdatePost(post_id, update.clone()), move |inner| {
            inner.update_post(post_id, update)
        })
    }
}

impl<I: Algebra> Network for Recording<I> {
    fn net_send(&self, payload: Value, address: &str) -> Self::Of<()> {
        let address = address.to_owned();
        self.record(Call::NetSend(payload.clone(), address.clone()), move |inner| {
            inner.net_send(payload, &address)
        })
    }
}
