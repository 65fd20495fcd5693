use serde_json::Value;

use crate::algebra::{Algebra, Database, KvStore, Network};
use crate::domain::{PersistedPost, Post, PostId, PostUpdate, UserId};
use crate::effect::Carrier;

/// Decorator that logs every operation before delegating it to `I`.
///
/// The log line is emitted when the operation actually runs, not when the
/// program is built, and results pass through untouched. The carrier is
/// the inner interpreter's.
///
/// # Examples
///
/// ```rust
/// use blog_effects::algebra::KvStore;
/// use blog_effects::interpreter::{Logging, StateInterpreter};
/// use blog_effects::store::StoreState;
///
/// let interpreter = Logging::new(StateInterpreter);
/// let (value, _) = interpreter.kv_get("1").run(StoreState::new());
/// assert_eq!(value, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Logging<I> {
    inner: I,
}

impl<I> Logging<I> {
    /// Wraps `inner`.
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// The wrapped interpreter.
    pub const fn inner(&self) -> &I {
        &self.inner
    }

    /// Unwraps the decorator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Algebra> Logging<I> {
    /// Defers `log` and `operation` until the carrier runs.
    fn logged<A, L, O>(&self, log: L, operation: O) -> I::Of<A>
    where
        A: Send + 'static,
        L: FnOnce() + Send + 'static,
        O: FnOnce(&I) -> I::Of<A> + Send + 'static,
    {
        let inner = self.inner.clone();
        I::flat_map(I::pure(()), move |()| {
            log();
            operation(&inner)
        })
    }
}

impl<I: Carrier> Carrier for Logging<I> {
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

    fn map<A, B, F>(effect: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        I::map(effect, function)
    }
}

impl<I: Algebra> KvStore for Logging<I> {
    fn kv_get(&self, key: &str) -> Self::Of<Option<String>> {
        let key = key.to_owned();
        let logged_key = key.clone();
        self.logged(
            move || tracing::info!(key = %logged_key, "[kvGet]"),
            move |inner| inner.kv_get(&key),
        )
    }

    fn kv_put(&self, key: &str, value: &str) -> Self::Of<bool> {
        let (key, value) = (key.to_owned(), value.to_owned());
        let (logged_key, logged_value) = (key.clone(), value.clone());
        self.logged(
            move || tracing::info!(key = %logged_key, value = %logged_value, "[kvPut]"),
            move |inner| inner.kv_put(&key, &value),
        )
    }

    fn kv_delete(&self, key: &str) -> Self::Of<bool> {
        let key = key.to_owned();
        let logged_key = key.clone();
        self.logged(
            move || tracing::info!(key = %logged_key, "[kvDelete]"),
            move |inner| inner.kv_delete(&key),
        )
    }
}

impl<I: Algebra> Database for Logging<I> {
    fn get_posts(&self, user_id: UserId) -> Self::Of<Vec<Post>> {
        self.logged(
            move || tracing::info!(user_id = %user_id, "[getPosts]"),
            move |inner| inner.get_posts(user_id),
        )
    }

    fn create_post(&self, post: Post) -> Self::Of<PersistedPost> {
        let logged = post.clone();
        self.logged(
            move || tracing::info!(post = ?logged, "[createPost]"),
            move |inner| inner.create_post(post),
        )
    }

    fn update_post(&self, post_id: PostId, update: PostUpdate) -> Self::Of<Option<PersistedPost>> {
        let logged = update.clone();
        self.logged(
            move || tracing::info!(post_id = %post_id, update = ?logged, "[updatePost]"),
            move |inner| inner.update_post(post_id, update),
        )
    }
}

impl<I: Algebra> Network for Logging<I> {
    fn net_send(&self, payload: Value, address: &str) -> Self::Of<()> {
        let address = address.to_owned();
        let (logged_payload, logged_address) = (payload.clone(), address.clone());
        self.logged(
            move || tracing::info!(payload = %logged_payload, address = %logged_address, "[netSend]"),
            move |inner| inner.net_send(payload, &address),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::samples::{cool_post, john};
    use crate::domain::REVIEW_ADDRESS;
    use crate::interpreter::StateInterpreter;
    use crate::store::{PostTable, StoreState};
    use crate::tagless;
    use crate::test_support::capture_logs;
    use rstest::rstest;
    use tracing::Level;

    fn cool_post_uncached() -> StoreState {
        StoreState::new().with_database(
            PostTable::new().with_post(PersistedPost::new(PostId::FIRST, cool_post())),
        )
    }

    #[rstest]
    fn outputs_match_the_inner_interpreter() {
        let plain = StateInterpreter
            .create_post(cool_post())
            .then(StateInterpreter.get_posts(john().id))
            .run(StoreState::new());

        let logging = Logging::new(StateInterpreter);
        let logged = logging
            .create_post(cool_post())
            .then(logging.get_posts(john().id))
            .run(StoreState::new());

        assert_eq!(plain, logged);
    }

    #[rstest]
    fn unwraps_to_the_inner_interpreter() {
        assert_eq!(Logging::new(StateInterpreter).into_inner(), StateInterpreter);
    }

    #[rstest]
    fn logs_one_line_per_operation_with_its_arguments() {
        let logging = Logging::new(StateInterpreter);

        let (_, logs) = capture_logs(Level::INFO, || {
            tagless::review_posts(&logging, john().id).run(cool_post_uncached())
        });

        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 4, "{logs}");
        assert!(lines[0].contains("[kvGet]") && lines[0].contains("key=1"));
        assert!(lines[1].contains("[getPosts]") && lines[1].contains("user_id=1"));
        assert!(lines[2].contains("[kvPut]") && lines[2].contains("key=1"));
        assert!(lines[3].contains("[netSend]"));
        assert!(lines[3].contains(&format!("address={REVIEW_ADDRESS}")));
    }

    #[rstest]
    fn logs_nothing_until_the_carrier_runs() {
        let logging = Logging::new(StateInterpreter);

        let (pending, built) = capture_logs(Level::INFO, || {
            logging.kv_delete("1").then(logging.get_posts(john().id))
        });
        assert!(built.is_empty(), "{built}");

        let (_, ran) = capture_logs(Level::INFO, || pending.run(StoreState::new()));
        assert_eq!(ran.lines().count(), 2, "{ran}");
        assert!(ran.contains("[kvDelete]"));
    }
}
