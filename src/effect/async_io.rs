//! `AsyncIO` Monad - deferred asynchronous side effects.
//!
//! `AsyncIO` "describes" an asynchronous effect without executing it.
//! Execution happens only via `run_async().await` (or awaiting the value
//! directly), which the fake backend's callers do at the program's edge.
//!
//! # Examples
//!
//! ```rust
//! use blog_effects::effect::AsyncIO;
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .enable_time()
//!     .build()
//!     .unwrap();
//!
//! let async_io = AsyncIO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| AsyncIO::pure(x + 1));
//!
//! assert_eq!(runtime.block_on(async_io.run_async()), 21);
//! ```

use std::future::{Future, IntoFuture};
use std::time::Duration;

use futures::future::BoxFuture;

/// A deferred asynchronous computation producing an `A`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `AsyncIO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(AsyncIO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct AsyncIO<A> {
    run_async_io: Box<dyn FnOnce() -> BoxFuture<'static, A> + Send>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> AsyncIO<A> {
    /// Creates an `AsyncIO` from a closure returning a future.
    ///
    /// The closure is not called until the action is run.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            run_async_io: Box::new(move || Box::pin(action())),
        }
    }

    /// Wraps a future that has not been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            run_async_io: Box::new(move || Box::pin(future)),
        }
    }
}

impl<A: Send + 'static> AsyncIO<A> {
    /// Wraps a pure value; running it performs no effect.
    pub fn pure(value: A) -> Self {
        Self {
            run_async_io: Box::new(move || Box::pin(async move { value })),
        }
    }

    /// Executes the described effect.
    pub async fn run_async(self) -> A {
        (self.run_async_io)().await
    }
}

// =============================================================================
// Functor / Monad Operations
// =============================================================================

impl<A: Send + 'static> AsyncIO<A> {
    /// Maps a function over the eventual result.
    pub fn fmap<B, F>(self, function: F) -> AsyncIO<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: 'static,
    {
        AsyncIO::new(move || async move { function(self.run_async().await) })
    }

    /// Runs this action, feeds its result into `function`, then runs the
    /// action it returns.
    pub fn flat_map<B, F>(self, function: F) -> AsyncIO<B>
    where
        F: FnOnce(A) -> AsyncIO<B> + Send + 'static,
        B: Send + 'static,
    {
        AsyncIO::new(move || async move {
            let value_a = self.run_async().await;
            let async_io_b = function(value_a);
            async_io_b.run_async().await
        })
    }

    /// Alias for [`AsyncIO::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> AsyncIO<B>
    where
        F: FnOnce(A) -> AsyncIO<B> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after this action, discarding this result.
    #[must_use]
    pub fn then<B>(self, next: AsyncIO<B>) -> AsyncIO<B>
    where
        B: Send + 'static,
    {
        self.flat_map(move |_| next)
    }
}

// =============================================================================
// Utility Methods
// =============================================================================

impl AsyncIO<()> {
    /// Suspends for `duration` on the tokio timer.
    #[must_use]
    pub fn delay_async(duration: Duration) -> Self {
        Self::new(move || async move {
            tokio::time::sleep(duration).await;
        })
    }
}

impl<A: Send + 'static> IntoFuture for AsyncIO<A> {
    type Output = A;
    type IntoFuture = BoxFuture<'static, A>;

    fn into_future(self) -> Self::IntoFuture {
        (self.run_async_io)()
    }
}

impl<A> std::fmt::Debug for AsyncIO<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("AsyncIO(<deferred>)")
    }
}

static_assertions::assert_impl_all!(AsyncIO<Vec<String>>: Send);
