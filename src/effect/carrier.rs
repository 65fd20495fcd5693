//! The monad an interpreter returns its operations in.
//!
//! Rust has no higher-kinded types, so the carrier is named through a
//! generic associated type: an interpreter `P` picks `P::Of<A>` (for
//! instance `State<StoreState, A>` or `AsyncIO<A>`) and supplies `pure` and
//! `flat_map` for it. Programs written against [`Carrier`] never learn which
//! monad they run in.

/// Monad operations over an interpreter's carrier type.
///
/// Implemented by the interpreter value itself, which is why the trait
/// carries the `Clone + Send + Sync + 'static` bounds: programs clone the
/// interpreter into the continuations that issue later operations.
///
/// # Laws
///
/// - Left Identity: `flat_map(pure(a), f) == f(a)`
/// - Right Identity: `flat_map(m, pure) == m`
/// - Associativity: `flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))`
pub trait Carrier: Clone + Send + Sync + 'static {
    /// The carrier applied to `A`.
    type Of<A: Send + 'static>: Send;

    /// Lifts a value into the carrier without any effect.
    fn pure<A: Send + 'static>(value: A) -> Self::Of<A>;

    /// Sequences `function` after `effect`, passing it the result.
    fn flat_map<A, B, F>(effect: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Self::Of<B> + Send + 'static;

    /// Maps a pure function over the result of `effect`.
    fn map<A, B, F>(effect: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Self::flat_map(effect, move |value| Self::pure(function(value)))
    }

    /// Runs `first`, drops its result, then runs the effect built by `next`.
    fn then<A, B, F>(first: Self::Of<A>, next: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce() -> Self::Of<B> + Send + 'static,
    {
        Self::flat_map(first, move |_| next())
    }
}
