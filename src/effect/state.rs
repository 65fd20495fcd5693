//! State Monad - computations threading a state value.
//!
//! A `State<S, A>` wraps a function `S -> (A, S)`: it receives the current
//! state, produces a result, and hands back the next state. Nothing runs
//! until [`State::run`] is called with an initial state, which makes it the
//! carrier of the deterministic backend: a program becomes one big state
//! transition over the store.
//!
//! # Laws
//!
//! - Left Identity: `State::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(State::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! # Examples
//!
//! ```rust
//! use blog_effects::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(State::get());
//!
//! let (count, _) = computation.run(0);
//! assert_eq!(count, 2);
//! ```

/// A computation that, given a state `S`, yields an `A` and the next state.
///
/// Each `State` is consumed by running it once; composition moves the
/// pieces into the composite.
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    run_function: Box<dyn FnOnce(S) -> (A, S) + Send>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a State from a state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blog_effects::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(S) -> (A, S) + Send + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Returns `value` without touching the state.
    pub fn pure(value: A) -> Self
    where
        A: Send,
    {
        Self::new(move |state| (value, state))
    }

    /// Reads a value out of the state without modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blog_effects::effect::State;
    ///
    /// let length: State<String, usize> = State::gets(|s: &String| s.len());
    /// assert_eq!(length.run("four".to_string()), (4, "four".to_string()));
    /// ```
    pub fn gets<F>(function: F) -> Self
    where
        F: FnOnce(&S) -> A + Send + 'static,
    {
        Self::new(move |state| (function(&state), state))
    }

    /// Runs the computation from `initial_state`, returning the result and
    /// the final state.
    pub fn run(self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    pub fn eval(self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Maps a function over the result.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, new_state) = original_function(state);
            (function(result), new_state)
        })
    }

    /// Feeds the result into `function` and runs the State it returns on the
    /// intermediate state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blog_effects::effect::State;
    ///
    /// let chained = State::new(|s: i32| (s, s + 1))
    ///     .flat_map(|value| State::new(move |s: i32| (value + s, s * 2)));
    /// assert_eq!(chained.run(10), (21, 22));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: FnOnce(A) -> State<S, B> + Send + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = original_function(state);
            function(result).run(intermediate_state)
        })
    }

    /// Alias for [`State::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: FnOnce(A) -> State<S, B> + Send + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after this computation, discarding this result.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next)
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Returns a copy of the current state.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Transforms the state in place.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: FnOnce(S) -> S + Send + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S: 'static, A: 'static> std::fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("State(<function>)")
    }
}

static_assertions::assert_impl_all!(State<Vec<String>, String>: Send);
