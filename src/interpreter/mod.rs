//! Backends for both encodings.
//!
//! Each interpreter implements [`Algebra`](crate::algebra::Algebra) over its
//! own carrier:
//!
//! - [`StateInterpreter`]: `State<StoreState, _>`, synchronous and pure.
//! - [`FakeInterpreter`]: `AsyncIO<_>`, sleeps before every operation.
//! - [`Logging`]: wraps either and logs each operation as it runs.

#[cfg(feature = "async")]
mod fake;
mod logging;
mod state;

#[cfg(feature = "async")]
pub use fake::FakeInterpreter;
pub use logging::Logging;
pub use state::StateInterpreter;
