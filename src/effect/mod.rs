//! Effect monads and the carrier abstraction over them.
//!
//! - [`State`]: pure state threading, the carrier of the deterministic
//!   backend.
//! - [`AsyncIO`]: deferred asynchronous effects, the carrier of the fake
//!   async backend (requires the `async` feature).
//! - [`Carrier`]: `pure`/`flat_map` over whichever monad an interpreter
//!   picks.

#[cfg(feature = "async")]
mod async_io;
mod carrier;
mod state;

#[cfg(feature = "async")]
pub use async_io::AsyncIO;
pub use carrier::Carrier;
pub use state::State;
