//! # blog-effects
//!
//! One effectful blogging DSL, two encodings, interchangeable backends.
//!
//! ## Overview
//!
//! Programs talk to a key-value cache, a post database and a network
//! through seven abstract operations. The same three workflows are written
//! twice:
//!
//! - **Free monad** ([`free`]): programs are data, a chain of
//!   [`Instruction`](free::Instruction)s with boxed continuations, folded
//!   into a backend by [`Program::interpret`](free::Program::interpret).
//! - **Tagless final** ([`tagless`]): programs are generic functions over
//!   an interpreter implementing [`Algebra`](algebra::Algebra).
//!
//! Backends ([`interpreter`]) implement the algebra once and serve both:
//! a pure `State` transition over an in-memory [`StoreState`](store::StoreState),
//! an async fake store with artificial latency, and a logging decorator.
//!
//! ## Feature Flags
//!
//! - `async` (default): the `AsyncIO` monad, `FakeInterpreter` and the demo
//!   binary
//!
//! ## Example
//!
//! ```rust
//! use blog_effects::prelude::*;
//! use blog_effects::domain::samples::cool_post;
//!
//! let via_free = free::create_and_notify(cool_post())
//!     .interpret(&StateInterpreter)
//!     .run(StoreState::new());
//! let via_tagless = tagless::create_and_notify(&StateInterpreter, cool_post())
//!     .run(StoreState::new());
//!
//! assert_eq!(via_free, via_tagless);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits, the carriers, the interpreters, the
/// store and both encodings as modules.
pub mod prelude {
    pub use crate::algebra::{Algebra, Database, KvStore, Network};
    pub use crate::domain::{PersistedPost, Post, PostId, PostUpdate, User, UserId};
    #[cfg(feature = "async")]
    pub use crate::effect::AsyncIO;
    pub use crate::effect::{Carrier, State};
    #[cfg(feature = "async")]
    pub use crate::interpreter::FakeInterpreter;
    pub use crate::interpreter::{Logging, StateInterpreter};
    pub use crate::store::StoreState;
    pub use crate::{free, tagless};
}

pub mod algebra;
pub mod config;
pub mod domain;
pub mod effect;
pub mod free;
pub mod interpreter;
pub mod store;
pub mod tagless;

#[cfg(test)]
mod test_support;
