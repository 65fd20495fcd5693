//! Tagless-final encoding.
//!
//! Programs are ordinary generic functions over an interpreter `P:`
//! [`Algebra`](crate::algebra::Algebra). They call its capabilities
//! directly and compose results with the [`Carrier`](crate::effect::Carrier)
//! operations, so the interpreter chosen at the call site decides what the
//! program returns: a `State` transition, an `AsyncIO` action, or whatever
//! a decorator wraps.

mod api;
mod programs;

pub use api::BlogApi;
pub use programs::{create_and_notify, review_posts, update_and_invalidate};
