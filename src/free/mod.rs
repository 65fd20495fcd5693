//! Free-monad encoding.
//!
//! A program is a data structure: a chain of [`Instruction`]s, each holding
//! its parameters and a continuation that, given the operation's result,
//! yields the rest of the program. Building one has no effect.
//! [`Program::interpret`] folds the chain into any [`Algebra`], so the same
//! backends serve both this encoding and the tagless one.
//!
//! [`Algebra`]: crate::algebra::Algebra

mod api;
mod instruction;
mod program;
mod programs;

pub use api::{cache_get_posts, cache_invalidate, cache_store_posts, net_send_posts};
pub use instruction::{Continuation, Instruction};
pub use program::{
    Program, db_create_post, db_get_posts, db_update_post, kv_delete, kv_get, kv_put, net_send,
};
pub use programs::{create_and_notify, review_posts, update_and_invalidate};
