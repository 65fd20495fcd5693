//! Domain model of the blogging platform.
//!
//! Users author posts; posts become [`PersistedPost`]s once the database
//! assigns them an identifier scoped to their author. A [`PostUpdate`]
//! always names the author it targets and changes at least one field.

mod error;
mod identifier;
mod post;
pub mod samples;
mod update;
mod user;

pub use error::DomainError;
pub use identifier::{PostId, UserId};
pub use post::{PersistedPost, Post};
pub use update::{PostUpdate, PostUpdateBuilder};
pub use user::User;

/// Where `review_posts` delivers a user's posts.
pub const REVIEW_ADDRESS: &str = "review@example.com";

/// How many posts `create_and_notify` sends to the author.
pub const NOTIFY_LIMIT: usize = 3;
