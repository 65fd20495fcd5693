use thiserror::Error;

use super::UserId;

/// Errors raised while constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A post update was built without any changed field.
    #[error("update by author {author} must change at least one of title, body or tags")]
    EmptyUpdate {
        /// The author the update was addressed to.
        author: UserId,
    },
}
