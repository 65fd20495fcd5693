//! Wire format of cache entries and network payloads.
//!
//! A user's cache key is their id rendered in decimal, with no prefix. The
//! value is the JSON array of their posts.

use serde_json::Value;
use thiserror::Error;

use crate::domain::{Post, UserId};

/// Failure to encode or decode posts.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The posts could not be rendered as JSON.
    #[error("failed to encode posts: {0}")]
    Encode(#[source] serde_json::Error),
    /// A cached value is not a JSON array of posts.
    #[error("failed to decode cached posts: {0}")]
    Decode(#[source] serde_json::Error),
}

/// The cache key holding `user_id`'s posts.
pub fn cache_key(user_id: UserId) -> String {
    user_id.to_string()
}

/// Renders posts as a cache value.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode_posts(posts: &[Post]) -> Result<String, CodecError> {
    serde_json::to_string(posts).map_err(CodecError::Encode)
}

/// Parses a cache value back into posts.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] if `raw` is not a JSON array of posts.
pub fn decode_posts(raw: &str) -> Result<Vec<Post>, CodecError> {
    serde_json::from_str(raw).map_err(CodecError::Decode)
}

/// Renders posts as a network payload.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn posts_payload(posts: &[Post]) -> Result<Value, CodecError> {
    serde_json::to_value(posts).map_err(CodecError::Encode)
}

/// Decodes a cache hit, treating an unreadable entry as a miss.
pub(crate) fn decode_cached(key: &str, entry: Option<String>) -> Option<Vec<Post>> {
    let raw = entry?;
    match decode_posts(&raw) {
        Ok(posts) => Some(posts),
        Err(error) => {
            tracing::warn!("Ignoring unreadable cache entry for key '{}': {}", key, error);
            None
        }
    }
}
