use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a [`User`](super::User).
///
/// Its decimal rendering doubles as the user's cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wraps a raw identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Identifier of a [`PersistedPost`](super::PersistedPost), unique among
/// the posts of a single author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// The identifier given to an author's first post.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier following this one, or `None` past the last
    /// representable id.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(41, 42)]
    fn next_post_id_is_one_more(#[case] current: u64, #[case] expected: u64) {
        assert_eq!(PostId::new(current).next(), Some(PostId::new(expected)));
    }

    #[rstest]
    fn last_post_id_has_no_successor() {
        assert_eq!(PostId::new(u64::MAX).next(), None);
    }

    #[rstest]
    fn user_id_displays_as_plain_number() {
        assert_eq!(UserId::new(1).to_string(), "1");
    }

    #[rstest]
    fn identifiers_serialize_transparently() {
        assert_eq!(serde_json::to_string(&PostId::new(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&UserId::new(9)).unwrap(), "9");
    }
}
