use serde::{Deserialize, Serialize};

use super::{PostId, User};

/// A blog post, embedding its author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    /// Headline.
    pub title: String,
    /// Content.
    pub body: String,
    /// Tags in the order the author gave them.
    pub tags: Vec<String>,
    /// The author, embedded by value.
    pub author: User,
}

impl Post {
    /// Creates a post.
    pub fn new<T>(
        title: impl Into<String>,
        body: impl Into<String>,
        tags: impl IntoIterator<Item = T>,
        author: User,
    ) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            body: body.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            author,
        }
    }
}

/// A post stored in the database under an author-scoped identifier.
///
/// Serializes as the post's fields plus `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersistedPost {
    /// Identifier assigned at creation.
    pub id: PostId,
    /// The stored post.
    #[serde(flatten)]
    pub post: Post,
}

impl PersistedPost {
    /// Pairs a post with its identifier.
    pub const fn new(id: PostId, post: Post) -> Self {
        Self { id, post }
    }

    /// The author of the stored post.
    pub const fn author(&self) -> &User {
        &self.post.author
    }

    /// Drops the identifier.
    pub fn into_post(self) -> Post {
        self.post
    }
}
