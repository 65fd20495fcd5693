use super::{DomainError, Post, User};

/// A partial change to one of an author's posts.
///
/// The author is mandatory and at least one of title, body or tags is always
/// present: [`PostUpdateBuilder::build`] refuses to produce an update that
/// changes nothing.
///
/// # Examples
///
/// ```rust
/// use blog_effects::domain::{PostUpdate, samples::john};
///
/// let update = PostUpdate::builder(john()).body("A new post!").build().unwrap();
/// assert_eq!(update.body(), Some("A new post!"));
///
/// assert!(PostUpdate::builder(john()).build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUpdate {
    author: User,
    title: Option<String>,
    body: Option<String>,
    tags: Option<Vec<String>>,
}

impl PostUpdate {
    /// Starts an update addressed to `author`'s posts.
    pub const fn builder(author: User) -> PostUpdateBuilder {
        PostUpdateBuilder {
            author,
            title: None,
            body: None,
            tags: None,
        }
    }

    /// An update replacing every field with the ones of `post`.
    pub fn from_post(post: &Post) -> Self {
        Self {
            author: post.author.clone(),
            title: Some(post.title.clone()),
            body: Some(post.body.clone()),
            tags: Some(post.tags.clone()),
        }
    }

    /// The author whose post is targeted.
    pub const fn author(&self) -> &User {
        &self.author
    }

    /// The new title, if changed.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The new body, if changed.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The new tags, if changed.
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// Merges the changed fields over `post`, keeping everything else.
    ///
    /// The author is never rewritten: the result keeps `post`'s author, and
    /// the update's own author only selects which author's post is targeted.
    #[must_use]
    pub fn apply_to(&self, post: &Post) -> Post {
        Post {
            title: self.title.clone().unwrap_or_else(|| post.title.clone()),
            body: self.body.clone().unwrap_or_else(|| post.body.clone()),
            tags: self.tags.clone().unwrap_or_else(|| post.tags.clone()),
            author: post.author.clone(),
        }
    }
}

/// Collects the changed fields of a [`PostUpdate`].
#[derive(Debug, Clone)]
#[must_use]
pub struct PostUpdateBuilder {
    author: User,
    title: Option<String>,
    body: Option<String>,
    tags: Option<Vec<String>>,
}

impl PostUpdateBuilder {
    /// Sets the new title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the new body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the new tags.
    pub fn tags<T: Into<String>>(mut self, tags: impl IntoIterator<Item = T>) -> Self {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Finishes the update.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyUpdate`] when no field was set.
    pub fn build(self) -> Result<PostUpdate, DomainError> {
        if self.title.is_none() && self.body.is_none() && self.tags.is_none() {
            return Err(DomainError::EmptyUpdate {
                author: self.author.id,
            });
        }

        Ok(PostUpdate {
            author: self.author,
            title: self.title,
            body: self.body,
            tags: self.tags,
        })
    }
}
