//! Sample data shared by the demo driver and the tests.

use super::{PersistedPost, Post, PostId, User, UserId};

/// John Smith, author of every sample post.
pub fn john() -> User {
    User::new(UserId::new(1), "John Smith", "john.smith@example.com")
}

/// A minimal post by [`john`].
pub fn cool_post() -> Post {
    Post::new("Cool", "Post", Vec::<String>::new(), john())
}

/// Posts the demo backend starts out with.
pub fn seeded_posts() -> Vec<PersistedPost> {
    vec![
        PersistedPost::new(
            PostId::new(1),
            Post::new(
                "First post",
                "Look at this <b>cooool</b> post",
                ["cool"],
                john(),
            ),
        ),
        PersistedPost::new(
            PostId::new(2),
            Post::new(
                "Second post",
                "Look at this even <b>cooooler</b> post",
                ["cool"],
                john(),
            ),
        ),
    ]
}
