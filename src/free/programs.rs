//! The three blog workflows as free programs.

use super::{
    Program, cache_get_posts, cache_invalidate, cache_store_posts, db_create_post, db_get_posts,
    db_update_post, net_send_posts,
};
use crate::domain::{NOTIFY_LIMIT, PersistedPost, Post, PostId, PostUpdate, REVIEW_ADDRESS, UserId};

/// Sends `user_id`'s posts to review, reading them from the cache when
/// present and filling the cache from the database otherwise.
///
/// # Examples
///
/// ```rust
/// use blog_effects::domain::samples::cool_post;
/// use blog_effects::domain::{PersistedPost, PostId, UserId};
/// use blog_effects::free::review_posts;
/// use blog_effects::interpreter::StateInterpreter;
/// use blog_effects::store::{PostTable, StoreState};
///
/// let state = StoreState::new()
///     .with_database(PostTable::new().with_post(PersistedPost::new(PostId::FIRST, cool_post())));
///
/// let ((), after) = review_posts(UserId::new(1))
///     .interpret(&StateInterpreter)
///     .run(state);
/// assert!(after.cache.contains("1"));
/// ```
pub fn review_posts(user_id: UserId) -> Program<()> {
    cache_get_posts(user_id)
        .flat_map(move |cached| match cached {
            Some(posts) => Program::pure(posts),
            None => db_get_posts(user_id)
                .flat_map(move |posts| cache_store_posts(user_id, &posts).map(move |_| posts)),
        })
        .flat_map(|posts| net_send_posts(&posts, REVIEW_ADDRESS))
}

/// Stores `post`, then mails its author their first few posts.
pub fn create_and_notify(post: Post) -> Program<()> {
    db_create_post(post).flat_map(|created| {
        let author = created.post.author;
        db_get_posts(author.id).flat_map(move |posts| {
            let top: Vec<Post> = posts.into_iter().take(NOTIFY_LIMIT).collect();
            net_send_posts(&top, author.email)
        })
    })
}

/// Applies `update` and, if the post existed, drops its author's cached
/// posts.
pub fn update_and_invalidate(
    post_id: PostId,
    update: PostUpdate,
) -> Program<Option<PersistedPost>> {
    db_update_post(post_id, update).flat_map(|updated| match updated {
        None => Program::pure(None),
        Some(post) => cache_invalidate(post.author().id).map(move |_| Some(post)),
    })
}
