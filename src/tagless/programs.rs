//! The three blog workflows, generic over the interpreter.
//!
//! Each function only describes the workflow in `P`'s carrier; running the
//! returned value is what performs the effects.

use super::BlogApi;
use crate::algebra::Algebra;
use crate::domain::{NOTIFY_LIMIT, PersistedPost, Post, PostId, PostUpdate, REVIEW_ADDRESS, UserId};

/// Sends `user_id`'s posts to review, reading them from the cache when
/// present and filling the cache from the database otherwise.
///
/// # Examples
///
/// ```rust
/// use blog_effects::domain::samples::cool_post;
/// use blog_effects::domain::{PersistedPost, PostId, UserId};
/// use blog_effects::interpreter::StateInterpreter;
/// use blog_effects::store::{PostTable, StoreState};
/// use blog_effects::tagless::review_posts;
///
/// let state = StoreState::new()
///     .with_database(PostTable::new().with_post(PersistedPost::new(PostId::FIRST, cool_post())));
///
/// let ((), after) = review_posts(&StateInterpreter, UserId::new(1)).run(state);
/// assert!(after.cache.contains("1"));
/// ```
pub fn review_posts<P: Algebra>(interpreter: &P, user_id: UserId) -> P::Of<()> {
    let api = BlogApi::new(interpreter.clone());
    let fetch = api.clone();

    let posts = P::flat_map(api.cache_get_posts(user_id), move |cached| match cached {
        Some(posts) => P::pure(posts),
        None => {
            let store = fetch.clone();
            P::flat_map(fetch.db_get_posts(user_id), move |posts| {
                P::map(store.cache_store_posts(user_id, &posts), move |_| posts)
            })
        }
    });
    P::flat_map(posts, move |posts| {
        api.net_send_posts(&posts, REVIEW_ADDRESS)
    })
}

/// Stores `post`, then mails its author their first few posts.
pub fn create_and_notify<P: Algebra>(interpreter: &P, post: Post) -> P::Of<()> {
    let api = BlogApi::new(interpreter.clone());
    let created = api.db_create_post(post);

    P::flat_map(created, move |created| {
        let author = created.post.author;
        let posts = api.db_get_posts(author.id);
        P::flat_map(posts, move |posts| {
            let top: Vec<Post> = posts.into_iter().take(NOTIFY_LIMIT).collect();
            api.net_send_posts(&top, &author.email)
        })
    })
}

/// Applies `update` and, if the post existed, drops its author's cached
/// posts.
pub fn update_and_invalidate<P: Algebra>(
    interpreter: &P,
    post_id: PostId,
    update: PostUpdate,
) -> P::Of<Option<PersistedPost>> {
    let api = BlogApi::new(interpreter.clone());
    let updated = api.db_update_post(post_id, update);

    P::flat_map(updated, move |updated| match updated {
        None => P::pure(None),
        Some(post) => P::map(api.cache_invalidate(post.author().id), move |_| Some(post)),
    })
}
