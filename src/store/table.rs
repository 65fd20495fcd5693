use std::collections::BTreeMap;

use crate::domain::{PersistedPost, Post, PostId, PostUpdate, UserId};

/// Posts grouped by author, each group keyed by post id.
///
/// Groups iterate in ascending id order, which is also creation order until
/// an author's ids reach `u64::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostTable {
    authors: BTreeMap<UserId, BTreeMap<PostId, PersistedPost>>,
}

impl PostTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `post` under its own id, builder style.
    #[must_use]
    pub fn with_post(mut self, post: PersistedPost) -> Self {
        self.insert(post);
        self
    }

    /// Inserts `post` under its own id, returning the post it replaced.
    pub fn insert(&mut self, post: PersistedPost) -> Option<PersistedPost> {
        self.authors
            .entry(post.author().id)
            .or_default()
            .insert(post.id, post)
    }

    /// Looks up one of `author`'s posts.
    pub fn get(&self, author: UserId, post_id: PostId) -> Option<&PersistedPost> {
        self.authors.get(&author)?.get(&post_id)
    }

    /// All of `author`'s posts in ascending id order; empty for unknown authors.
    pub fn posts_of(&self, author: UserId) -> Vec<Post> {
        self.authors
            .get(&author)
            .map(|posts| posts.values().map(|stored| stored.post.clone()).collect())
            .unwrap_or_default()
    }

    /// The id the next post by `author` will receive: highest existing id
    /// plus one, or [`PostId::FIRST`].
    ///
    /// Once the highest id is `u64::MAX` the lowest unused id is handed out
    /// instead, so an existing post is never overwritten.
    pub fn next_id(&self, author: UserId) -> PostId {
        let Some(posts) = self.authors.get(&author) else {
            return PostId::FIRST;
        };
        posts
            .keys()
            .next_back()
            .map_or(Some(PostId::FIRST), |last| last.next())
            .unwrap_or_else(|| lowest_free_id(posts))
    }

    /// Stores `post` under a fresh id.
    pub fn create(&mut self, post: Post) -> PersistedPost {
        let persisted = PersistedPost::new(self.next_id(post.author.id), post);
        self.insert(persisted.clone());
        persisted
    }

    /// Merges `update` into the author's post `post_id`.
    ///
    /// Returns `None`, leaving the table untouched, when the post does not
    /// exist.
    pub fn update(&mut self, post_id: PostId, update: &PostUpdate) -> Option<PersistedPost> {
        let stored = self
            .authors
            .get_mut(&update.author().id)?
            .get_mut(&post_id)?;
        stored.post = update.apply_to(&stored.post);
        Some(stored.clone())
    }

    /// Number of posts across all authors.
    pub fn len(&self) -> usize {
        self.authors.values().map(BTreeMap::len).sum()
    }

    /// Whether no author has any post.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The smallest id from [`PostId::FIRST`] upward that `posts` does not use.
fn lowest_free_id(posts: &BTreeMap<PostId, PersistedPost>) -> PostId {
    let mut candidate = PostId::FIRST;
    for id in posts.keys().filter(|id| **id >= PostId::FIRST) {
        if *id != candidate {
            break;
        }
        match candidate.next() {
            Some(next) => candidate = next,
            None => break,
        }
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::domain::samples::{cool_post, john};
    use proptest::prelude::*;
    use rstest::rstest;

    fn jane() -> User {
        User::new(UserId::new(2), "Jane Roe", "jane.roe@example.com")
    }

    #[rstest]
    fn first_post_gets_id_one() {
        let mut table = PostTable::new();
        let created = table.create(cool_post());
        assert_eq!(created.id, PostId::FIRST);
        assert_eq!(table.get(john().id, PostId::FIRST), Some(&created));
    }

    #[rstest]
    fn next_id_follows_highest_existing() {
        let table = PostTable::new()
            .with_post(PersistedPost::new(PostId::new(1), cool_post()))
            .with_post(PersistedPost::new(PostId::new(7), cool_post()));
        assert_eq!(table.next_id(john().id), PostId::new(8));
    }

    #[rstest]
    fn create_after_last_id_does_not_overwrite() {
        let mut table = PostTable::new()
            .with_post(PersistedPost::new(PostId::FIRST, cool_post()))
            .with_post(PersistedPost::new(PostId::new(u64::MAX), cool_post()));

        let created = table.create(Post::new("New", "Post", ["fresh"], john()));

        assert_eq!(created.id, PostId::new(2));
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get(john().id, PostId::new(u64::MAX)).map(|stored| stored.post.title.as_str()),
            Some("Cool")
        );
    }

    #[rstest]
    fn create_after_lone_last_id_starts_from_first() {
        let mut table =
            PostTable::new().with_post(PersistedPost::new(PostId::new(u64::MAX), cool_post()));

        let created = table.create(cool_post());

        assert_eq!(created.id, PostId::FIRST);
        assert_eq!(table.len(), 2);
    }

    #[rstest]
    fn ids_are_scoped_per_author() {
        let mut table = PostTable::new();
        table.create(cool_post());
        table.create(cool_post());
        let janes = table.create(Post::new("Hi", "There", ["x"], jane()));

        assert_eq!(janes.id, PostId::FIRST);
        assert_eq!(table.len(), 3);
    }

    #[rstest]
    fn posts_of_unknown_author_is_empty() {
        assert!(PostTable::new().posts_of(UserId::new(99)).is_empty());
    }

    #[rstest]
    fn posts_of_keeps_creation_order() {
        let mut table = PostTable::new();
        for title in ["a", "b", "c"] {
            table.create(Post::new(title, "body", Vec::<String>::new(), john()));
        }
        let titles: Vec<String> = table
            .posts_of(john().id)
            .into_iter()
            .map(|post| post.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[rstest]
    fn update_missing_post_leaves_table_untouched() {
        let mut table = PostTable::new().with_post(PersistedPost::new(PostId::FIRST, cool_post()));
        let before = table.clone();
        let update = PostUpdate::builder(john()).body("x").build().unwrap();

        assert_eq!(table.update(PostId::new(2), &update), None);
        assert_eq!(table, before);
    }

    #[rstest]
    fn update_for_unknown_author_is_absent() {
        let mut table = PostTable::new().with_post(PersistedPost::new(PostId::FIRST, cool_post()));
        let update = PostUpdate::builder(jane()).body("x").build().unwrap();
        assert_eq!(table.update(PostId::FIRST, &update), None);
    }

    #[rstest]
    fn update_merges_and_stores() {
        let mut table = PostTable::new().with_post(PersistedPost::new(PostId::FIRST, cool_post()));
        let update = PostUpdate::builder(john()).title("Cooler").build().unwrap();

        let updated = table.update(PostId::FIRST, &update).unwrap();

        assert_eq!(updated.id, PostId::FIRST);
        assert_eq!(updated.post.title, "Cooler");
        assert_eq!(updated.post.body, "Post");
        assert_eq!(table.get(john().id, PostId::FIRST), Some(&updated));
    }

    proptest! {
        #[test]
        fn created_ids_are_sequential(count in 1usize..20) {
            let mut table = PostTable::new();
            let ids: Vec<u64> = (0..count).map(|_| table.create(cool_post()).id.value()).collect();
            let expected: Vec<u64> = (1..=count as u64).collect();
            prop_assert_eq!(ids, expected);
        }

        #[test]
        fn next_id_exceeds_every_existing_id(existing in proptest::collection::btree_set(0u64..1000, 0..10)) {
            let table = existing.iter().fold(PostTable::new(), |table, id| {
                table.with_post(PersistedPost::new(PostId::new(*id), cool_post()))
            });
            let next = table.next_id(john().id);
            prop_assert!(next >= PostId::FIRST);
            prop_assert!(existing.iter().all(|id| PostId::new(*id) < next));
        }
    }
}
