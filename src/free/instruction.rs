use std::fmt;

use serde_json::Value;

use crate::domain::{PersistedPost, Post, PostId, PostUpdate, UserId};

/// A boxed continuation from an operation's result to whatever comes next.
pub type Continuation<T, Next> = Box<dyn FnOnce(T) -> Next + Send>;

/// One operation of the vocabulary, plus what to do with its result.
///
/// `Next` is the type the continuation produces; inside a
/// [`Program`](super::Program) it is the rest of the program.
pub enum Instruction<Next> {
    /// Cache lookup.
    KvGet {
        /// Cache key.
        key: String,
        /// Receives the cached value, if any.
        next: Continuation<Option<String>, Next>,
    },
    /// Cache write.
    KvPut {
        /// Cache key.
        key: String,
        /// Value to store.
        value: String,
        /// Receives whether the write succeeded.
        next: Continuation<bool, Next>,
    },
    /// Cache removal.
    KvDelete {
        /// Cache key.
        key: String,
        /// Receives whether an entry was removed.
        next: Continuation<bool, Next>,
    },
    /// List a user's posts.
    DbGetPosts {
        /// Author whose posts are listed.
        user_id: UserId,
        /// Receives the posts in creation order.
        next: Continuation<Vec<Post>, Next>,
    },
    /// Store a new post.
    DbCreatePost {
        /// Post to store.
        post: Post,
        /// Receives the stored post with its id.
        next: Continuation<PersistedPost, Next>,
    },
    /// Change an existing post.
    DbUpdatePost {
        /// Target post, scoped to the update's author.
        post_id: PostId,
        /// Fields to change.
        update: PostUpdate,
        /// Receives the updated post, or `None` if it does not exist.
        next: Continuation<Option<PersistedPost>, Next>,
    },
    /// Deliver a payload.
    NetSend {
        /// JSON payload.
        payload: Value,
        /// Destination address.
        address: String,
        /// Resumed once delivered.
        next: Continuation<(), Next>,
    },
}

impl<Next: 'static> Instruction<Next> {
    /// Post-composes `function` onto the continuation, keeping the
    /// operation and its parameters.
    pub fn map<Mapped, F>(self, function: F) -> Instruction<Mapped>
    where
        Mapped: 'static,
        F: FnOnce(Next) -> Mapped + Send + 'static,
    {
        match self {
            Self::KvGet { key, next } => Instruction::KvGet {
                key,
                next: Box::new(move |value| function(next(value))),
            },
            Self::KvPut { key, value, next } => Instruction::KvPut {
                key,
                value,
                next: Box::new(move |stored| function(next(stored))),
            },
            Self::KvDelete { key, next } => Instruction::KvDelete {
                key,
                next: Box::new(move |removed| function(next(removed))),
            },
            Self::DbGetPosts { user_id, next } => Instruction::DbGetPosts {
                user_id,
                next: Box::new(move |posts| function(next(posts))),
            },
            Self::DbCreatePost { post, next } => Instruction::DbCreatePost {
                post,
                next: Box::new(move |created| function(next(created))),
            },
            Self::DbUpdatePost {
                post_id,
                update,
                next,
            } => Instruction::DbUpdatePost {
                post_id,
                update,
                next: Box::new(move |updated| function(next(updated))),
            },
            Self::NetSend {
                payload,
                address,
                next,
            } => Instruction::NetSend {
                payload,
                address,
                next: Box::new(move |()| function(next(()))),
            },
        }
    }
}

impl<Next> Instruction<Next> {
    /// The operation's name, as it appears in operation logs.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::KvGet { .. } => "kvGet",
            Self::KvPut { .. } => "kvPut",
            Self::KvDelete { .. } => "kvDelete",
            Self::DbGetPosts { .. } => "getPosts",
            Self::DbCreatePost { .. } => "createPost",
            Self::DbUpdatePost { .. } => "updatePost",
            Self::NetSend { .. } => "netSend",
        }
    }
}

impl<Next> fmt::Debug for Instruction<Next> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct(self.tag());
        match self {
            Self::KvGet { key, .. } | Self::KvDelete { key, .. } => debug.field("key", key),
            Self::KvPut { key, value, .. } => debug.field("key", key).field("value", value),
            Self::DbGetPosts { user_id, .. } => debug.field("user_id", user_id),
            Self::DbCreatePost { post, .. } => debug.field("post", post),
            Self::DbUpdatePost {
                post_id, update, ..
            } => debug.field("post_id", post_id).field("update", update),
            Self::NetSend {
                payload, address, ..
            } => debug.field("payload", payload).field("address", address),
        };
        debug.field("next", &"<continuation>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kv_get(key: &str) -> Instruction<Option<String>> {
        Instruction::KvGet {
            key: key.to_string(),
            next: Box::new(|value| value),
        }
    }

    #[rstest]
    fn map_keeps_parameters_and_composes_continuation() {
        let mapped = kv_get("1").map(|value| value.map(|raw| raw.len()));

        match mapped {
            Instruction::KvGet { key, next } => {
                assert_eq!(key, "1");
                assert_eq!(next(Some("[]".to_string())), Some(2));
            }
            other => panic!("unexpected instruction {other:?}"),
        }
    }

    #[rstest]
    fn debug_hides_the_continuation() {
        let rendered = format!("{:?}", kv_get("1"));
        assert_eq!(rendered, r#"kvGet { key: "1", next: "<continuation>" }"#);
    }

    #[rstest]
    fn tags_name_the_operation() {
        let send: Instruction<()> = Instruction::NetSend {
            payload: Value::Null,
            address: "review@example.com".to_string(),
            next: Box::new(|()| ()),
        };
        assert_eq!(send.tag(), "netSend");
        assert_eq!(kv_get("1").tag(), "kvGet");
    }
}
