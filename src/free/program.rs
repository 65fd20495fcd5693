use std::fmt;

use serde_json::Value;

use super::Instruction;
use crate::algebra::Algebra;
use crate::domain::{PersistedPost, Post, PostId, PostUpdate, UserId};

/// A free-monad program over [`Instruction`]s.
///
/// ```text
/// Program<A> = Pure(A)
///            | Suspend(Instruction<Program<A>>)
/// ```
///
/// Building a program only allocates continuations; nothing happens until
/// [`Program::interpret`] folds it into an interpreter's carrier.
///
/// # Laws
///
/// - **Left Identity**: `Program::pure(a).flat_map(f) == f(a)`
/// - **Right Identity**: `m.flat_map(Program::pure) == m`
/// - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # Examples
///
/// ```rust
/// use blog_effects::free::{Program, kv_get, kv_put};
/// use blog_effects::interpreter::StateInterpreter;
/// use blog_effects::store::StoreState;
///
/// let program: Program<Option<String>> =
///     kv_put("greeting", "hello").then(kv_get("greeting"));
///
/// let (value, state) = program.interpret(&StateInterpreter).run(StoreState::new());
/// assert_eq!(value.as_deref(), Some("hello"));
/// assert!(state.cache.contains("greeting"));
/// ```
pub enum Program<A> {
    /// A finished computation.
    Pure(A),
    /// An operation whose continuation yields the rest of the program.
    Suspend(Instruction<Program<A>>),
}

impl<A> Program<A> {
    /// Lifts a value into a program that performs no operation.
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Pure(value)
    }

    /// Whether the program has finished.
    pub const fn is_pure(&self) -> bool {
        matches!(self, Self::Pure(_))
    }
}

impl<A: Send + 'static> Program<A> {
    /// Lifts a single instruction whose continuation produces the result.
    pub fn lift(instruction: Instruction<A>) -> Self {
        Self::Suspend(instruction.map(Self::Pure))
    }

    /// Applies a function to the final result.
    pub fn map<B, F>(self, function: F) -> Program<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        self.flat_map(move |value| Program::Pure(function(value)))
    }

    /// Continues with the program `function` builds from the result.
    pub fn flat_map<B, F>(self, function: F) -> Program<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> Program<B> + Send + 'static,
    {
        match self {
            Self::Pure(value) => function(value),
            Self::Suspend(instruction) => {
                Program::Suspend(instruction.map(move |rest| rest.flat_map(function)))
            }
        }
    }

    /// Alias for [`Program::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Program<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> Program<B> + Send + 'static,
    {
        self.flat_map(function)
    }

    /// Runs `next` after this program, discarding this result.
    #[must_use]
    pub fn then<B: Send + 'static>(self, next: Program<B>) -> Program<B> {
        self.flat_map(move |_| next)
    }

    /// Folds the program into `interpreter`'s carrier, one instruction at a
    /// time, each continuation resuming with the interpreter's result.
    ///
    /// Nothing runs until the returned carrier value does.
    pub fn interpret<P: Algebra>(self, interpreter: &P) -> P::Of<A> {
        match self {
            Self::Pure(value) => P::pure(value),
            Self::Suspend(instruction) => {
                let interpreter = interpreter.clone();
                P::flat_map(P::pure(()), move |()| {
                    tracing::trace!(instruction = instruction.tag(), "running instruction");
                    let resumed = step(&interpreter, instruction);
                    P::flat_map(resumed, move |rest: Self| rest.interpret(&interpreter))
                })
            }
        }
    }
}

/// Dispatches one instruction to the matching capability and resumes its
/// continuation with the result.
fn step<P, Next>(interpreter: &P, instruction: Instruction<Next>) -> P::Of<Next>
where
    P: Algebra,
    Next: Send + 'static,
{
    match instruction {
        Instruction::KvGet { key, next } => P::map(interpreter.kv_get(&key), next),
        Instruction::KvPut { key, value, next } => P::map(interpreter.kv_put(&key, &value), next),
        Instruction::KvDelete { key, next } => P::map(interpreter.kv_delete(&key), next),
        Instruction::DbGetPosts { user_id, next } => P::map(interpreter.get_posts(user_id), next),
        Instruction::DbCreatePost { post, next } => P::map(interpreter.create_post(post), next),
        Instruction::DbUpdatePost {
            post_id,
            update,
            next,
        } => P::map(interpreter.update_post(post_id, update), next),
        Instruction::NetSend {
            payload,
            address,
            next,
        } => P::map(interpreter.net_send(payload, &address), next),
    }
}

impl<A: fmt::Debug> fmt::Debug for Program<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pure(value) => formatter.debug_tuple("Pure").field(value).finish(),
            Self::Suspend(instruction) => formatter
                .debug_tuple("Suspend")
                .field(instruction)
                .finish(),
        }
    }
}

static_assertions::assert_impl_all!(Program<Option<PersistedPost>>: Send);

// =============================================================================
// Smart constructors
// =============================================================================

/// Looks up `key` in the cache.
pub fn kv_get(key: impl Into<String>) -> Program<Option<String>> {
    Program::lift(Instruction::KvGet {
        key: key.into(),
        next: Box::new(|value| value),
    })
}

/// Stores `value` under `key`.
pub fn kv_put(key: impl Into<String>, value: impl Into<String>) -> Program<bool> {
    Program::lift(Instruction::KvPut {
        key: key.into(),
        value: value.into(),
        next: Box::new(|stored| stored),
    })
}

/// Removes `key` from the cache.
pub fn kv_delete(key: impl Into<String>) -> Program<bool> {
    Program::lift(Instruction::KvDelete {
        key: key.into(),
        next: Box::new(|removed| removed),
    })
}

/// Lists `user_id`'s posts.
pub fn db_get_posts(user_id: UserId) -> Program<Vec<Post>> {
    Program::lift(Instruction::DbGetPosts {
        user_id,
        next: Box::new(|posts| posts),
    })
}

/// Stores `post` under a fresh id.
pub fn db_create_post(post: Post) -> Program<PersistedPost> {
    Program::lift(Instruction::DbCreatePost {
        post,
        next: Box::new(|created| created),
    })
}

/// Applies `update` to the author's post `post_id`.
pub fn db_update_post(post_id: PostId, update: PostUpdate) -> Program<Option<PersistedPost>> {
    Program::lift(Instruction::DbUpdatePost {
        post_id,
        update,
        next: Box::new(|updated| updated),
    })
}

/// Sends `payload` to `address`.
pub fn net_send(payload: Value, address: impl Into<String>) -> Program<()> {
    Program::lift(Instruction::NetSend {
        payload,
        address: address.into(),
        next: Box::new(|()| ()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::samples::cool_post;
    use crate::interpreter::StateInterpreter;
    use crate::store::StoreState;
    use crate::test_support::capture_logs;
    use rstest::rstest;
    use tracing::Level;

    /// Steps through `program` by hand, feeding it `answers` in order.
    fn tags_of<A>(program: Program<A>, mut answers: Vec<Answer>) -> Vec<&'static str> {
        let mut tags = Vec::new();
        let mut current = program;
        loop {
            match current {
                Program::Pure(_) => return tags,
                Program::Suspend(instruction) => {
                    tags.push(instruction.tag());
                    current = answers.remove(0).resume(instruction);
                }
            }
        }
    }

    enum Answer {
        Cached(Option<String>),
        Flag(bool),
        Created(PersistedPost),
    }

    impl Answer {
        fn resume<N>(self, instruction: Instruction<N>) -> N {
            match (self, instruction) {
                (Self::Cached(value), Instruction::KvGet { next, .. }) => next(value),
                (Self::Flag(flag), Instruction::KvPut { next, .. }) => next(flag),
                (Self::Created(post), Instruction::DbCreatePost { next, .. }) => next(post),
                (_, other) => panic!("no answer for {}", other.tag()),
            }
        }
    }

    #[rstest]
    fn pure_is_finished() {
        assert!(Program::pure(1).is_pure());
        assert!(!kv_get("1").is_pure());
    }

    #[rstest]
    fn flat_map_on_pure_applies_immediately() {
        let program = Program::pure(20).flat_map(|x| Program::pure(x + 1)).map(|x| x * 2);
        assert!(matches!(program, Program::Pure(42)));
    }

    #[rstest]
    fn flat_map_on_suspend_stays_suspended() {
        let program = kv_get("1").flat_map(|_| Program::pure(()));
        assert!(matches!(program, Program::Suspend(Instruction::KvGet { .. })));
    }

    #[rstest]
    fn building_a_program_issues_nothing_until_stepped() {
        let program = kv_get("1")
            .then(kv_put("1", "[]"))
            .then(db_create_post(cool_post()))
            .map(|created| created.id);

        let tags = tags_of(
            program,
            vec![
                Answer::Cached(None),
                Answer::Flag(true),
                Answer::Created(PersistedPost::new(PostId::FIRST, cool_post())),
            ],
        );
        assert_eq!(tags, vec!["kvGet", "kvPut", "createPost"]);
    }

    #[rstest]
    fn continuation_sees_the_answer() {
        let program = kv_get("1").map(|value| value.unwrap_or_default());
        match program {
            Program::Suspend(Instruction::KvGet { key, next }) => {
                assert_eq!(key, "1");
                assert!(matches!(next(Some("hit".to_string())), Program::Pure(ref v) if v == "hit"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[rstest]
    fn instruction_trace_is_emitted_when_the_carrier_runs() {
        let (pending, while_folding) = capture_logs(Level::TRACE, || {
            kv_put("1", "[]").then(kv_get("1")).interpret(&StateInterpreter)
        });
        assert!(!while_folding.contains("running instruction"));

        let ((value, _), while_running) =
            capture_logs(Level::TRACE, || pending.run(StoreState::new()));
        assert_eq!(value.as_deref(), Some("[]"));

        let traced: Vec<&str> = while_running
            .lines()
            .filter(|line| line.contains("running instruction"))
            .collect();
        assert_eq!(traced.len(), 2);
        assert!(traced[0].contains("kvPut"));
        assert!(traced[1].contains("kvGet"));
    }
}
