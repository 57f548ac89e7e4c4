//! Fatal, precondition-violation errors (spec §7).
//!
//! These are classification-time failures by the descriptor author, not
//! recoverable runtime states — the public [`crate::call`] entry point
//! turns them into a panic via `.expect()`, same as any hand-written
//! trampoline would abort on a malformed call. Keeping them as a concrete
//! `Result` up to that boundary (rather than panicking deep inside
//! `classify`) follows the split the teacher's own library crates use:
//! library code returns its own error type, and only the outermost
//! entry point (or, in the teacher's case, the CLI in `src/commands/*.rs`)
//! decides to fail hard.
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    /// More than [`crate::classify::MAX_STACK_WORDS`] words would have
    /// spilled to the outgoing stack area.
    #[error("call needs {used} outgoing stack words but the buffer holds at most {max}")]
    StackBufferOverflow { used: usize, max: usize },
    /// A descriptor argument (or, via FFI, a raw tag byte) fell outside the
    /// closed [`crate::types::ArgTag`] set.
    #[error("argument carries a tag outside the closed scalar set")]
    UnknownArgTag,
    /// An internal register-accounting invariant did not hold — this is a
    /// bug in the classifier, not in caller input.
    #[error("register accounting invariant broken: {0}")]
    RegisterAccountingBreach(&'static str),
}
