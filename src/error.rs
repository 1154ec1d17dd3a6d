//! Error types for automaton construction.

use thiserror::Error;

/// Errors raised while building, extending or assembling an automaton.
///
/// Scanning never fails; only construction has preconditions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsaError {
    /// The pattern has no symbols.
    ///
    /// An automaton needs a terminal state distinct from the initial one.
    #[error("invalid pattern: a pattern must contain at least one symbol")]
    EmptyPattern,

    /// The table handed to `extend` has more states than the new pattern.
    #[error("cannot extend a table with terminal state {table_terminal} to a pattern of length {pattern_len}")]
    ExtensionTooLong {
        table_terminal: usize,
        pattern_len: usize,
    },

    /// The table handed to `extend` was not built from a prefix of the new pattern.
    ///
    /// `state` is the first row whose continuation rule disagrees with the pattern.
    #[error("table was not built from a prefix of the pattern (first mismatch at state {state})")]
    PrefixMismatch { state: usize },

    /// A table assembled from parts does not match the table its pattern builds.
    #[error("transition table does not match the pattern it was paired with")]
    TableMismatch,

    /// A deserialized table is not a valid automaton.
    #[error("malformed transition table: {0}")]
    MalformedTable(&'static str),
}

/// A specialized `Result` type for automaton construction.
pub type Result<T> = core::result::Result<T, FsaError>;
