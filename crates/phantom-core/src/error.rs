//! # Error Types
//!
//! The engine operations report absence, not errors. `PhantomError` covers
//! the one fallible surface this crate has: turning user-supplied text into
//! years and century starts.

use thiserror::Error;

/// Error parsing a year or century from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhantomError {
    /// Input was empty or whitespace.
    #[error("empty {kind} value")]
    Empty {
        /// "year" or "century".
        kind: &'static str,
    },

    /// Input was not an integer in the supported range.
    #[error("invalid {kind} {input:?}: {reason}")]
    InvalidNumber {
        /// "year" or "century".
        kind: &'static str,
        /// The offending input, trimmed.
        input: String,
        /// Parser message.
        reason: String,
    },
}
