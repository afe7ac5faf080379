//! Error types for suffix tree construction.
//!
//! Only problems with the caller's input are reported here. Broken
//! construction invariants are defects and panic instead.

use thiserror::Error;

/// Errors reported before construction starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The input text has no symbols
    #[error("input text is empty")]
    EmptyText,

    /// The input contains the symbol reserved as the terminator
    #[error("input contains the reserved terminator symbol at position {position}")]
    ReservedSymbol {
        /// Index of the first occurrence in the input
        position: usize,
    },
}

/// Result type for suffix tree construction.
pub type Result<T> = std::result::Result<T, BuildError>;
