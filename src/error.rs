//! Error types for the huffcode library.
//!
//! Both encode and decode failures are input validation problems. Building a codec never fails.

use thiserror::Error;

/// Error variants for encode and decode operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffError {
    /// The text contains a character that never appeared in the corpus.
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    /// The digit string ended in the middle of a code, or the pending digits can never complete one.
    #[error("incomplete code {pending:?} starting at position {position}")]
    IncompleteCode { position: usize, pending: String },

    /// The digit string contains something other than '0' or '1'.
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

/// A specialized Result type for huffcode operations.
pub type Result<T> = std::result::Result<T, HuffError>;
