//! Error types for hicpairs

use thiserror::Error;

/// Result type alias for hicpairs operations
pub type Result<T> = std::result::Result<T, PairsError>;

/// Error types that can occur while streaming pair records
#[derive(Debug, Error)]
pub enum PairsError {
    /// I/O error while reading the underlying source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// First line has a column count that matches no known layout
    #[error("unexpected column count ({actual}) at line {line}: only 8 or 16 columns supported")]
    ColumnCount {
        /// Number of columns found
        actual: usize,
        /// Line number where detection ran
        line: usize,
    },

    /// A line after format detection is too short for the established layout
    #[error("truncated record at line {line}: layout requires {expected} columns, got {actual}")]
    TruncatedRecord {
        /// Column count of the established layout
        expected: usize,
        /// Number of columns found
        actual: usize,
        /// Line number where error occurred
        line: usize,
    },

    /// A numeric field failed to parse
    #[error("invalid field '{field}' at line {line}: {reason}")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// Line number where error occurred
        line: usize,
        /// Reason for invalidity
        reason: String,
    },

    /// `next_pair()` was called with no pair remaining
    #[error("next_pair() called on an exhausted stream")]
    StreamExhausted,

    /// `push_back()` was called while a pushed-back pair was already pending
    #[error("a pushed-back pair is already pending; only one slot exists")]
    PushBackPending,
}
