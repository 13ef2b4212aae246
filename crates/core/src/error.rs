//! Error types for core value construction and parsing.

use thiserror::Error;

/// Result type for core value operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised while constructing or parsing core value types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A byte slice had the wrong length for the target type.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Length the target type requires.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Input was not valid hexadecimal.
    #[error("invalid hex encoding: {0}")]
    HexDecode(#[from] hex::FromHexError),
}
