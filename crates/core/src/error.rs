//! Error types for geotrack value types
//!
//! This module defines the errors raised while constructing, parsing or
//! decoding value types. We use `thiserror` for automatic `Display` and
//! `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for geotrack core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for geotrack value types
#[derive(Debug, Error)]
pub enum Error {
    /// A negative value was offered where only non-negative values are valid
    ///
    /// Raised by construction, by decoding a negative (non-sentinel) cell and
    /// by parsing or deserializing a negative number.
    #[error("{value} is negative.")]
    InvalidArgument {
        /// The rejected value
        value: i64,
    },

    /// The value does not fit the 32-bit storage cell
    #[error("{value} is out of range (max {max})")]
    OutOfRange {
        /// The rejected value
        value: u64,
        /// Largest accepted value
        max: u64,
    },

    /// Text that is not a decimal integer
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error from the underlying reader or writer (short reads included)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Check if this is a negative-value rejection
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Check if this is a too-large-value rejection
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}
