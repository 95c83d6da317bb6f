//! Error types for papr parsing, serialization and the serde bridge.
//!
//! Parsing a papr document can only fail in three ways:
//!
//! - **Malformed documents**: a token has no anchor to its left to attach to
//!   (for example a document that starts with a colon).
//! - **Unterminated quotes**: only reported when
//!   [`PaprOptions::strict_quotes`](crate::PaprOptions) is enabled.
//! - **Excessive nesting**: a token would attach deeper than
//!   [`PaprOptions::max_depth`](crate::PaprOptions).
//!
//! The remaining variants belong to the serde bridge ([`to_node`](crate::to_node),
//! [`from_node`](crate::from_node)) and to the reader/writer helpers.
//!
//! ## Examples
//!
//! ```rust
//! use papr::{parse, Error};
//!
//! let result = parse(": orphan colon");
//! assert!(matches!(result, Err(Error::Malformed { line: 1, column: 1, .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors reported by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A token had no valid enclosing anchor to its left.
    #[error("Malformed document at line {line}, column {column}: {msg}")]
    Malformed {
        line: usize,
        column: usize,
        msg: String,
    },

    /// A quoted token was never closed (strict mode only).
    #[error("Unterminated quote starting at line {line}, column {column}")]
    UnterminatedQuote { line: usize, column: usize },

    /// A token would attach deeper than the configured nesting limit.
    #[error("Nesting exceeds {limit} levels at line {line}, column {column}")]
    DepthLimit {
        line: usize,
        column: usize,
        limit: usize,
    },

    /// Node content could not be converted to the requested type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed-document error pointing at the offending token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use papr::Error;
    ///
    /// let err = Error::malformed(3, 7, "colon has no text to its left");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// ```
    pub fn malformed(line: usize, column: usize, msg: &str) -> Self {
        Error::Malformed {
            line,
            column,
            msg: msg.to_string(),
        }
    }

    pub fn unterminated_quote(line: usize, column: usize) -> Self {
        Error::UnterminatedQuote { line, column }
    }

    pub fn depth_limit(line: usize, column: usize, limit: usize) -> Self {
        Error::DepthLimit {
            line,
            column,
            limit,
        }
    }

    /// Creates a type mismatch error when node content cannot be converted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use papr::Error;
    ///
    /// let err = Error::type_mismatch("integer", "\"forty\"");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error for values papr cannot represent.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
