//! Custom error types for uNivUSaver
//!
//! Every command returns a `SaverResult`; the REPL turns the error's
//! `Display` into a feedback line instead of aborting.

use thiserror::Error;

/// The main error type for uNivUSaver operations
#[derive(Error, Debug)]
pub enum SaverError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed or missing user input
    #[error("{0}")]
    Validation(String),

    /// A position outside the current bounds of a list
    #[error("Invalid {entity_type} index: {index}")]
    InvalidIndex {
        entity_type: &'static str,
        index: usize,
    },
}

impl SaverError {
    /// Create an "invalid index" error for transactions
    pub fn invalid_transaction_index(index: usize) -> Self {
        Self::InvalidIndex {
            entity_type: "transaction",
            index,
        }
    }

    /// Create an "invalid index" error for categories
    pub fn invalid_category_index(index: usize) -> Self {
        Self::InvalidIndex {
            entity_type: "category",
            index,
        }
    }

    /// Check if this is an out-of-bounds error
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SaverError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SaverError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for uNivUSaver operations
pub type SaverResult<T> = Result<T, SaverError>;
