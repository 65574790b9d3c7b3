//! Error types for the docket crates.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the docket crates.
#[derive(Error, Debug)]
pub enum Error {
    /// No item exists at the requested position.
    #[error("Item id {item_id} not found")]
    ItemNotFound {
        /// The requested zero-based position.
        item_id: i64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (unexpected state).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Returns `true` if this error describes a missing item.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. })
    }

    /// Creates a not-found error for the given position.
    #[must_use]
    pub fn item_not_found(item_id: i64) -> Self {
        Self::ItemNotFound { item_id }
    }

    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
