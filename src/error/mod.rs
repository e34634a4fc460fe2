//! Error handling for the dispatch directory.

use std::sync::PoisonError;

/// Specialized error type for directory operations.
///
/// The variants mirror how failures are reported to callers: argument
/// problems are always local and never retried, identity collisions and
/// missing identities are caller-visible conflicts, and anything else is an
/// internal failure.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// A required selector or field was blank or missing
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A create collided with an existing identity
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// The targeted identity or selector has no match
    #[error("not found: {0}")]
    NotFound(String),

    /// Error reading or decoding the startup snapshot
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Any other internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Create an `InvalidArgument` error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an `AlreadyExists` error
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists(message.into())
    }

    /// Create a `NotFound` error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

// A poisoned store lock means a writer panicked mid-mutation; surface it as
// an internal failure instead of propagating the panic to every caller.
impl<T> From<PoisonError<T>> for DirectoryError {
    fn from(_: PoisonError<T>) -> Self {
        Self::Internal("store lock poisoned".to_string())
    }
}

/// Result type for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
