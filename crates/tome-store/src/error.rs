use std::error::Error;

use crate::config::ConfigError;

/// Errors from storage backends.
///
/// `NotFound` is the only variant callers are expected to branch on. The
/// rest describe failures that are opaque beyond their message and source.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No payload is stored under the requested identifier.
    #[error("not found")]
    NotFound,

    /// The identifier cannot be used as a key by this backend.
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// The backend was opened with an unusable configuration.
    #[error("invalid store config: {0}")]
    Config(#[from] ConfigError),

    /// I/O error from the underlying storage medium.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other backend failure (network, permission, corruption, timeout).
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn Error + Send + Sync>),
}

impl StoreError {
    /// Wrap an arbitrary failure as an opaque backend error.
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self::Backend(err.into())
    }

    /// Returns `true` for the "no such identifier" sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
