use std::error::Error;

use tome_store::StoreError;
use tome_types::chain::sources;

use crate::code::ErrorCode;

/// Errors returned by [`Repository::fetch_by_id`](crate::Repository::fetch_by_id).
///
/// Exactly one variant is produced per failed call. Each keeps the identifier
/// that was requested and the original cause as its [`Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Storage has no payload for the identifier.
    ///
    /// Matches `code` as a domain sentinel while the storage-level
    /// [`StoreError::NotFound`] stays in the source chain.
    #[error("{source}: {code}")]
    NotFound {
        entity: &'static str,
        id: String,
        code: ErrorCode,
        #[source]
        source: StoreError,
    },

    /// Storage failed for any other reason.
    #[error("unable to find {entity} with id '{id}': {source}")]
    Storage {
        entity: &'static str,
        id: String,
        #[source]
        source: StoreError,
    },

    /// The payload was fetched but does not decode into the entity.
    #[error("problem decoding {entity} with id '{id}': {source}")]
    Decode {
        entity: &'static str,
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Tag for the three [`RepoError`] outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RepoErrorKind {
    NotFound,
    Storage,
    Decode,
}

impl RepoError {
    pub fn kind(&self) -> RepoErrorKind {
        match self {
            Self::NotFound { .. } => RepoErrorKind::NotFound,
            Self::Storage { .. } => RepoErrorKind::Storage,
            Self::Decode { .. } => RepoErrorKind::Decode,
        }
    }

    /// The domain sentinel carried by this error, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::NotFound { code, .. } => Some(*code),
            Self::Storage { .. } | Self::Decode { .. } => None,
        }
    }

    /// Returns `true` if this error or any of its causes matches `code`.
    pub fn is(&self, code: ErrorCode) -> bool {
        is(self, code)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == RepoErrorKind::NotFound
    }

    /// The identifier that was requested.
    pub fn id(&self) -> &str {
        match self {
            Self::NotFound { id, .. } | Self::Storage { id, .. } | Self::Decode { id, .. } => id,
        }
    }

    /// The entity kind that was requested, e.g. `"book"`.
    pub fn entity(&self) -> &'static str {
        match self {
            Self::NotFound { entity, .. }
            | Self::Storage { entity, .. }
            | Self::Decode { entity, .. } => *entity,
        }
    }

    /// The storage error behind this failure. `None` for decode failures.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            Self::NotFound { source, .. } | Self::Storage { source, .. } => Some(source),
            Self::Decode { .. } => None,
        }
    }
}

/// Result alias for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Walk `err` and its sources looking for the sentinel `code`.
///
/// A link matches if it is the `ErrorCode` itself or a [`RepoError`]
/// carrying it, so the check still succeeds after callers wrap a
/// `RepoError` in their own error types.
pub fn is(err: &(dyn Error + 'static), code: ErrorCode) -> bool {
    sources(err).any(|link| {
        link.downcast_ref::<ErrorCode>() == Some(&code)
            || link.downcast_ref::<RepoError>().and_then(RepoError::code) == Some(code)
    })
}
