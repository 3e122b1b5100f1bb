use std::fmt;
use std::marker::PhantomData;

use tome_store::Fetcher;
use tome_types::Book;

use crate::entity::Entity;
use crate::error::{RepoError, RepoResult};

/// Fetch-by-identifier contract for a typed entity.
///
/// Layers above the repository (handlers, services) should depend on this
/// trait rather than on [`Repository`], so they can be tested with their own
/// doubles.
pub trait EntityFetcher<E> {
    fn fetch_by_id(&self, id: &str) -> RepoResult<E>;
}

/// Typed lookup over an injected storage backend.
///
/// The repository owns nothing but its storage handle. Each call to
/// [`fetch_by_id`](Self::fetch_by_id) makes exactly one `fetch` on the
/// backend and decodes a fresh entity from the returned bytes.
pub struct Repository<E, S> {
    storage: S,
    _entity: PhantomData<fn() -> E>,
}

/// Repository producing [`Book`] records.
pub type BookRepository<S> = Repository<Book, S>;

impl<E, S> Repository<E, S>
where
    E: Entity,
    S: Fetcher,
{
    /// Create a repository over `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            _entity: PhantomData,
        }
    }

    /// The injected storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the repository and return its storage backend.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Fetch and decode the entity stored under `id`.
    ///
    /// `id` is passed to storage unchanged; validating it is the backend's
    /// concern.
    ///
    /// # Errors
    /// - [`RepoError::NotFound`] when storage reports `StoreError::NotFound`.
    /// - [`RepoError::Storage`] for every other storage failure.
    /// - [`RepoError::Decode`] when the payload is not valid JSON for `E`.
    pub fn fetch_by_id(&self, id: &str) -> RepoResult<E> {
        let payload = self.storage.fetch(id).map_err(|source| {
            if source.is_not_found() {
                RepoError::NotFound {
                    entity: E::KIND,
                    id: id.to_string(),
                    code: E::NOT_FOUND,
                    source,
                }
            } else {
                RepoError::Storage {
                    entity: E::KIND,
                    id: id.to_string(),
                    source,
                }
            }
        })?;

        serde_json::from_slice(&payload).map_err(|source| RepoError::Decode {
            entity: E::KIND,
            id: id.to_string(),
            source,
        })
    }
}

impl<E, S> EntityFetcher<E> for Repository<E, S>
where
    E: Entity,
    S: Fetcher,
{
    fn fetch_by_id(&self, id: &str) -> RepoResult<E> {
        Repository::fetch_by_id(self, id)
    }
}

impl<E, S: Clone> Clone for Repository<E, S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E, S: fmt::Debug> fmt::Debug for Repository<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("entity", &std::any::type_name::<E>())
            .field("storage", &self.storage)
            .finish()
    }
}
