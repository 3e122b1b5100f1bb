//! Repository layer for Tome.
//!
//! A [`Repository`] turns an identifier into a typed entity by making exactly
//! one call to an injected [`Fetcher`](tome_store::Fetcher), decoding the
//! returned JSON payload, and classifying every failure into one of three
//! mutually exclusive outcomes:
//!
//! - [`RepoError::NotFound`] -- the storage backend has no such identifier.
//!   Matches the domain sentinel (e.g. [`ErrorCode::BOOK_NOT_FOUND`]) and
//!   still carries the storage-level `NotFound` in its source chain.
//! - [`RepoError::Storage`] -- any other storage failure, wrapped with the
//!   identifier.
//! - [`RepoError::Decode`] -- the payload was fetched but is not a valid
//!   encoding of the entity.
//!
//! The repository holds no state beyond its storage handle. It does not
//! cache, retry or log.

pub mod code;
pub mod entity;
pub mod error;
pub mod repository;

pub use code::ErrorCode;
pub use entity::Entity;
pub use error::{is, RepoError, RepoErrorKind, RepoResult};
pub use repository::{BookRepository, EntityFetcher, Repository};

// Re-export the types callers need to wire a repository.
pub use tome_store::{Fetcher, StoreError};
pub use tome_types::Book;
