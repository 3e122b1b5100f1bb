use std::sync::Arc;

use crate::error::StoreResult;

/// Fetch raw payload bytes by identifier.
///
/// All implementations must satisfy these invariants:
/// - An unknown identifier yields `Err(StoreError::NotFound)`, never an
///   empty payload and never an I/O error.
/// - Every other failure is returned as some other `StoreError` variant.
/// - The payload is returned exactly as stored; the store never interprets it.
/// - Timeouts and cancellation, if any, are handled inside the backend.
pub trait Fetcher: Send + Sync {
    /// Fetch the payload stored under `id`.
    fn fetch(&self, id: &str) -> StoreResult<Vec<u8>>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, id: &str) -> StoreResult<Vec<u8>> {
        (**self).fetch(id)
    }
}

impl<T: Fetcher + ?Sized> Fetcher for Box<T> {
    fn fetch(&self, id: &str) -> StoreResult<Vec<u8>> {
        (**self).fetch(id)
    }
}

impl<T: Fetcher + ?Sized> Fetcher for Arc<T> {
    fn fetch(&self, id: &str) -> StoreResult<Vec<u8>> {
        (**self).fetch(id)
    }
}
