use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::Fetcher;

/// In-memory, HashMap-based payload store.
///
/// Intended for tests and embedding. All payloads are held in memory behind a
/// `RwLock` for safe concurrent access. Payloads are cloned on read/write.
pub struct InMemoryStore {
    payloads: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            payloads: RwLock::new(HashMap::new()),
        }
    }

    /// Store `payload` under `id`, returning the payload it replaced.
    pub fn insert(
        &self,
        id: impl Into<String>,
        payload: impl Into<Vec<u8>>,
    ) -> StoreResult<Option<Vec<u8>>> {
        let id = id.into();
        let payload = payload.into();
        debug!(id = %id, len = payload.len(), "payload stored");
        Ok(self.write()?.insert(id, payload))
    }

    /// Remove the payload stored under `id`, returning it if present.
    pub fn remove(&self, id: &str) -> StoreResult<Option<Vec<u8>>> {
        let removed = self.write()?.remove(id);
        debug!(id, existed = removed.is_some(), "payload removed");
        Ok(removed)
    }

    /// Returns `true` if a payload is stored under `id`.
    pub fn contains(&self, id: &str) -> StoreResult<bool> {
        Ok(self.read()?.contains_key(id))
    }

    /// Number of payloads currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Remove all payloads from the store.
    pub fn clear(&self) -> StoreResult<()> {
        self.write()?.clear();
        Ok(())
    }

    /// Return a sorted list of all identifiers in the store.
    pub fn ids(&self) -> StoreResult<Vec<String>> {
        let mut ids: Vec<String> = self.read()?.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<String, Vec<u8>>>> {
        self.payloads
            .read()
            .map_err(|e| StoreError::backend(format!("lock poisoned: {e}")))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, Vec<u8>>>> {
        self.payloads
            .write()
            .map_err(|e| StoreError::backend(format!("lock poisoned: {e}")))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryStore
where
    K: Into<String>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let payloads = iter
            .into_iter()
            .map(|(id, payload)| (id.into(), payload.into()))
            .collect();
        Self {
            payloads: RwLock::new(payloads),
        }
    }
}

impl Fetcher for InMemoryStore {
    fn fetch(&self, id: &str) -> StoreResult<Vec<u8>> {
        let payload = self.read()?.get(id).cloned();
        match payload {
            Some(payload) => {
                debug!(id, len = payload.len(), "payload fetched");
                Ok(payload)
            }
            None => {
                debug!(id, "payload not found");
                Err(StoreError::NotFound)
            }
        }
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.payloads.read().map(|map| map.len()).ok();
        f.debug_struct("InMemoryStore")
            .field("payload_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tome_types::Book;

    // -----------------------------------------------------------------------
    // Fetch
    // -----------------------------------------------------------------------

    #[test]
    fn insert_and_fetch() {
        let store = InMemoryStore::new();
        store.insert("1", b"hello".to_vec()).unwrap();
        assert_eq!(store.fetch("1").unwrap(), b"hello");
    }

    #[test]
    fn fetch_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.fetch("missing").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn empty_id_is_an_ordinary_key() {
        let store = InMemoryStore::new();
        assert!(store.fetch("").unwrap_err().is_not_found());
        store.insert("", "blank").unwrap();
        assert_eq!(store.fetch("").unwrap(), b"blank");
    }

    #[test]
    fn payload_is_returned_verbatim() {
        let book = Book::new("1", "Foo", "Bar");
        let json = serde_json::to_vec(&book).unwrap();
        let store = InMemoryStore::new();
        store.insert("1", json.clone()).unwrap();
        assert_eq!(store.fetch("1").unwrap(), json);
    }

    #[test]
    fn repeated_fetches_return_equal_payloads() {
        let store = InMemoryStore::from_iter([("1", "abc")]);
        assert_eq!(store.fetch("1").unwrap(), store.fetch("1").unwrap());
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    #[test]
    fn insert_replaces_existing_payload() {
        let store = InMemoryStore::new();
        assert!(store.insert("1", "old").unwrap().is_none());
        assert_eq!(store.insert("1", "new").unwrap().as_deref(), Some(&b"old"[..]));
        assert_eq!(store.fetch("1").unwrap(), b"new");
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn remove_present_and_missing() {
        let store = InMemoryStore::from_iter([("1", "x")]);
        assert!(store.remove("1").unwrap().is_some());
        assert!(!store.contains("1").unwrap());
        assert!(store.remove("1").unwrap().is_none());
        assert!(store.fetch("1").unwrap_err().is_not_found());
    }

    #[test]
    fn clear_and_is_empty() {
        let store = InMemoryStore::from_iter([("a", "1"), ("b", "2")]);
        assert!(!store.is_empty().unwrap());
        store.clear().unwrap();
        assert!(store.is_empty().unwrap());
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn ids_are_sorted() {
        let store = InMemoryStore::from_iter([("c", "3"), ("a", "1"), ("b", "2")]);
        assert_eq!(store.ids().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn debug_shows_count() {
        let store = InMemoryStore::from_iter([("a", "1")]);
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryStore"));
        assert!(debug.contains("payload_count"));
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_fetches_see_the_same_payload() {
        let store = Arc::new(InMemoryStore::from_iter([("1", "shared")]));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.fetch("1").unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), b"shared");
        }
    }

    #[test]
    fn poisoned_lock_surfaces_as_backend_error() {
        let store = Arc::new(InMemoryStore::from_iter([("1", "x")]));
        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = poisoner.payloads.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err = store.fetch("1").unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("lock poisoned"));
    }
}
