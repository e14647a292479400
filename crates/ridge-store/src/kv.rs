//! Key-value store wrapper with automatic serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Raw byte-level storage backend.
///
/// Implementations decide where bytes live; [`Cache`] layers JSON
/// serialization on top.
pub trait KvBackend: Send + Sync {
    /// Read the raw bytes under a key, if present.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write the raw bytes under a key, replacing any previous value.
    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether a key exists.
    fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// List all stored keys.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Type-safe cache over a [`KvBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Clones share the same backend, so
/// a cache handle can be passed to several consumers.
///
/// # Example
///
/// ```rust,ignore
/// let cache = Cache::memory();
/// cache.set("cart:sess-1", &cart)?;
/// let cart: Option<Cart> = cache.get("cart:sess-1")?;
/// ```
#[derive(Clone)]
pub struct Cache {
    backend: Arc<dyn KvBackend>,
}

impl Cache {
    /// Wrap an arbitrary backend.
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        Self { backend }
    }

    /// Open an in-memory store (dropped with the last handle).
    pub fn memory() -> Self {
        Self::new(Arc::new(crate::MemoryBackend::new()))
    }

    /// Open a file-backed store rooted at the given directory.
    pub fn file(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        Ok(Self::new(Arc::new(crate::FileBackend::open(root)?)))
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get_raw(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set_raw(key, &bytes)
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.backend.delete(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.backend.exists(key)
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.backend.keys()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Payload {
        name: String,
        count: u32,
    }

    #[test]
    fn test_round_trip() {
        let cache = Cache::memory();
        let value = Payload {
            name: "carrier".to_string(),
            count: 3,
        };

        cache.set("k1", &value).unwrap();
        assert_eq!(cache.get::<Payload>("k1").unwrap(), Some(value));
    }

    #[test]
    fn test_missing_key() {
        let cache = Cache::memory();
        assert_eq!(cache.get::<Payload>("nope").unwrap(), None);
        assert!(!cache.exists("nope").unwrap());
    }

    #[test]
    fn test_delete() {
        let cache = Cache::memory();
        cache.set("k1", &1u32).unwrap();
        cache.delete("k1").unwrap();
        assert!(!cache.exists("k1").unwrap());

        // Deleting again is fine.
        cache.delete("k1").unwrap();
    }

    #[test]
    fn test_clones_share_backend() {
        let a = Cache::memory();
        let b = a.clone();

        a.set("k1", &42u32).unwrap();
        assert_eq!(b.get::<u32>("k1").unwrap(), Some(42));
    }

    #[test]
    fn test_keys() {
        let cache = Cache::memory();
        cache.set("a", &1u32).unwrap();
        cache.set("b", &2u32).unwrap();

        let mut keys = cache.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
