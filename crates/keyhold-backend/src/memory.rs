//! In-memory backend for tests and ephemeral use.
//!
//! [`InMemoryBackend`] keeps all entries in a `HashMap` behind a `RwLock`.
//! It implements the full [`SecureBackend`] contract, including the
//! duplicate-on-add and non-idempotent-delete behavior of the platform
//! store, and is suitable for unit tests and short-lived processes. Nothing
//! is encrypted; data is lost when the backend is dropped.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::status::Status;
use crate::traits::{BackendResult, SecureBackend};

/// An in-memory implementation of [`SecureBackend`].
///
/// Entries are keyed by `(service, account)`. Poisoned locks surface as
/// [`Status::INTERNAL_COMPONENT`] rather than panicking.
pub struct InMemoryBackend {
    entries: RwLock<HashMap<(String, String), Vec<u8>>>,
}

impl InMemoryBackend {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries currently stored, across all services.
    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries from all services.
    pub fn clear(&self) {
        if let Ok(mut map) = self.entries.write() {
            map.clear();
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecureBackend for InMemoryBackend {
    async fn query(&self, service: &str, account: &str) -> BackendResult<Vec<u8>> {
        let map = self
            .entries
            .read()
            .map_err(|_| Status::INTERNAL_COMPONENT)?;
        map.get(&(service.to_string(), account.to_string()))
            .cloned()
            .ok_or(Status::ITEM_NOT_FOUND)
    }

    async fn add(&self, service: &str, account: &str, data: &[u8]) -> BackendResult<()> {
        let mut map = self
            .entries
            .write()
            .map_err(|_| Status::INTERNAL_COMPONENT)?;
        let entry = (service.to_string(), account.to_string());
        if map.contains_key(&entry) {
            return Err(Status::DUPLICATE_ITEM);
        }
        map.insert(entry, data.to_vec());
        debug!(service, account, len = data.len(), "entry added");
        Ok(())
    }

    async fn update_existing(
        &self,
        service: &str,
        account: &str,
        data: &[u8],
    ) -> BackendResult<()> {
        let mut map = self
            .entries
            .write()
            .map_err(|_| Status::INTERNAL_COMPONENT)?;
        let entry = (service.to_string(), account.to_string());
        match map.get_mut(&entry) {
            Some(payload) => {
                *payload = data.to_vec();
                debug!(service, account, len = data.len(), "entry updated");
                Ok(())
            }
            None => Err(Status::ITEM_NOT_FOUND),
        }
    }

    async fn delete(&self, service: &str, account: &str) -> BackendResult<()> {
        let mut map = self
            .entries
            .write()
            .map_err(|_| Status::INTERNAL_COMPONENT)?;
        match map.remove(&(service.to_string(), account.to_string())) {
            Some(_) => {
                debug!(service, account, "entry deleted");
                Ok(())
            }
            None => Err(Status::ITEM_NOT_FOUND),
        }
    }
}

impl std::fmt::Debug for InMemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBackend")
            .field("entry_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Query
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn query_missing_entry() {
        let backend = InMemoryBackend::new();
        let err = backend.query("svc", "missing").await.unwrap_err();
        assert_eq!(err, Status::ITEM_NOT_FOUND);
    }

    #[tokio::test]
    async fn add_then_query() {
        let backend = InMemoryBackend::new();
        backend.add("svc", "token", b"secret").await.unwrap();
        let data = backend.query("svc", "token").await.unwrap();
        assert_eq!(data, b"secret");
    }

    // -----------------------------------------------------------------------
    // Add / update
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn add_duplicate_is_rejected() {
        let backend = InMemoryBackend::new();
        backend.add("svc", "token", b"one").await.unwrap();
        let err = backend.add("svc", "token", b"two").await.unwrap_err();
        assert_eq!(err, Status::DUPLICATE_ITEM);
        // The original payload is untouched.
        assert_eq!(backend.query("svc", "token").await.unwrap(), b"one");
    }

    #[tokio::test]
    async fn update_existing_replaces_payload() {
        let backend = InMemoryBackend::new();
        backend.add("svc", "token", b"one").await.unwrap();
        backend.update_existing("svc", "token", b"two").await.unwrap();
        assert_eq!(backend.query("svc", "token").await.unwrap(), b"two");
    }

    #[tokio::test]
    async fn update_missing_entry() {
        let backend = InMemoryBackend::new();
        let err = backend
            .update_existing("svc", "ghost", b"data")
            .await
            .unwrap_err();
        assert_eq!(err, Status::ITEM_NOT_FOUND);
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn delete_present_entry() {
        let backend = InMemoryBackend::new();
        backend.add("svc", "token", b"secret").await.unwrap();
        backend.delete("svc", "token").await.unwrap();
        let err = backend.query("svc", "token").await.unwrap_err();
        assert_eq!(err, Status::ITEM_NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_missing_entry_is_an_error() {
        let backend = InMemoryBackend::new();
        let err = backend.delete("svc", "ghost").await.unwrap_err();
        assert_eq!(err, Status::ITEM_NOT_FOUND);
    }

    // -----------------------------------------------------------------------
    // Namespacing
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn services_are_isolated() {
        let backend = InMemoryBackend::new();
        backend.add("app-a", "token", b"aaa").await.unwrap();
        backend.add("app-b", "token", b"bbb").await.unwrap();

        assert_eq!(backend.query("app-a", "token").await.unwrap(), b"aaa");
        assert_eq!(backend.query("app-b", "token").await.unwrap(), b"bbb");

        backend.delete("app-a", "token").await.unwrap();
        assert_eq!(backend.query("app-b", "token").await.unwrap(), b"bbb");
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn len_and_clear() {
        let backend = InMemoryBackend::new();
        assert!(backend.is_empty());

        backend.add("svc", "a", b"1").await.unwrap();
        backend.add("svc", "b", b"2").await.unwrap();
        assert_eq!(backend.len(), 2);

        backend.clear();
        assert!(backend.is_empty());
    }

    #[tokio::test]
    async fn concurrent_queries_are_safe() {
        use std::sync::Arc;

        let backend = Arc::new(InMemoryBackend::new());
        backend.add("svc", "shared", b"payload").await.unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let backend = Arc::clone(&backend);
                tokio::spawn(async move {
                    let data = backend.query("svc", "shared").await.unwrap();
                    assert_eq!(data, b"payload");
                })
            })
            .collect();

        for handle in handles {
            handle.await.expect("task should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let backend = InMemoryBackend::new();
        let debug = format!("{backend:?}");
        assert!(debug.contains("InMemoryBackend"));
        assert!(debug.contains("entry_count"));
    }
}
