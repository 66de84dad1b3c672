//! The keychain session: load / update / remove bound to one namespace.

use std::sync::Arc;

use keyhold_backend::{SecureBackend, Status};
use tracing::debug;

use crate::error::{KeychainError, KeychainResult};
use crate::key::Key;
use crate::value::{KeychainValue, RawKeychainValue};

/// A typed session over one namespace ("service") of a secure store.
///
/// The session holds no state beyond the namespace string and a handle to
/// the backend: it is a capability value, freely cloneable and shareable
/// across tasks. Every operation is a live round trip to the backend;
/// nothing is cached.
///
/// ```
/// # use std::sync::Arc;
/// use keyhold::{Key, Keychain};
/// use keyhold_backend::InMemoryBackend;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), keyhold::KeychainError> {
/// let keychain = Keychain::service(Arc::new(InMemoryBackend::new()), "com.example.app");
/// let password: Key<String> = Key::new("password");
///
/// // Stores "12345", creating or replacing the entry as needed.
/// keychain.update(&password, &"12345".to_string()).await?;
/// assert_eq!(keychain.load(&password).await?, "12345");
///
/// keychain.remove(&password).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Concurrency
///
/// [`update`](Keychain::update) is an add-else-update sequence, not a
/// transaction: concurrent writers to the same key can race between the
/// failed add and the fallback update. Callers needing atomicity must
/// serialize per key externally. Abandoning an in-flight `update` leaves
/// the entry in an unknown state; re-querying is the only way to find out.
#[derive(Clone)]
pub struct Keychain {
    backend: Arc<dyn SecureBackend>,
    service: String,
}

impl Keychain {
    /// A session scoped to an explicit service name.
    pub fn service(backend: Arc<dyn SecureBackend>, service: impl Into<String>) -> Self {
        Self {
            backend,
            service: service.into(),
        }
    }

    /// A session scoped to the host application's own identity.
    ///
    /// Derives the service name from the current executable's file stem,
    /// read once at construction. Fails with a reported error when the
    /// process identity cannot be determined; prefer
    /// [`service`](Keychain::service) when an explicit namespace is
    /// available.
    pub fn standard(backend: Arc<dyn SecureBackend>) -> KeychainResult<Self> {
        let exe = std::env::current_exe().map_err(|err| {
            KeychainError::internal(format!("unable to determine host identity: {err}"))
        })?;
        let service = exe
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                KeychainError::internal(
                    "unable to determine host identity: executable name is not valid UTF-8",
                )
            })?;
        Ok(Self::service(backend, service))
    }

    /// The namespace this session is bound to.
    pub fn namespace(&self) -> &str {
        &self.service
    }

    /// Loads the value associated with the given key.
    ///
    /// Fails with a not-found-flavored error when no entry exists, and with
    /// a decoding error when the stored bytes are not a valid value of the
    /// key's type.
    pub async fn load<V: KeychainValue>(&self, key: &Key<V>) -> KeychainResult<V> {
        let bytes = self.load_bytes(key.identifier()).await?;
        V::decode(&bytes)
    }

    /// Loads a raw-projected value associated with the given key.
    ///
    /// Returns `Ok(None)` when the entry exists and its projection decodes,
    /// but matches no known case. A missing entry is still an error.
    pub async fn load_raw<V: RawKeychainValue>(&self, key: &Key<V>) -> KeychainResult<Option<V>> {
        let bytes = self.load_bytes(key.identifier()).await?;
        let raw = V::Raw::decode(&bytes)?;
        Ok(V::from_raw(raw))
    }

    /// Updates the value stored for the given key, or adds a new entry if
    /// the key does not exist.
    ///
    /// Idempotent "set" semantics: the caller never needs to know whether
    /// the entry pre-exists, and no duplicate-item error ever surfaces. The
    /// second and later writes to an existing key cost one extra round trip.
    pub async fn update<V: KeychainValue>(&self, key: &Key<V>, new_value: &V) -> KeychainResult<()> {
        let bytes = new_value.encode()?;
        self.store_bytes(key.identifier(), &bytes).await
    }

    /// Updates a raw-projected value stored for the given key, or adds a
    /// new entry if the key does not exist.
    pub async fn update_raw<V: RawKeychainValue>(
        &self,
        key: &Key<V>,
        new_value: &V,
    ) -> KeychainResult<()> {
        let bytes = new_value.raw_value().encode()?;
        self.store_bytes(key.identifier(), &bytes).await
    }

    /// Removes the entry associated with the given key.
    ///
    /// Removal is not idempotent: deleting an absent key fails with a
    /// not-found-flavored error, mirroring the backend contract.
    pub async fn remove<V>(&self, key: &Key<V>) -> KeychainResult<()> {
        self.backend
            .delete(&self.service, key.identifier())
            .await
            .map_err(KeychainError::from_status)?;
        debug!(service = %self.service, account = key.identifier(), "entry removed");
        Ok(())
    }

    async fn load_bytes(&self, account: &str) -> KeychainResult<Vec<u8>> {
        let bytes = self
            .backend
            .query(&self.service, account)
            .await
            .map_err(KeychainError::from_status)?;
        debug!(service = %self.service, account, len = bytes.len(), "entry loaded");
        Ok(bytes)
    }

    // Add-else-update upsert. Not atomic: a concurrent writer can slip in
    // between the failed add and the fallback update.
    async fn store_bytes(&self, account: &str, bytes: &[u8]) -> KeychainResult<()> {
        match self.backend.add(&self.service, account, bytes).await {
            Ok(()) => {
                debug!(service = %self.service, account, len = bytes.len(), "entry added");
                Ok(())
            }
            Err(Status::DUPLICATE_ITEM) => {
                self.backend
                    .update_existing(&self.service, account, bytes)
                    .await
                    .map_err(KeychainError::from_status)?;
                debug!(service = %self.service, account, len = bytes.len(), "entry updated");
                Ok(())
            }
            Err(status) => Err(KeychainError::from_status(status)),
        }
    }
}

impl std::fmt::Debug for Keychain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keychain")
            .field("service", &self.service)
            .finish()
    }
}
