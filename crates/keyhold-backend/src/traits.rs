//! The [`SecureBackend`] trait defining the secure-store boundary.
//!
//! Any backend (platform keychain, secret service, hardware enclave, in-memory
//! test double) implements this trait to provide namespaced byte storage for
//! the typed accessor layer.

use async_trait::async_trait;

use crate::status::Status;

/// Result alias for backend calls. The error side is the backend's raw,
/// untranslated status code; translation into a user-facing error happens
/// above this boundary.
pub type BackendResult<T> = Result<T, Status>;

/// External secure-storage collaborator.
///
/// Entries are addressed by `(service, account)`: `service` partitions the
/// store into flat namespaces, `account` is the opaque per-entry identifier
/// within one. All implementations must satisfy these invariants:
///
/// - The backend owns persistence, encryption, and access control; it never
///   interprets payload bytes.
/// - Every call is an independent request/response round trip. The backend
///   provides no cross-call transactions.
/// - `add` rejects an existing `(service, account)` pair with
///   [`Status::DUPLICATE_ITEM`] rather than overwriting it.
/// - Absent entries surface as [`Status::ITEM_NOT_FOUND`] from `query`,
///   `update_existing`, and `delete`.
#[async_trait]
pub trait SecureBackend: Send + Sync {
    /// Look up the entry for `(service, account)` and return its payload.
    ///
    /// Matches at most one entry and always returns its data.
    async fn query(&self, service: &str, account: &str) -> BackendResult<Vec<u8>>;

    /// Create a new entry holding `data`.
    ///
    /// Fails with [`Status::DUPLICATE_ITEM`] if the entry already exists.
    async fn add(&self, service: &str, account: &str, data: &[u8]) -> BackendResult<()>;

    /// Replace the payload of an existing entry.
    ///
    /// Fails with [`Status::ITEM_NOT_FOUND`] if the entry does not exist.
    async fn update_existing(
        &self,
        service: &str,
        account: &str,
        data: &[u8],
    ) -> BackendResult<()>;

    /// Delete the entry for `(service, account)`.
    ///
    /// Fails with [`Status::ITEM_NOT_FOUND`] if the entry does not exist;
    /// deletion is not idempotent at this boundary.
    async fn delete(&self, service: &str, account: &str) -> BackendResult<()>;
}
