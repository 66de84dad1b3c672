//! Strongly-typed accessor layer over a secure credential store.
//!
//! Keyhold maps typed requests onto the four primitive operations of an
//! opaque, namespaced key→bytes service (an OS keychain or similar),
//! provided through the [`SecureBackend`] trait from `keyhold-backend`. The
//! store itself — persistence, encryption, access control — lives entirely
//! behind that boundary.
//!
//! ```
//! # use std::sync::Arc;
//! use keyhold::{Key, Keychain};
//! use keyhold_backend::InMemoryBackend;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), keyhold::KeychainError> {
//! let keychain = Keychain::service(Arc::new(InMemoryBackend::new()), "com.example.app");
//!
//! // Keys pair an identifier with the value type stored under it.
//! let password: Key<String> = Key::new("password");
//!
//! keychain.update(&password, &"12345".to_string()).await?;
//! assert_eq!(keychain.load(&password).await?, "12345");
//! keychain.remove(&password).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Keys** ([`Key<Value>`](Key)) are phantom-typed handles pairing an
//!   opaque identifier string with a compile-time value type. Identifier
//!   uniqueness within a namespace is a caller obligation.
//! - **Codecs** ([`KeychainValue`], [`RawKeychainValue`]) give each value
//!   kind exactly one canonical byte encoding, selected statically.
//! - **Sessions** ([`Keychain`]) bind the operations to one namespace and
//!   implement the add-else-update upsert protocol.
//! - **Errors** ([`KeychainError`]) wrap every non-success backend status
//!   in one structured shape with a displayable message.
//!
//! # Modules
//!
//! - [`error`] — The [`KeychainError`] status-wrapping error type
//! - [`key`] — Phantom-typed [`Key`] handles
//! - [`value`] — Codec dispatch traits and implementations
//! - [`session`] — The [`Keychain`] session operations

pub mod error;
pub mod key;
pub mod session;
pub mod value;

pub use error::{KeychainError, KeychainResult};
pub use key::Key;
pub use session::Keychain;
pub use value::{KeychainValue, RawKeychainValue};

// Re-export the backend boundary so embedders need only one dependency.
pub use keyhold_backend::{BackendResult, InMemoryBackend, SecureBackend, Status};
