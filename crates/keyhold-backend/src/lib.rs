//! Secure-store collaborator boundary for Keyhold.
//!
//! This crate defines the contract between the typed accessor layer (the
//! `keyhold` crate) and whatever secure storage engine actually persists
//! entries: an OS keychain, a secret service, a hardware enclave, or a test
//! double. The boundary is deliberately narrow — four namespaced byte
//! operations and a numeric status vocabulary.
//!
//! # Modules
//!
//! - [`status`] — The [`Status`] code vocabulary reported by backends
//! - [`traits`] — The [`SecureBackend`] trait defining the storage interface
//! - [`memory`] — In-memory [`InMemoryBackend`] for tests and embedding
//!
//! # Design Rules
//!
//! 1. The backend never interprets payload bytes.
//! 2. Every call is an independent request/response round trip.
//! 3. Outcomes are raw status codes; translation into user-facing errors
//!    happens above this boundary.
//! 4. `add` never overwrites: an existing entry reports `DUPLICATE_ITEM`.

pub mod memory;
pub mod status;
pub mod traits;

pub use memory::InMemoryBackend;
pub use status::Status;
pub use traits::{BackendResult, SecureBackend};
