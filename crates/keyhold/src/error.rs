//! Error type for keychain operations.

use keyhold_backend::Status;
use thiserror::Error;

/// Error surfaced by keychain operations.
///
/// One structured shape wrapping the backend's status code and a
/// human-readable message. The type is deliberately not differentiated into
/// finer kinds: callers distinguish cases (not-found versus everything else)
/// by inspecting [`status`](KeychainError::status), the way platform code
/// inspects the raw status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Keychain error: {message}")]
pub struct KeychainError {
    status: Status,
    message: String,
}

impl KeychainError {
    /// Wrap a non-success backend status.
    ///
    /// The message is the status's own description when the code is
    /// well-known, or a templated `"status code N"` fallback otherwise.
    pub fn from_status(status: Status) -> Self {
        let message = match status.description() {
            Some(text) => text.to_owned(),
            None => format!("status code {status}"),
        };
        Self { status, message }
    }

    /// A decoding failure: bytes were present but do not form a valid value
    /// of the requested kind.
    pub fn decode(reason: impl Into<String>) -> Self {
        Self {
            status: Status::DECODE,
            message: reason.into(),
        }
    }

    /// An internal failure outside the backend's status vocabulary.
    pub fn internal(reason: impl Into<String>) -> Self {
        Self {
            status: Status::INTERNAL_COMPONENT,
            message: reason.into(),
        }
    }

    /// The underlying status code.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The human-readable, directly displayable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` when the error reports a missing entry.
    pub fn is_not_found(&self) -> bool {
        self.status == Status::ITEM_NOT_FOUND
    }
}

/// Convenience type alias for keychain operations.
pub type KeychainResult<T> = Result<T, KeychainError>;
