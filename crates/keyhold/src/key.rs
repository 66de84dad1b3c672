//! Phantom-typed handles to individual keychain entries.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A typed handle to one keychain entry.
///
/// Pairs an opaque, caller-assigned identifier string with the value type
/// stored under it. The value type exists only at compile time and selects
/// the codec used by the session operations; the key itself carries no
/// runtime state beyond the identifier.
///
/// ```
/// use keyhold::Key;
///
/// let password: Key<String> = Key::new("password");
/// let attempts: Key<u32> = Key::new("attempts");
/// ```
///
/// # Identifier reuse
///
/// Identifiers must be unique within a namespace for their intended entry.
/// Reusing an identifier across incompatible value types is undefined
/// behavior: the store cannot detect the mismatch, and bytes written under
/// one type may decode as a bogus value of another, or fail with a decoding
/// error. This is a documented caller obligation, not an enforced invariant.
pub struct Key<Value> {
    identifier: String,
    _value: PhantomData<fn() -> Value>,
}

impl<Value> Key<Value> {
    /// Create a key with the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            _value: PhantomData,
        }
    }

    /// The opaque per-entry identifier within a namespace.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

// Manual impls: the derives would wrongly require `Value` to implement the
// respective trait, but the phantom parameter is never stored.

impl<Value> Clone for Key<Value> {
    fn clone(&self) -> Self {
        Self {
            identifier: self.identifier.clone(),
            _value: PhantomData,
        }
    }
}

impl<Value> fmt::Debug for Key<Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("identifier", &self.identifier)
            .finish()
    }
}

impl<Value> PartialEq for Key<Value> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl<Value> Eq for Key<Value> {}

impl<Value> Hash for Key<Value> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}
