//! Numeric status codes spoken by secure-store backends.
//!
//! Every backend operation reports its outcome as a [`Status`]. The constants
//! mirror the status vocabulary of the platform keychain service; codes
//! outside the well-known set pass through untranslated and render as their
//! numeric value.

use std::fmt;

/// Outcome code for a single backend operation.
///
/// A transparent wrapper over the backend's raw `i32` code. Zero means
/// success; every other value is an error condition. Use
/// [`description`](Status::description) to obtain a human-readable message
/// for well-known codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Status(pub i32);

impl Status {
    /// The operation completed without error.
    pub const SUCCESS: Status = Status(0);

    /// An entry already exists for this service/account pair.
    pub const DUPLICATE_ITEM: Status = Status(-25299);

    /// The requested entry could not be found.
    pub const ITEM_NOT_FOUND: Status = Status(-25300);

    /// Authorization or authentication failed.
    pub const AUTH_FAILED: Status = Status(-25293);

    /// No secure store is available.
    pub const NOT_AVAILABLE: Status = Status(-25291);

    /// One or more parameters were not valid.
    pub const PARAM: Status = Status(-50);

    /// Stored bytes could not be decoded as the requested value.
    pub const DECODE: Status = Status(-26275);

    /// An internal component of the store failed.
    pub const INTERNAL_COMPONENT: Status = Status(-2070);

    /// The raw numeric code.
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Returns `true` for [`Status::SUCCESS`].
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Human-readable description of a well-known code.
    ///
    /// Returns `None` for codes outside the well-known set; callers fall
    /// back to rendering the numeric value.
    pub fn description(self) -> Option<&'static str> {
        match self {
            Status::SUCCESS => Some("No error."),
            Status::DUPLICATE_ITEM => {
                Some("The specified item already exists in the keychain.")
            }
            Status::ITEM_NOT_FOUND => {
                Some("The specified item could not be found in the keychain.")
            }
            Status::AUTH_FAILED => Some("Authorization or authentication failed."),
            Status::NOT_AVAILABLE => Some("No keychain is available."),
            Status::PARAM => {
                Some("One or more parameters passed to the function were not valid.")
            }
            Status::DECODE => Some("Unable to decode the provided data."),
            Status::INTERNAL_COMPONENT => {
                Some("An internal component experienced an error.")
            }
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Status {
    fn from(code: i32) -> Self {
        Status(code)
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.0
    }
}
