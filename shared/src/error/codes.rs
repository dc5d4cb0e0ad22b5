//! Error codes for the order-intake service
//!
//! Codes are grouped by what went wrong:
//! - General: the request itself is unusable
//! - Permission: the shared secret is missing or wrong
//! - Order: an entry operation was refused
//! - System: the datastore failed

use std::fmt;

/// Error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // ==================== General ====================
    /// Invalid request (malformed body)
    InvalidRequest,

    // ==================== Permission ====================
    /// Permission denied (missing or wrong shared secret)
    PermissionDenied,

    // ==================== Order ====================
    /// Order entry not found
    OrderNotFound,
    /// Order message is missing or empty
    OrderMessageRequired,
    /// Order status is missing or empty
    OrderStatusRequired,

    // ==================== System ====================
    /// Database error
    DatabaseError,
}

impl ErrorCode {
    /// Default human-readable message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "Invalid request",

            ErrorCode::PermissionDenied => "Unauthorized",

            ErrorCode::OrderNotFound => "Entry not found",
            ErrorCode::OrderMessageRequired => "Message is required",
            ErrorCode::OrderStatusRequired => "Status is required",

            ErrorCode::DatabaseError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
