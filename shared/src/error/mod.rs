//! Error system for the order-intake service
//!
//! - [`ErrorCode`]: what went wrong, each mapped to an HTTP status
//! - [`AppError`]: error carried to the HTTP boundary
//! - [`ErrorBody`]: the `{"error": ...}` response body
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderMessageRequired);
//! assert_eq!(err.http_status().as_u16(), 400);
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, ErrorBody};
