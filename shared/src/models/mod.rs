//! Data models
//!
//! Wire shapes exposed by the order-intake API.
//! Row types whose columns match the wire names use
//! `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod entry;
pub mod store_status;

// Re-exports
pub use entry::*;
pub use store_status::*;
