//! order-intake: customer order submissions with daily order numbers
//!
//! - Customers submit orders (`POST /submit`); each gets an order number that
//!   restarts at 100 every business day and never repeats within a day
//! - Staff list and filter orders and move them through free-form statuses
//! - A shared-secret guarded toggle records whether the store is open

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod state;

pub use api::create_router;
pub use config::Config;
pub use state::AppState;
