//! Shared types for the order-intake service
//!
//! Wire models, request/response bodies and the error system used by the
//! server and by anything that talks to it.

pub mod error;
pub mod models;
pub mod request;
pub mod response;
