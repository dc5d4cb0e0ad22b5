//! Order entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status given to every entry at creation
pub const DEFAULT_ENTRY_STATUS: &str = "New";

/// First order number of a business day
pub const ORDER_NUMBER_FLOOR: i64 = 100;

/// A customer order, in its external (wire) shape
///
/// Storage uses snake_case columns (`order_number`, `phone_number`); this
/// type is what clients always see, whichever datastore produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    /// Daily sequence number, unique within one business day
    #[serde(rename = "orderNumber")]
    pub order_number: i64,
    pub name: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
