//! Store status model

use serde::{Deserialize, Serialize};

/// Store open/closed flag plus a free-text note (singleton)
///
/// Storage and wire names are identical, so the row decodes straight into
/// this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StoreStatus {
    pub store_closed: bool,
    #[serde(default)]
    pub notes: String,
}

impl StoreStatus {
    /// Build the full replacement state from an update payload
    pub fn from_update(update: &StoreStatusUpdate) -> Self {
        Self {
            store_closed: update.store_closed,
            notes: update.notes.clone().unwrap_or_default(),
        }
    }
}

/// Update store status payload (`PUT /store-status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStatusUpdate {
    pub store_closed: bool,
    pub notes: Option<String>,
}
