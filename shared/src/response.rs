//! Response bodies of the order-intake API

use serde::{Deserialize, Serialize};

use crate::models::{Entry, StoreStatus};

/// `{"success": true, "entry": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryResponse {
    pub success: bool,
    pub entry: Entry,
}

impl EntryResponse {
    pub fn ok(entry: Entry) -> Self {
        Self {
            success: true,
            entry,
        }
    }
}

/// `{"entries": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntriesResponse {
    pub entries: Vec<Entry>,
}

/// `{"success": true, "status": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStatusResponse {
    pub success: bool,
    pub status: StoreStatus,
}

impl StoreStatusResponse {
    pub fn ok(status: StoreStatus) -> Self {
        Self {
            success: true,
            status,
        }
    }
}

/// `GET /` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunningResponse {
    pub status: String,
}
