//! Datastore access layer
//!
//! [`OrderStore`] is the contract the services depend on. Every method is a
//! single atomic operation against the datastore; the services never hold a
//! transaction open across calls.
//!
//! Two implementations:
//! 1. [`postgres::PgStore`]: the production datastore
//! 2. [`memory::MemoryStore`]: in-process, for development and tests

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use shared::models::{Entry, StoreStatus};

pub use crate::error::BoxError;

/// Entry as stored: snake_case columns
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EntryRow {
    pub id: i64,
    pub order_number: i64,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<EntryRow> for Entry {
    fn from(row: EntryRow) -> Self {
        Entry {
            id: row.id,
            order_number: row.order_number,
            name: row.name,
            phone_number: row.phone_number,
            message: row.message,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// Values for a new entry row; `id` and `created_at` come from the datastore
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub order_number: i64,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub message: String,
    pub status: String,
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Short name for logs ("postgres", "memory")
    fn kind(&self) -> &'static str;

    // ── Daily order counter ──

    /// Advance the counter of `day` and return the new value.
    ///
    /// `None` when no counter exists yet for `day`.
    async fn advance_order_counter(&self, day: NaiveDate) -> Result<Option<i64>, BoxError>;

    /// Create the counter of `day` at `seed`, or advance it if another caller
    /// created it first. Returns the number claimed.
    async fn claim_order_number(&self, day: NaiveDate, seed: i64) -> Result<i64, BoxError>;

    /// Highest order number among entries created on `day` in `tz`.
    ///
    /// `None` when there is no such entry or the stored value is unreadable.
    async fn max_order_number_on(&self, day: NaiveDate, tz: Tz) -> Result<Option<i64>, BoxError>;

    // ── Entries ──

    async fn insert_entry(&self, entry: NewEntry) -> Result<Entry, BoxError>;

    /// Newest first; exact match on `status` when given
    async fn list_entries(&self, status: Option<&str>) -> Result<Vec<Entry>, BoxError>;

    /// `None` when no entry has `id`
    async fn update_entry_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<Entry>, BoxError>;

    // ── Store status singleton ──

    /// Current store status, created with defaults if absent
    async fn load_store_status(&self) -> Result<StoreStatus, BoxError>;

    /// Replace the store status, creating it if absent
    async fn save_store_status(&self, status: &StoreStatus) -> Result<StoreStatus, BoxError>;
}
