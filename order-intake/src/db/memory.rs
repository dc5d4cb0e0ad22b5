//! In-process datastore
//!
//! Same contract as the Postgres store: each method takes the lock once, so
//! every call is atomic with respect to every other call.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use shared::models::{Entry, StoreStatus};
use tokio::sync::Mutex;

use super::{BoxError, EntryRow, NewEntry, OrderStore};

#[derive(Default)]
struct Tables {
    entries: Vec<EntryRow>,
    next_id: i64,
    order_counters: HashMap<NaiveDate, i64>,
    store_status: Option<StoreStatus>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store status rows (0 or 1)
    pub async fn store_status_rows(&self) -> usize {
        usize::from(self.tables.lock().await.store_status.is_some())
    }

    pub async fn entry_count(&self) -> usize {
        self.tables.lock().await.entries.len()
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    async fn advance_order_counter(&self, day: NaiveDate) -> Result<Option<i64>, BoxError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.order_counters.get_mut(&day).map(|last| {
            *last += 1;
            *last
        }))
    }

    async fn claim_order_number(&self, day: NaiveDate, seed: i64) -> Result<i64, BoxError> {
        let mut tables = self.tables.lock().await;
        let last = tables
            .order_counters
            .entry(day)
            .and_modify(|last| *last += 1)
            .or_insert(seed);
        Ok(*last)
    }

    async fn max_order_number_on(&self, day: NaiveDate, tz: Tz) -> Result<Option<i64>, BoxError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .entries
            .iter()
            .filter(|row| row.created_at.with_timezone(&tz).date_naive() == day)
            .map(|row| row.order_number)
            .max())
    }

    async fn insert_entry(&self, entry: NewEntry) -> Result<Entry, BoxError> {
        let mut tables = self.tables.lock().await;
        tables.next_id += 1;
        let row = EntryRow {
            id: tables.next_id,
            order_number: entry.order_number,
            name: entry.name,
            phone_number: entry.phone_number,
            message: entry.message,
            status: entry.status,
            created_at: Utc::now(),
        };
        tables.entries.push(row.clone());
        Ok(row.into())
    }

    async fn list_entries(&self, status: Option<&str>) -> Result<Vec<Entry>, BoxError> {
        let tables = self.tables.lock().await;
        let mut rows: Vec<EntryRow> = tables
            .entries
            .iter()
            .filter(|row| status.is_none_or(|s| row.status == s))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(rows.into_iter().map(Entry::from).collect())
    }

    async fn update_entry_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<Entry>, BoxError> {
        let mut tables = self.tables.lock().await;
        Ok(tables
            .entries
            .iter_mut()
            .find(|row| row.id == id)
            .map(|row| {
                row.status = status.to_string();
                Entry::from(row.clone())
            }))
    }

    async fn load_store_status(&self) -> Result<StoreStatus, BoxError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.store_status.get_or_insert_with(StoreStatus::default).clone())
    }

    async fn save_store_status(&self, status: &StoreStatus) -> Result<StoreStatus, BoxError> {
        let mut tables = self.tables.lock().await;
        tables.store_status = Some(status.clone());
        Ok(status.clone())
    }
}
