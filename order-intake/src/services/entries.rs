//! Entry repository: create, list and re-status order entries

use std::sync::Arc;

use shared::error::ErrorCode;
use shared::models::{DEFAULT_ENTRY_STATUS, Entry};
use shared::request::SubmitEntry;

use crate::db::{NewEntry, OrderStore};
use crate::error::ServiceResult;

use super::allocator::OrderNumberAllocator;

#[derive(Clone)]
pub struct EntryRepository {
    store: Arc<dyn OrderStore>,
    allocator: OrderNumberAllocator,
}

impl EntryRepository {
    pub fn new(store: Arc<dyn OrderStore>, allocator: OrderNumberAllocator) -> Self {
        Self { store, allocator }
    }

    /// Number and store a submission.
    ///
    /// The message is checked before allocation, so a rejected submission
    /// consumes no order number.
    pub async fn create(&self, submission: SubmitEntry) -> ServiceResult<Entry> {
        let message = required(submission.message, ErrorCode::OrderMessageRequired)?;

        let order_number = self.allocator.next_order_number().await?;
        let entry = self
            .store
            .insert_entry(NewEntry {
                order_number,
                name: submission.name,
                phone_number: submission.phone_number,
                message,
                status: DEFAULT_ENTRY_STATUS.to_string(),
            })
            .await?;

        tracing::info!(id = entry.id, order_number, "Entry created");
        Ok(entry)
    }

    pub async fn list(&self, status: Option<&str>) -> ServiceResult<Vec<Entry>> {
        Ok(self.store.list_entries(status).await?)
    }

    /// Set the status of entry `id`. Any non-empty label is accepted.
    pub async fn update_status(&self, id: i64, status: Option<String>) -> ServiceResult<Entry> {
        let status = required(status, ErrorCode::OrderStatusRequired)?;

        let entry = self
            .store
            .update_entry_status(id, &status)
            .await?
            .ok_or(ErrorCode::OrderNotFound)?;

        tracing::info!(id, status = %entry.status, "Entry status updated");
        Ok(entry)
    }
}

/// Present and non-empty; the value itself is kept verbatim
fn required(value: Option<String>, missing: ErrorCode) -> Result<String, ErrorCode> {
    value.filter(|v| !v.is_empty()).ok_or(missing)
}
