//! Daily order number allocation
//!
//! Order numbers are short, human-readable and restart every business day at
//! [`ORDER_NUMBER_FLOOR`] ("Order 101" is called out at the counter).
//!
//! Allocation goes through a per-day counter row that the datastore advances
//! atomically, so concurrent submissions never share a number. Numbers may be
//! skipped (a claimed number whose insert fails is not reused); duplicates
//! within a day cannot happen.
//!
//! The first claim of a day seeds the counter from the entries already stored
//! for that day (`max + 1`), or from the floor when there are none.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use shared::models::ORDER_NUMBER_FLOOR;

use crate::db::{BoxError, OrderStore};

#[derive(Clone)]
pub struct OrderNumberAllocator {
    store: Arc<dyn OrderStore>,
    tz: Tz,
}

impl OrderNumberAllocator {
    pub fn new(store: Arc<dyn OrderStore>, tz: Tz) -> Self {
        Self { store, tz }
    }

    /// The current business day.
    ///
    /// Recomputed on every call; a request in flight across midnight is not
    /// synchronized with the next day's first request.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    pub async fn next_order_number(&self) -> Result<i64, BoxError> {
        self.next_order_number_on(self.today()).await
    }

    pub async fn next_order_number_on(&self, day: NaiveDate) -> Result<i64, BoxError> {
        if let Some(number) = self.store.advance_order_counter(day).await? {
            tracing::debug!(%day, order_number = number, "Order number allocated");
            return Ok(number);
        }

        let max = self.store.max_order_number_on(day, self.tz).await?;
        let seed = seed_from_max(max);
        let number = self.store.claim_order_number(day, seed).await?;
        tracing::debug!(%day, seed, order_number = number, "Order counter started for day");
        Ok(number)
    }
}

/// First number of a day given the highest number already stored that day.
///
/// No entries, or a value that cannot be incremented, starts at the floor.
pub fn seed_from_max(max: Option<i64>) -> i64 {
    max.and_then(|m| m.checked_add(1))
        .unwrap_or(ORDER_NUMBER_FLOOR)
}
