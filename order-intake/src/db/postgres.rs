//! PostgreSQL datastore
//!
//! Tables:
//! - `entries`: one row per order
//! - `order_counters`: one row per business day, the last order number handed out
//! - `store_status`: singleton row pinned to `id = 1`

use async_trait::async_trait;
use chrono::NaiveDate;
use chrono_tz::Tz;
use shared::models::{Entry, StoreStatus};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use super::{BoxError, EntryRow, NewEntry, OrderStore};
use crate::config::Config;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS entries (
        id           BIGSERIAL PRIMARY KEY,
        order_number BIGINT NOT NULL,
        name         TEXT,
        phone_number TEXT,
        message      TEXT NOT NULL,
        status       TEXT NOT NULL DEFAULT 'New',
        created_at   TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS entries_created_at_idx ON entries (created_at DESC, id DESC)",
    "CREATE INDEX IF NOT EXISTS entries_status_idx ON entries (status)",
    r#"
    CREATE TABLE IF NOT EXISTS order_counters (
        day         DATE PRIMARY KEY,
        last_number BIGINT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS store_status (
        id           SMALLINT PRIMARY KEY CHECK (id = 1),
        store_closed BOOLEAN NOT NULL DEFAULT FALSE,
        notes        TEXT NOT NULL DEFAULT ''
    )
    "#,
];

const ENTRY_COLUMNS: &str = "id, order_number, name, phone_number, message, status, created_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect a pool sized by `config` and make sure the tables exist
    pub async fn connect(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(config.database_acquire_timeout)
            .connect(&config.database_url)
            .await?;
        let store = Self::from_pool(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Idempotent `CREATE ... IF NOT EXISTS` for every table and index
    pub async fn ensure_schema(&self) -> Result<(), BoxError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl OrderStore for PgStore {
    fn kind(&self) -> &'static str {
        "postgres"
    }

    async fn advance_order_counter(&self, day: NaiveDate) -> Result<Option<i64>, BoxError> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"
            UPDATE order_counters
            SET last_number = last_number + 1
            WHERE day = $1
            RETURNING last_number
            "#,
        )
        .bind(day)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| r.0))
    }

    async fn claim_order_number(&self, day: NaiveDate, seed: i64) -> Result<i64, BoxError> {
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO order_counters (day, last_number)
            VALUES ($1, $2)
            ON CONFLICT (day) DO UPDATE SET
                last_number = order_counters.last_number + 1
            RETURNING last_number
            "#,
        )
        .bind(day)
        .bind(seed)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.0)
    }

    async fn max_order_number_on(&self, day: NaiveDate, tz: Tz) -> Result<Option<i64>, BoxError> {
        let row = sqlx::query(
            r#"
            SELECT MAX(order_number) AS max_order_number
            FROM entries
            WHERE (created_at AT TIME ZONE $2)::date = $1
            "#,
        )
        .bind(day)
        .bind(tz.name())
        .fetch_one(&self.pool)
        .await?;

        match row.try_get::<Option<i64>, _>("max_order_number") {
            Ok(max) => Ok(max),
            Err(e) => {
                tracing::warn!(
                    %day,
                    error = %e,
                    "Unreadable max order number, starting the day over"
                );
                Ok(None)
            }
        }
    }

    async fn insert_entry(&self, entry: NewEntry) -> Result<Entry, BoxError> {
        let row: EntryRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO entries (order_number, name, phone_number, message, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ENTRY_COLUMNS}
            "#
        ))
        .bind(entry.order_number)
        .bind(&entry.name)
        .bind(&entry.phone_number)
        .bind(&entry.message)
        .bind(&entry.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn list_entries(&self, status: Option<&str>) -> Result<Vec<Entry>, BoxError> {
        let rows: Vec<EntryRow> = if let Some(status) = status {
            sqlx::query_as(&format!(
                r#"
                SELECT {ENTRY_COLUMNS}
                FROM entries
                WHERE status = $1
                ORDER BY created_at DESC, id DESC
                "#
            ))
            .bind(status)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as(&format!(
                r#"
                SELECT {ENTRY_COLUMNS}
                FROM entries
                ORDER BY created_at DESC, id DESC
                "#
            ))
            .fetch_all(&self.pool)
            .await?
        };
        Ok(rows.into_iter().map(Entry::from).collect())
    }

    async fn update_entry_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<Entry>, BoxError> {
        let row: Option<EntryRow> = sqlx::query_as(&format!(
            r#"
            UPDATE entries
            SET status = $1
            WHERE id = $2
            RETURNING {ENTRY_COLUMNS}
            "#
        ))
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Entry::from))
    }

    async fn load_store_status(&self) -> Result<StoreStatus, BoxError> {
        // The no-op DO UPDATE makes RETURNING yield the existing row too.
        let status: StoreStatus = sqlx::query_as(
            r#"
            INSERT INTO store_status (id, store_closed, notes)
            VALUES (1, FALSE, '')
            ON CONFLICT (id) DO UPDATE SET id = store_status.id
            RETURNING store_closed, notes
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(status)
    }

    async fn save_store_status(&self, status: &StoreStatus) -> Result<StoreStatus, BoxError> {
        let saved: StoreStatus = sqlx::query_as(
            r#"
            INSERT INTO store_status (id, store_closed, notes)
            VALUES (1, $1, $2)
            ON CONFLICT (id) DO UPDATE SET
                store_closed = EXCLUDED.store_closed,
                notes = EXCLUDED.notes
            RETURNING store_closed, notes
            "#,
        )
        .bind(status.store_closed)
        .bind(&status.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }
}
