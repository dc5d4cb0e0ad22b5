//! Application state

use std::sync::Arc;

use chrono_tz::Tz;

use crate::auth::{CredentialCheck, SharedSecret};
use crate::config::{Config, MEMORY_DATABASE_URL};
use crate::db::OrderStore;
use crate::db::memory::MemoryStore;
use crate::db::postgres::PgStore;
use crate::error::BoxError;
use crate::services::{EntryRepository, OrderNumberAllocator, StoreStatusGate};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Entry create/list/update
    pub entries: EntryRepository,
    /// Guarded store status singleton
    pub store_status: StoreStatusGate,
    /// Datastore kind, for logs and health
    pub store_kind: &'static str,
}

impl AppState {
    /// Connect the configured datastore and wire the services
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let store: Arc<dyn OrderStore> = if config.database_url == MEMORY_DATABASE_URL {
            tracing::warn!("Using the in-memory datastore; entries are lost on restart");
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(PgStore::connect(config).await?)
        };

        if config.store_status_api_key_is_fallback {
            tracing::warn!(
                "STORE_STATUS_API_KEY not set, using the insecure development fallback key"
            );
        }

        Ok(Self::with_store(
            store,
            Arc::new(SharedSecret::new(config.store_status_api_key.clone())),
            config.order_timezone,
        ))
    }

    /// Wire the services over an existing datastore
    pub fn with_store(
        store: Arc<dyn OrderStore>,
        credentials: Arc<dyn CredentialCheck>,
        tz: Tz,
    ) -> Self {
        let allocator = OrderNumberAllocator::new(store.clone(), tz);
        Self {
            entries: EntryRepository::new(store.clone(), allocator),
            store_status: StoreStatusGate::new(store.clone(), credentials),
            store_kind: store.kind(),
        }
    }
}
