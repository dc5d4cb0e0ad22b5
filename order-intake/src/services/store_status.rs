//! Store status gate: the guarded open/closed singleton

use std::sync::Arc;

use shared::error::AppError;
use shared::models::{StoreStatus, StoreStatusUpdate};

use crate::auth::CredentialCheck;
use crate::db::OrderStore;
use crate::error::ServiceResult;

#[derive(Clone)]
pub struct StoreStatusGate {
    store: Arc<dyn OrderStore>,
    credentials: Arc<dyn CredentialCheck>,
}

impl StoreStatusGate {
    pub fn new(store: Arc<dyn OrderStore>, credentials: Arc<dyn CredentialCheck>) -> Self {
        Self { store, credentials }
    }

    /// Current status; the row is created with defaults on first read
    pub async fn get(&self, presented: Option<&str>) -> ServiceResult<StoreStatus> {
        self.check(presented)?;
        Ok(self.store.load_store_status().await?)
    }

    /// Overwrite the status entirely; absent notes become `""`
    pub async fn set(
        &self,
        presented: Option<&str>,
        update: &StoreStatusUpdate,
    ) -> ServiceResult<StoreStatus> {
        self.check(presented)?;
        let status = self
            .store
            .save_store_status(&StoreStatus::from_update(update))
            .await?;
        tracing::info!(store_closed = status.store_closed, "Store status updated");
        Ok(status)
    }

    /// Capability check alone, without touching the datastore
    pub fn check(&self, presented: Option<&str>) -> Result<(), AppError> {
        if self.credentials.authorize(presented) {
            Ok(())
        } else {
            tracing::warn!(
                key_present = presented.is_some(),
                "Store status request rejected"
            );
            Err(AppError::unauthorized())
        }
    }
}
