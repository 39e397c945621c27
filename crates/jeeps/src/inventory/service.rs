use super::types::{Jeep, JeepModel};
use crate::store::InventoryStore;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Service for vehicle inventory lookups
pub struct InventoryService {
    store: Arc<dyn InventoryStore>,
}

impl InventoryService {
    /// Create a new inventory service
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    /// Fetch all records matching the given model and trim exactly.
    ///
    /// An empty result is a normal outcome, not an error; an `Err` signals
    /// an infrastructure fault in the store. HTTP semantics are decided by
    /// the caller.
    pub async fn fetch(&self, model: JeepModel, trim: &str) -> Result<Vec<Jeep>> {
        tracing::debug!(%model, trim, "fetching jeeps");
        self.store
            .find_by_model_and_trim(model, trim)
            .await
            .context("Failed to fetch jeeps")
    }
}
