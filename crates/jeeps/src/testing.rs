//! Test utilities for the jeeps crate.
//!
//! Provides reusable test doubles for the [`InventoryStore`] seam, used by
//! unit tests here and by the server's HTTP tests.

use crate::inventory::{Jeep, JeepModel};
use crate::store::{seed, InventoryStore, MemoryStore};
use anyhow::Result;
use std::sync::Arc;

/// Store whose every operation fails, for exercising the 500 path.
pub struct FailingStore;

#[async_trait::async_trait]
impl InventoryStore for FailingStore {
    async fn find_by_model_and_trim(&self, _model: JeepModel, _trim: &str) -> Result<Vec<Jeep>> {
        Err(anyhow::anyhow!("storage backend unavailable"))
    }

    async fn insert(&self, _jeep: &Jeep) -> Result<Jeep> {
        Err(anyhow::anyhow!("storage backend unavailable"))
    }

    async fn count(&self) -> Result<usize> {
        Err(anyhow::anyhow!("storage backend unavailable"))
    }
}

/// A memory store provisioned with the default seed dataset.
pub async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    seed::provision(store.as_ref(), seed::default_inventory())
        .await
        .expect("seeding a memory store cannot fail");
    store
}
