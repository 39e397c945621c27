use super::InventoryStore;
use crate::inventory::{Jeep, JeepModel};
use anyhow::Result;
use std::sync::RwLock;

/// In-process inventory store backed by a vector.
///
/// Surrogate ids are 1-based insertion indices, so lookup results come back
/// in insertion order. The lock is never held across an await point.
pub struct MemoryStore {
    records: RwLock<Vec<Jeep>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InventoryStore for MemoryStore {
    async fn find_by_model_and_trim(&self, model: JeepModel, trim: &str) -> Result<Vec<Jeep>> {
        let records = self
            .records
            .read()
            .map_err(|_| anyhow::anyhow!("inventory store lock poisoned"))?;

        Ok(records
            .iter()
            .filter(|j| j.model == model && j.trim_level == trim)
            .cloned()
            .collect())
    }

    async fn insert(&self, jeep: &Jeep) -> Result<Jeep> {
        let mut records = self
            .records
            .write()
            .map_err(|_| anyhow::anyhow!("inventory store lock poisoned"))?;

        let mut stored = jeep.clone();
        stored.id = Some(records.len() as u64 + 1);
        records.push(stored.clone());
        Ok(stored)
    }

    async fn count(&self) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|_| anyhow::anyhow!("inventory store lock poisoned"))?;
        Ok(records.len())
    }
}
