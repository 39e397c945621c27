pub mod memory;
pub mod seed;

pub use memory::MemoryStore;

use crate::inventory::{Jeep, JeepModel};
use anyhow::Result;

/// Storage trait for the vehicle inventory.
///
/// Implementations must return matches in surrogate-key (insertion) order so
/// that results are deterministic for a fixed dataset.
#[async_trait::async_trait]
pub trait InventoryStore: Send + Sync {
    /// Find all records matching both the model and trim columns exactly
    async fn find_by_model_and_trim(&self, model: JeepModel, trim: &str) -> Result<Vec<Jeep>>;

    /// Insert a record, assigning its surrogate id. Used by seed provisioning.
    async fn insert(&self, jeep: &Jeep) -> Result<Jeep>;

    /// Number of records in the store
    async fn count(&self) -> Result<usize>;
}
