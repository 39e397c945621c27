//! Seed provisioning for the inventory store.
//!
//! The dataset is loaded once at startup, before the service accepts
//! requests; the store is read-only afterwards.

use super::InventoryStore;
use crate::inventory::{Jeep, JeepModel};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Built-in seed dataset covering every model line.
pub fn default_inventory() -> Vec<Jeep> {
    vec![
        Jeep::new(JeepModel::Wrangler, "Sport", 2, 17, price(2_847_500)),
        Jeep::new(JeepModel::Wrangler, "Sport", 4, 17, price(3_197_500)),
        Jeep::new(JeepModel::Wrangler, "Sahara", 4, 18, price(3_877_500)),
        Jeep::new(JeepModel::Wrangler, "Rubicon", 4, 17, price(4_247_500)),
        Jeep::new(JeepModel::Cherokee, "Latitude", 4, 17, price(2_745_500)),
        Jeep::new(JeepModel::Cherokee, "Trailhawk", 4, 17, price(3_452_000)),
        Jeep::new(JeepModel::GrandCherokee, "Laredo", 4, 18, price(3_852_500)),
        Jeep::new(JeepModel::GrandCherokee, "Summit", 4, 20, price(5_722_500)),
        Jeep::new(JeepModel::Compass, "Sport", 4, 16, price(2_404_500)),
        Jeep::new(JeepModel::Compass, "Latitude", 4, 17, price(2_661_000)),
        Jeep::new(JeepModel::Renegade, "Sport", 4, 16, price(2_303_500)),
        Jeep::new(JeepModel::Renegade, "Trailhawk", 4, 17, price(2_877_000)),
        Jeep::new(JeepModel::Gladiator, "Sport", 4, 17, price(3_456_500)),
        Jeep::new(JeepModel::Gladiator, "Mojave", 4, 17, price(4_428_000)),
    ]
}

/// Load a seed dataset from a JSON file (an array of records).
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Jeep>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let records: Vec<Jeep> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    Ok(records)
}

/// Insert all records into the store, returning the number provisioned.
pub async fn provision(store: &dyn InventoryStore, records: Vec<Jeep>) -> Result<usize> {
    let count = records.len();
    for record in &records {
        store.insert(record).await?;
    }
    tracing::info!(count, "provisioned inventory seed data");
    Ok(count)
}
