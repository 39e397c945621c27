use anyhow::Result;
use figment::providers::{Env, Serialized};
use figment::Figment;
use jeeps::inventory::{AppConfig, InventoryService};
use jeeps::store::{seed, InventoryStore, MemoryStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<InventoryService>,
    pub config: AppConfig,
}

impl AppState {
    /// Build state from environment configuration and provision seed data.
    pub async fn from_env() -> Result<Self> {
        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Env::prefixed("JEEPS_").split("__"))
            .extract()?;

        let records = match &config.seed.path {
            Some(path) => seed::load_file(path)?,
            None => seed::default_inventory(),
        };

        let store: Arc<dyn InventoryStore> = Arc::new(MemoryStore::new());
        seed::provision(store.as_ref(), records).await?;

        Ok(Self {
            inventory: Arc::new(InventoryService::new(store)),
            config,
        })
    }

    /// Build state around an existing store. Used by tests.
    pub fn with_store(store: Arc<dyn InventoryStore>) -> Self {
        Self {
            inventory: Arc::new(InventoryService::new(store)),
            config: AppConfig::default(),
        }
    }
}
