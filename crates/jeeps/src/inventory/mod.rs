pub mod service;
pub mod types;
pub mod validate;

pub use service::InventoryService;
pub use types::{AppConfig, Jeep, JeepModel, SeedConfig, ServerConfig, TRIM_MAX_LENGTH};
pub use validate::{validate, ValidatedQuery, ValidationError};
