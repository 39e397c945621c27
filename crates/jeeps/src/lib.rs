//! Vehicle inventory lookup library.
//!
//! Provides the entity model ([`inventory::Jeep`], [`inventory::JeepModel`]),
//! the request validation layer ([`inventory::validate`]), the lookup service
//! ([`inventory::InventoryService`]), and the storage seam ([`store`]).

pub mod inventory;
pub mod store;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
