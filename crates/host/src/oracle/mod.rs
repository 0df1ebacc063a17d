//! Catalog-backed implementations of the engine's oracle traits.
//!
//! The catalog is immutable and shared between [`WorldTargets`] and
//! [`CatalogMiningRules`]; the hotbar is the only mutable host state.
mod inventory;
mod mining;
mod targets;

pub use inventory::HotbarInventory;
pub use mining::CatalogMiningRules;
pub use targets::WorldTargets;
