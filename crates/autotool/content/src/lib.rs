//! Data-driven item and block catalogs plus settings loaders.
//!
//! The catalog carries the host-side knowledge the selection engine treats
//! as opaque: names, tool classes, material tiers and mining speeds. Loaders
//! read catalogs from RON and user settings from TOML, resolving item and
//! block names into the ids the core works with.
//!
//! Content is consumed by host oracles and never appears in engine state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{BlockDefinition, Catalog, CatalogError, ItemDefinition, ToolKind};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, SettingsLoader, SettingsSpec};
