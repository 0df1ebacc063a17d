//! Reference host for the auto-tool engine.
//!
//! Provides catalog-backed oracle implementations and [`AutoToolHost`], which
//! drives the engine with host events and applies the emitted commands to an
//! in-memory hotbar. Real hosts replace the oracles; the event loop shape
//! stays the same.
mod error;
mod host;
pub mod oracle;

pub use error::{HostError, Result};
pub use host::AutoToolHost;
pub use oracle::{CatalogMiningRules, HotbarInventory, WorldTargets};
