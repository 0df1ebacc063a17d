//! Deterministic tool-selection rules shared across hosts.
//!
//! `autotool-core` decides which hotbar tool should be held the moment an
//! action starts against a target, when that switch should happen, and when
//! the held tool must be protected from breaking. Hosts feed it read-only
//! snapshots through the oracles in [`env`] and execute the
//! [`ToolCommand`]s it emits; the crate itself performs no I/O.
//!
//! Modules are organized leaf-first:
//! - [`capability`] answers "is this a tool" and "can it affect this target"
//! - [`scoring`] maps a candidate and a target to a comparable [`ToolScore`]
//! - [`selection`] scans the hotbar and decides whether a switch is warranted
//! - [`switch`] defers and commits switches and restores on release
//! - [`durability`] guards worn-out tools
//! - [`engine`] composes them behind the two event entry points
pub mod capability;
pub mod command;
pub mod config;
pub mod durability;
pub mod engine;
pub mod env;
pub mod error;
pub mod scoring;
pub mod selection;
pub mod switch;
pub mod types;

pub use capability::{harvests_with_edge, is_suitable_for, is_tool};
pub use command::{Commands, ToolCommand, ToolEvent};
pub use config::{AutoToolConfig, EnchantPreference, ListMode};
pub use durability::DurabilityGuard;
pub use engine::{AutoTool, Decision, SkipReason};
pub use env::{Env, InventoryOracle, MiningOracle, OracleError, TargetOracle, ToolEnv};
pub use error::ConfigError;
pub use scoring::{ScoreParams, ToolScore, score};
pub use selection::{
    ListFilter, Selection, SelectionPolicy, SlotScan, SwitchReason, select_best_slot,
};
pub use switch::{PendingSwitch, ReleaseTracker, SwitchState, SwitchStateMachine, TickInput};
pub use types::{
    BlockId, BlockPos, Enchantment, EnchantmentLevels, HOTBAR_SIZE, HotbarSlot, ItemId,
    TargetCategory, TargetDescriptor, ToolCategory, ToolStack,
};
