//! Events consumed and commands emitted by the engine.
use arrayvec::ArrayVec;

use crate::types::{BlockPos, HotbarSlot};

/// Host notifications, strictly ordered by the host's event pump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToolEvent {
    /// The agent began acting on the target at `pos`.
    ActionStarted { pos: BlockPos },
    /// One discrete time step elapsed; `action_held` is the action signal level.
    Tick { action_held: bool },
}

/// Instructions for the host. The core never performs the swap itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToolCommand {
    /// Select `slot`; when `restore_after` is set the host records the
    /// current slot so it can be restored on release.
    SwapToSlot { slot: HotbarSlot, restore_after: bool },
    /// Return to the slot recorded before the last auto-switch.
    RestorePreviousSlot,
    /// Stop the in-progress action and release the action signal.
    CancelCurrentAction,
}

impl ToolCommand {
    pub const fn swap(slot: HotbarSlot, restore_after: bool) -> Self {
        Self::SwapToSlot {
            slot,
            restore_after,
        }
    }

    /// Returns a static string identifier for this command.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SwapToSlot { .. } => "swap_to_slot",
            Self::RestorePreviousSlot => "restore_previous_slot",
            Self::CancelCurrentAction => "cancel_current_action",
        }
    }
}

/// Commands emitted for a single event: at most a swap and a cancellation.
pub type Commands = ArrayVec<ToolCommand, 2>;
