use crate::types::{HotbarSlot, ToolStack};

/// Read-only view of the hotbar.
pub trait InventoryOracle {
    fn slot(&self, slot: HotbarSlot) -> ToolStack;

    /// The stack currently held in the main hand.
    fn main_hand(&self) -> ToolStack;

    /// Slot that was selected before the last auto-switch, if one was recorded.
    ///
    /// The record belongs to the host; the core only reads it to decide
    /// whether a restore is possible.
    fn previous_slot(&self) -> Option<HotbarSlot>;
}
