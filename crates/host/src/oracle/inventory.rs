//! In-memory hotbar that applies engine commands.
use autotool_core::{HOTBAR_SIZE, HotbarSlot, InventoryOracle, ToolCommand, ToolStack};

/// Nine stacks, the selected slot and the slot to return to on release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HotbarInventory {
    slots: [ToolStack; HOTBAR_SIZE],
    selected: HotbarSlot,
    previous: Option<HotbarSlot>,
    action_held: bool,
}

impl HotbarInventory {
    pub fn new(slots: [ToolStack; HOTBAR_SIZE], selected: HotbarSlot) -> Self {
        Self {
            slots,
            selected,
            previous: None,
            action_held: false,
        }
    }

    pub fn empty() -> Self {
        Self::new([ToolStack::EMPTY; HOTBAR_SIZE], HotbarSlot::FIRST)
    }

    pub fn set_slot(&mut self, slot: HotbarSlot, stack: ToolStack) {
        self.slots[slot.index()] = stack;
    }

    pub fn selected(&self) -> HotbarSlot {
        self.selected
    }

    /// Manual selection by the player; leaves the restore record alone.
    pub fn select(&mut self, slot: HotbarSlot) {
        self.selected = slot;
    }

    pub fn action_held(&self) -> bool {
        self.action_held
    }

    pub fn set_action_held(&mut self, held: bool) {
        self.action_held = held;
    }

    /// Applies one engine command to the hotbar.
    pub fn apply(&mut self, command: ToolCommand) {
        match command {
            ToolCommand::SwapToSlot {
                slot,
                restore_after,
            } => {
                // The record keeps the slot held before the first auto-switch
                if restore_after {
                    self.previous.get_or_insert(self.selected);
                } else {
                    self.previous = None;
                }
                self.selected = slot;
            }
            ToolCommand::RestorePreviousSlot => {
                if let Some(previous) = self.previous.take() {
                    self.selected = previous;
                }
            }
            ToolCommand::CancelCurrentAction => self.action_held = false,
        }
    }
}

impl Default for HotbarInventory {
    fn default() -> Self {
        Self::empty()
    }
}

impl InventoryOracle for HotbarInventory {
    fn slot(&self, slot: HotbarSlot) -> ToolStack {
        self.slots[slot.index()]
    }

    fn main_hand(&self) -> ToolStack {
        self.slots[self.selected.index()]
    }

    fn previous_slot(&self) -> Option<HotbarSlot> {
        self.previous
    }
}
