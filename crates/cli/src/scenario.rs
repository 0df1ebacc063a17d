//! Scripted hotbar and world setups for replaying event sequences.
//!
//! A scenario names its items and blocks; they are resolved against the
//! catalog when the host is built.

use std::path::Path;

use anyhow::{Context, Result};
use autotool_core::{BlockPos, Enchantment, HOTBAR_SIZE, HotbarSlot, ToolEvent};
use autotool_host::AutoToolHost;
use serde::{Deserialize, Serialize};

/// One hotbar stack by item name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSpec {
    pub item: String,
    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub enchantments: Vec<(Enchantment, u8)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub pos: BlockPos,
    pub block: String,
}

/// One scripted host action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Start acting on the block at the position.
    Start(BlockPos),
    /// One tick with the given action signal.
    Tick(bool),
    /// Several ticks with the same action signal.
    Ticks(u32, bool),
    /// Toggle the bulk-mining reentrancy guard.
    BulkMining(bool),
    /// Manual slot selection by the player.
    Select(HotbarSlot),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Stacks by slot; `None` leaves the slot empty.
    pub hotbar: Vec<Option<StackSpec>>,
    #[serde(default = "first_slot")]
    pub selected: HotbarSlot,
    #[serde(default)]
    pub blocks: Vec<PlacedBlock>,
    pub script: Vec<Step>,
}

fn first_slot() -> HotbarSlot {
    HotbarSlot::FIRST
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        if scenario.hotbar.len() > HOTBAR_SIZE {
            anyhow::bail!(
                "hotbar has {} slots, at most {} are allowed",
                scenario.hotbar.len(),
                HOTBAR_SIZE
            );
        }
        Ok(scenario)
    }

    /// Fills the host's hotbar and world from this scenario.
    pub fn install(&self, host: &mut AutoToolHost) -> Result<()> {
        for (slot, spec) in HotbarSlot::all().zip(&self.hotbar) {
            let Some(spec) = spec else {
                continue;
            };
            let mut stack = host.stack_named(&spec.item)?;
            stack.damage = spec.damage;
            for (enchantment, level) in &spec.enchantments {
                stack.enchantments.set(*enchantment, *level);
            }
            host.inventory_mut().set_slot(slot, stack);
        }
        host.inventory_mut().select(self.selected);

        for placed in &self.blocks {
            host.place_named(placed.pos, &placed.block)
                .with_context(|| format!("placing block at {}", placed.pos))?;
        }
        Ok(())
    }
}

/// Expands the script into host inputs in order.
pub fn expand(script: &[Step]) -> impl Iterator<Item = Input> + '_ {
    script.iter().flat_map(|step| {
        let (input, count) = match *step {
            Step::Start(pos) => (Input::Event(ToolEvent::ActionStarted { pos }), 1),
            Step::Tick(action_held) => (Input::Event(ToolEvent::Tick { action_held }), 1),
            Step::Ticks(count, action_held) => {
                (Input::Event(ToolEvent::Tick { action_held }), count)
            }
            Step::BulkMining(active) => (Input::BulkMining(active), 1),
            Step::Select(slot) => (Input::Select(slot), 1),
        };
        std::iter::repeat_n(input, count as usize)
    })
}

/// A single host input produced by a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Event(ToolEvent),
    BulkMining(bool),
    Select(HotbarSlot),
}
