//! Identity and snapshot types consumed by the decision pipeline.
//!
//! Everything here is a read-only view supplied by the host for a single
//! decision. The core never mutates a [`ToolStack`] or [`TargetDescriptor`].
use core::fmt;

use strum::EnumCount;

/// Number of slots scanned for candidate tools.
pub const HOTBAR_SIZE: usize = 9;

/// Reference to an item definition owned by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl ItemId {
    /// The empty hand.
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Reference to a block definition owned by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BlockId(pub u32);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block#{}", self.0)
    }
}

/// World position of an action target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Index into the hotbar, always in `0..HOTBAR_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct HotbarSlot(u8);

impl HotbarSlot {
    pub const FIRST: Self = Self(0);

    /// Returns `None` when `index` falls outside the hotbar.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < HOTBAR_SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All hotbar slots in ascending order.
    pub fn all() -> impl Iterator<Item = HotbarSlot> {
        (0..HOTBAR_SIZE as u8).map(HotbarSlot)
    }
}

impl TryFrom<u8> for HotbarSlot {
    type Error = InvalidSlot;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        HotbarSlot::new(value).ok_or(InvalidSlot(value))
    }
}

impl From<HotbarSlot> for u8 {
    fn from(slot: HotbarSlot) -> Self {
        slot.0
    }
}

impl fmt::Display for HotbarSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// A slot index outside `0..HOTBAR_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("hotbar slot {0} is out of range (expected 0..9)")]
pub struct InvalidSlot(pub u8);

/// Closed classification of what an item can do, resolved by the host.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ToolCategory {
    /// Anything that is not a tool (blocks, food, empty hand).
    #[default]
    None,
    /// Pickaxes, axes, shovels and hoes.
    Digger,
    /// Edged tool; also harvests edge-harvestable plants.
    Sword,
    Shears,
}

/// Closed classification of targets that need special handling.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TargetCategory {
    #[default]
    Generic,
    /// Plant material that edged tools cut efficiently (bamboo and its sapling).
    EdgeHarvestPlant,
    /// Container that only drops itself when mined with silk touch.
    EnderChest,
}

/// Enchantments the scorer looks at.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Enchantment {
    Unbreaking = 0,
    Efficiency = 1,
    Mending = 2,
    Fortune = 3,
    SilkTouch = 4,
}

/// Per-enchantment levels of one stack. Absent enchantments are level 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnchantmentLevels([u8; Enchantment::COUNT]);

impl EnchantmentLevels {
    pub const NONE: Self = Self([0; Enchantment::COUNT]);

    #[inline]
    pub fn level(&self, enchantment: Enchantment) -> u8 {
        self.0[enchantment as usize]
    }

    pub fn set(&mut self, enchantment: Enchantment, level: u8) {
        self.0[enchantment as usize] = level;
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, enchantment: Enchantment, level: u8) -> Self {
        self.set(enchantment, level);
        self
    }
}

/// Snapshot of one inventory stack as seen by the scorer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolStack {
    pub item: ItemId,
    pub category: ToolCategory,
    /// Durability already used.
    pub damage: u32,
    /// Zero for items that do not wear.
    pub max_damage: u32,
    /// Material mining tier (wood 0, stone 1, iron 2, diamond 3, netherite 4).
    pub material_tier: u8,
    pub enchantments: EnchantmentLevels,
}

impl ToolStack {
    pub const EMPTY: Self = Self {
        item: ItemId::EMPTY,
        category: ToolCategory::None,
        damage: 0,
        max_damage: 0,
        material_tier: 0,
        enchantments: EnchantmentLevels::NONE,
    };

    pub fn new(item: ItemId, category: ToolCategory) -> Self {
        Self {
            item,
            category,
            ..Self::EMPTY
        }
    }

    #[must_use]
    pub fn with_durability(mut self, damage: u32, max_damage: u32) -> Self {
        self.damage = damage;
        self.max_damage = max_damage;
        self
    }

    #[must_use]
    pub fn with_tier(mut self, material_tier: u8) -> Self {
        self.material_tier = material_tier;
        self
    }

    #[must_use]
    pub fn with_enchantment(mut self, enchantment: Enchantment, level: u8) -> Self {
        self.enchantments.set(enchantment, level);
        self
    }

    /// Enchantment lookup, 0 when absent.
    #[inline]
    pub fn level(&self, enchantment: Enchantment) -> u8 {
        self.enchantments.level(enchantment)
    }

    /// Durability left before the stack breaks.
    #[inline]
    pub fn remaining_durability(&self) -> u32 {
        self.max_damage.saturating_sub(self.damage)
    }
}

/// What the action is aimed at.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetDescriptor {
    pub block: BlockId,
    /// Base hardness; below 0.1 the target breaks instantly.
    pub hardness: f32,
    pub category: TargetCategory,
}

impl TargetDescriptor {
    /// Targets softer than this are never worth a switch.
    pub const INSTANT_HARDNESS: f32 = 0.1;

    pub fn new(block: BlockId, hardness: f32) -> Self {
        Self {
            block,
            hardness,
            category: TargetCategory::Generic,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: TargetCategory) -> Self {
        self.category = category;
        self
    }

    #[inline]
    pub fn is_instant(&self) -> bool {
        self.hardness < Self::INSTANT_HARDNESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotbar_slot_rejects_out_of_range() {
        assert!(HotbarSlot::new(8).is_some());
        assert!(HotbarSlot::new(9).is_none());
        assert_eq!(HotbarSlot::try_from(12), Err(InvalidSlot(12)));
    }

    #[test]
    fn hotbar_slots_iterate_in_order() {
        let indices: Vec<usize> = HotbarSlot::all().map(HotbarSlot::index).collect();
        assert_eq!(indices, (0..HOTBAR_SIZE).collect::<Vec<_>>());
    }

    #[test]
    fn enchantment_levels_default_to_zero() {
        let stack = ToolStack::new(ItemId(3), ToolCategory::Digger)
            .with_enchantment(Enchantment::Efficiency, 5);

        assert_eq!(stack.level(Enchantment::Efficiency), 5);
        assert_eq!(stack.level(Enchantment::SilkTouch), 0);
    }

    #[test]
    fn enchantment_parses_snake_case() {
        assert_eq!("silk_touch".parse::<Enchantment>(), Ok(Enchantment::SilkTouch));
        assert_eq!("FORTUNE".parse::<Enchantment>(), Ok(Enchantment::Fortune));
    }

    #[test]
    fn remaining_durability_saturates() {
        let stack = ToolStack::new(ItemId(1), ToolCategory::Digger).with_durability(300, 250);
        assert_eq!(stack.remaining_durability(), 0);
    }
}
