//! Item and block definitions.
//!
//! The catalog is host data: it maps human-readable names to the opaque ids
//! the core works with, and carries the tool classes and tiers the host's
//! mining rules need. None of it is visible to the scorer directly.
use autotool_core::{BlockId, ItemId, TargetCategory, TargetDescriptor, ToolCategory, ToolStack};

/// Host tool class; decides which blocks a tool is effective on.
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
pub enum ToolKind {
    #[default]
    None,
    Pickaxe,
    Axe,
    Shovel,
    Hoe,
    Sword,
    Shears,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: ToolCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: ToolKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tier: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_damage: u32,
    /// Mining speed on blocks this tool is effective on.
    #[cfg_attr(feature = "serde", serde(default = "default_speed"))]
    pub speed: f32,
}

impl ItemDefinition {
    /// A fresh, unenchanted stack of this item.
    pub fn stack(&self) -> ToolStack {
        ToolStack::new(self.id, self.category)
            .with_durability(0, self.max_damage)
            .with_tier(self.tier)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockDefinition {
    pub id: BlockId,
    pub name: String,
    pub hardness: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: TargetCategory,
    /// Tool class that is effective on this block; `none` means no tool is.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tool: ToolKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_tier: u8,
    /// Member of the default silk-touch block set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub silk_touch_default: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unbreakable: bool,
}

impl BlockDefinition {
    pub fn descriptor(&self) -> TargetDescriptor {
        TargetDescriptor::new(self.id, self.hardness).with_category(self.category)
    }
}

#[cfg(feature = "serde")]
fn default_speed() -> f32 {
    1.0
}

/// Errors raised by [`Catalog::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("item '{0}' uses the reserved empty-hand id 0")]
    ReservedItemId(String),
    #[error("duplicate item id {0}")]
    DuplicateItemId(ItemId),
    #[error("duplicate item name '{0}'")]
    DuplicateItemName(String),
    #[error("duplicate block id {0}")]
    DuplicateBlockId(BlockId),
    #[error("duplicate block name '{0}'")]
    DuplicateBlockName(String),
}

/// Item and block definitions keyed by id and name.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub items: Vec<ItemDefinition>,
    pub blocks: Vec<BlockDefinition>,
}

impl Catalog {
    pub fn new(items: Vec<ItemDefinition>, blocks: Vec<BlockDefinition>) -> Self {
        Self { items, blocks }
    }

    pub fn item(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn block(&self, id: BlockId) -> Option<&BlockDefinition> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn block_by_name(&self, name: &str) -> Option<&BlockDefinition> {
        self.blocks.iter().find(|block| block.name == name)
    }

    /// Blocks flagged as default silk-touch targets.
    pub fn silk_touch_defaults(&self) -> Vec<BlockId> {
        self.blocks
            .iter()
            .filter(|block| block.silk_touch_default)
            .map(|block| block.id)
            .collect()
    }

    /// Rejects duplicate ids or names and items using the empty-hand id.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (index, item) in self.items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(CatalogError::ReservedItemId(item.name.clone()));
            }
            let earlier = &self.items[..index];
            if earlier.iter().any(|other| other.id == item.id) {
                return Err(CatalogError::DuplicateItemId(item.id));
            }
            if earlier.iter().any(|other| other.name == item.name) {
                return Err(CatalogError::DuplicateItemName(item.name.clone()));
            }
        }

        for (index, block) in self.blocks.iter().enumerate() {
            let earlier = &self.blocks[..index];
            if earlier.iter().any(|other| other.id == block.id) {
                return Err(CatalogError::DuplicateBlockId(block.id));
            }
            if earlier.iter().any(|other| other.name == block.name) {
                return Err(CatalogError::DuplicateBlockName(block.name.clone()));
            }
        }

        Ok(())
    }

    /// Small catalog covering every scoring path: tiered diggers, swords,
    /// shears, silk-touch-only blocks, an ender chest, bamboo, bedrock and
    /// instant-break plants.
    pub fn builtin() -> Self {
        use TargetCategory::{EdgeHarvestPlant, EnderChest, Generic};
        use ToolCategory::{Digger, Shears, Sword};

        let item = |id, name: &str, category, kind, tier, max_damage, speed| ItemDefinition {
            id: ItemId(id),
            name: name.to_string(),
            category,
            kind,
            tier,
            max_damage,
            speed,
        };
        let items = vec![
            item(1, "wooden_pickaxe", Digger, ToolKind::Pickaxe, 0, 59, 2.0),
            item(2, "stone_pickaxe", Digger, ToolKind::Pickaxe, 1, 131, 4.0),
            item(3, "iron_pickaxe", Digger, ToolKind::Pickaxe, 2, 250, 6.0),
            item(4, "diamond_pickaxe", Digger, ToolKind::Pickaxe, 3, 1561, 8.0),
            item(5, "netherite_pickaxe", Digger, ToolKind::Pickaxe, 4, 2031, 9.0),
            item(6, "wooden_axe", Digger, ToolKind::Axe, 0, 59, 2.0),
            item(7, "iron_axe", Digger, ToolKind::Axe, 2, 250, 6.0),
            item(8, "diamond_axe", Digger, ToolKind::Axe, 3, 1561, 8.0),
            item(9, "iron_shovel", Digger, ToolKind::Shovel, 2, 250, 6.0),
            item(10, "diamond_shovel", Digger, ToolKind::Shovel, 3, 1561, 8.0),
            item(11, "iron_hoe", Digger, ToolKind::Hoe, 2, 250, 6.0),
            item(12, "wooden_sword", Sword, ToolKind::Sword, 0, 59, 1.5),
            item(13, "iron_sword", Sword, ToolKind::Sword, 2, 250, 1.5),
            item(14, "diamond_sword", Sword, ToolKind::Sword, 3, 1561, 1.5),
            item(15, "shears", Shears, ToolKind::Shears, 0, 238, 5.0),
            item(16, "cobblestone", ToolCategory::None, ToolKind::None, 0, 0, 1.0),
            item(17, "torch", ToolCategory::None, ToolKind::None, 0, 0, 1.0),
        ];

        let block = |id, name: &str, hardness, category, tool, required_tier| BlockDefinition {
            id: BlockId(id),
            name: name.to_string(),
            hardness,
            category,
            tool,
            required_tier,
            silk_touch_default: false,
            unbreakable: false,
        };
        let silk_touch = |mut block: BlockDefinition| {
            block.silk_touch_default = true;
            block
        };
        let blocks = vec![
            block(1, "stone", 1.5, Generic, ToolKind::Pickaxe, 0),
            block(2, "cobblestone", 2.0, Generic, ToolKind::Pickaxe, 0),
            block(3, "iron_ore", 3.0, Generic, ToolKind::Pickaxe, 1),
            block(4, "diamond_ore", 3.0, Generic, ToolKind::Pickaxe, 2),
            block(5, "obsidian", 50.0, Generic, ToolKind::Pickaxe, 3),
            block(6, "oak_log", 2.0, Generic, ToolKind::Axe, 0),
            block(7, "oak_planks", 2.0, Generic, ToolKind::Axe, 0),
            block(8, "dirt", 0.5, Generic, ToolKind::Shovel, 0),
            block(9, "sand", 0.5, Generic, ToolKind::Shovel, 0),
            silk_touch(block(10, "glass", 0.3, Generic, ToolKind::None, 0)),
            silk_touch(block(11, "glass_pane", 0.3, Generic, ToolKind::None, 0)),
            silk_touch(block(12, "ice", 0.5, Generic, ToolKind::Pickaxe, 0)),
            silk_touch(block(13, "packed_ice", 0.5, Generic, ToolKind::Pickaxe, 0)),
            silk_touch(block(14, "sea_lantern", 0.3, Generic, ToolKind::None, 0)),
            block(15, "ender_chest", 22.5, EnderChest, ToolKind::Pickaxe, 0),
            block(16, "bamboo", 1.0, EdgeHarvestPlant, ToolKind::Axe, 0),
            block(17, "bamboo_sapling", 1.0, EdgeHarvestPlant, ToolKind::Axe, 0),
            block(18, "white_wool", 0.8, Generic, ToolKind::Shears, 0),
            block(19, "oak_leaves", 0.2, Generic, ToolKind::Shears, 0),
            block(20, "poppy", 0.0, Generic, ToolKind::None, 0),
            BlockDefinition {
                unbreakable: true,
                ..block(21, "bedrock", -1.0, Generic, ToolKind::None, 0)
            },
        ];

        Self::new(items, blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.validate(), Ok(()));
        assert!(catalog.item_by_name("wooden_axe").is_some());
        assert!(catalog.block_by_name("ender_chest").is_some());
    }

    #[test]
    fn silk_touch_defaults_cover_glass_and_ice() {
        let catalog = Catalog::builtin();
        let defaults = catalog.silk_touch_defaults();

        for name in ["glass", "glass_pane", "ice", "packed_ice", "sea_lantern"] {
            let id = catalog.block_by_name(name).map(|block| block.id);
            assert!(id.is_some_and(|id| defaults.contains(&id)), "{name}");
        }
        assert_eq!(defaults.len(), 5);
    }

    #[test]
    fn rejects_duplicates() {
        let mut catalog = Catalog::builtin();
        let mut copy = catalog.items[0].clone();
        copy.name = "another".to_string();
        catalog.items.push(copy);

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateItemId(ItemId(1)))
        );
    }

    #[test]
    fn rejects_empty_hand_id() {
        let mut catalog = Catalog::builtin();
        catalog.items[0].id = ItemId::EMPTY;

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::ReservedItemId("wooden_pickaxe".to_string()))
        );
    }

    #[test]
    fn stack_starts_undamaged() {
        let catalog = Catalog::builtin();
        let stack = catalog.item_by_name("iron_pickaxe").map(ItemDefinition::stack);

        assert_eq!(
            stack,
            Some(
                ToolStack::new(ItemId(3), ToolCategory::Digger)
                    .with_durability(0, 250)
                    .with_tier(2)
            )
        );
    }
}
