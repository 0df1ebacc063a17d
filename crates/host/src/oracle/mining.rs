//! Tool-versus-block rules derived from the catalog.
use std::sync::Arc;

use autotool_content::{BlockDefinition, Catalog, ItemDefinition, ToolKind};
use autotool_core::{MiningOracle, TargetDescriptor, ToolStack};

/// MiningOracle implementation: a tool is effective on a block when its kind
/// matches the block's tool class, and suitable when its tier also meets the
/// block's required tier.
pub struct CatalogMiningRules {
    catalog: Arc<Catalog>,
}

impl CatalogMiningRules {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    fn lookup(
        &self,
        stack: &ToolStack,
        target: &TargetDescriptor,
    ) -> Option<(&ItemDefinition, &BlockDefinition)> {
        let item = self.catalog.item(stack.item)?;
        let block = self.catalog.block(target.block)?;
        Some((item, block))
    }
}

fn effective(item: &ItemDefinition, block: &BlockDefinition) -> bool {
    block.tool != ToolKind::None && item.kind == block.tool
}

impl MiningOracle for CatalogMiningRules {
    fn is_suitable_for(&self, stack: &ToolStack, target: &TargetDescriptor) -> bool {
        self.lookup(stack, target).is_some_and(|(item, block)| {
            effective(item, block) && stack.material_tier >= block.required_tier
        })
    }

    fn speed_multiplier(&self, stack: &ToolStack, target: &TargetDescriptor) -> f32 {
        match self.lookup(stack, target) {
            Some((item, block)) if effective(item, block) => item.speed,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> (CatalogMiningRules, Arc<Catalog>) {
        let catalog = Arc::new(Catalog::builtin());
        (CatalogMiningRules::new(catalog.clone()), catalog)
    }

    fn stack(catalog: &Catalog, name: &str) -> ToolStack {
        catalog.item_by_name(name).unwrap().stack()
    }

    fn target(catalog: &Catalog, name: &str) -> TargetDescriptor {
        catalog.block_by_name(name).unwrap().descriptor()
    }

    #[test]
    fn tier_gates_suitability() {
        let (rules, catalog) = rules();
        let diamond_ore = target(&catalog, "diamond_ore");

        assert!(!rules.is_suitable_for(&stack(&catalog, "stone_pickaxe"), &diamond_ore));
        assert!(rules.is_suitable_for(&stack(&catalog, "iron_pickaxe"), &diamond_ore));
        assert!(!rules.is_suitable_for(&stack(&catalog, "diamond_axe"), &diamond_ore));
    }

    #[test]
    fn speed_applies_only_to_matching_kind() {
        let (rules, catalog) = rules();
        let log = target(&catalog, "oak_log");

        assert_eq!(rules.speed_multiplier(&stack(&catalog, "iron_axe"), &log), 6.0);
        assert_eq!(rules.speed_multiplier(&stack(&catalog, "iron_pickaxe"), &log), 1.0);
    }

    #[test]
    fn toolless_blocks_suit_nothing() {
        let (rules, catalog) = rules();
        let glass = target(&catalog, "glass");

        for name in ["diamond_pickaxe", "diamond_axe", "shears", "diamond_sword"] {
            assert!(!rules.is_suitable_for(&stack(&catalog, name), &glass), "{name}");
        }
    }

    #[test]
    fn unknown_items_are_unsuitable() {
        let (rules, catalog) = rules();
        assert!(!rules.is_suitable_for(&ToolStack::EMPTY, &target(&catalog, "stone")));
        assert_eq!(
            rules.speed_multiplier(&ToolStack::EMPTY, &target(&catalog, "stone")),
            1.0
        );
    }
}
