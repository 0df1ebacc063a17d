//! Static predicates about tools and targets.
//!
//! None of these functions look at mutable state; the host resolves item and
//! block subtypes into [`ToolCategory`] and [`TargetCategory`] tags once, and
//! everything downstream matches on the tags.
use crate::env::MiningOracle;
use crate::types::{TargetCategory, TargetDescriptor, ToolCategory, ToolStack};

/// True for anything in the tool or cutting-implement categories.
#[inline]
pub fn is_tool(stack: &ToolStack) -> bool {
    !matches!(stack.category, ToolCategory::None)
}

/// Host-supplied "this tool's tier and type can affect this target".
#[inline]
pub fn is_suitable_for<M>(mining: &M, stack: &ToolStack, target: &TargetDescriptor) -> bool
where
    M: MiningOracle + ?Sized,
{
    mining.is_suitable_for(stack, target)
}

/// Edged tool aimed at a plant that edged tools cut.
#[inline]
pub fn harvests_with_edge(stack: &ToolStack, target: &TargetDescriptor) -> bool {
    matches!(stack.category, ToolCategory::Sword)
        && matches!(target.category, TargetCategory::EdgeHarvestPlant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlockId, ItemId};

    #[test]
    fn every_tagged_category_is_a_tool() {
        for category in [ToolCategory::Digger, ToolCategory::Sword, ToolCategory::Shears] {
            assert!(is_tool(&ToolStack::new(ItemId(1), category)));
        }
        assert!(!is_tool(&ToolStack::new(ItemId(1), ToolCategory::None)));
        assert!(!is_tool(&ToolStack::EMPTY));
    }

    #[test]
    fn only_swords_harvest_plants_with_edge() {
        let bamboo = TargetDescriptor::new(BlockId(7), 1.0)
            .with_category(TargetCategory::EdgeHarvestPlant);
        let stone = TargetDescriptor::new(BlockId(1), 1.5);

        let sword = ToolStack::new(ItemId(2), ToolCategory::Sword);
        let axe = ToolStack::new(ItemId(3), ToolCategory::Digger);

        assert!(harvests_with_edge(&sword, &bamboo));
        assert!(!harvests_with_edge(&sword, &stone));
        assert!(!harvests_with_edge(&axe, &bamboo));
    }
}
