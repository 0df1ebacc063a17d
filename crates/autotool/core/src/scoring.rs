//! Tool fitness scoring.
//!
//! [`score`] maps one candidate and one target to a comparable [`ToolScore`].
//! It is a pure function: the selector calls it once per hotbar slot plus once
//! for the held stack and compares the results, so identical inputs must
//! always produce identical outputs.
//!
//! # Score Formula
//!
//! ```text
//! score = speed_multiplier × 1000
//!       + unbreaking + efficiency + mending
//!       + preferred bonus enchantment (fortune | silk touch | nothing)
//!       + [edged tool on edge-harvest plant] 9000 + material_tier × 1000
//! ```
//!
//! Effectiveness dominates: an enchantment level can never outweigh a
//! difference in mining speed.
use crate::capability::{harvests_with_edge, is_suitable_for, is_tool};
use crate::config::{AutoToolConfig, EnchantPreference};
use crate::env::MiningOracle;
use crate::types::{BlockId, Enchantment, TargetCategory, TargetDescriptor, ToolStack};

/// Weight applied to the host's speed multiplier.
pub const EFFECTIVENESS_WEIGHT: f64 = 1000.0;
/// Flat bonus for edged tools on edge-harvest plants.
pub const EDGE_HARVEST_BONUS: f64 = 9000.0;
/// Per-tier bonus for edged tools on edge-harvest plants.
pub const EDGE_HARVEST_TIER_WEIGHT: f64 = 1000.0;

/// Enchantments that always count towards the score.
const ALWAYS_COUNTED: [Enchantment; 3] = [
    Enchantment::Unbreaking,
    Enchantment::Efficiency,
    Enchantment::Mending,
];

/// Comparable fitness of a tool for a target. Negative means ineligible.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ToolScore(f64);

impl ToolScore {
    pub const INELIGIBLE: Self = Self(-1.0);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_eligible(self) -> bool {
        self.0 >= 0.0
    }

    /// Strict comparison; equal scores never displace each other.
    #[inline]
    pub fn beats(self, other: ToolScore) -> bool {
        self.0 > other.0
    }
}

impl Default for ToolScore {
    fn default() -> Self {
        Self::INELIGIBLE
    }
}

/// Settings that shape scoring for one decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreParams<'a> {
    pub preference: EnchantPreference,
    /// Ender chests require silk touch.
    pub silk_touch_for_ender_chest: bool,
    /// Blocks any silk-touch tool may target regardless of suitability.
    pub silk_touch_blocks: &'a [BlockId],
}

impl<'a> ScoreParams<'a> {
    pub fn from_config(config: &'a AutoToolConfig) -> Self {
        Self {
            preference: config.prefer,
            silk_touch_for_ender_chest: config.silk_touch_for_ender_chest,
            silk_touch_blocks: &config.silk_touch_blocks,
        }
    }

    /// The bonus enchantment selected by the preference, if any.
    pub fn preferred_enchantment(&self) -> Option<Enchantment> {
        match self.preference {
            EnchantPreference::None => None,
            EnchantPreference::Fortune => Some(Enchantment::Fortune),
            EnchantPreference::SilkTouch => Some(Enchantment::SilkTouch),
        }
    }
}

/// Scores `stack` against `target`.
///
/// Disqualifiers, checked in order:
/// 1. `eligible(stack)` is false (e.g. the durability guard retired it)
/// 2. the stack is not a tool
/// 3. the tool is unsuitable, unless it carries silk touch and the target is
///    in the silk-touch block set, or it is an edged tool on an edge-harvest plant
/// 4. the target breaks instantly
/// 5. the target is an ender chest, the ender-chest guard is on, and the tool
///    lacks silk touch
pub fn score<M, F>(
    stack: &ToolStack,
    target: &TargetDescriptor,
    params: &ScoreParams<'_>,
    mining: &M,
    eligible: F,
) -> ToolScore
where
    M: MiningOracle + ?Sized,
    F: Fn(&ToolStack) -> bool,
{
    if !eligible(stack) || !is_tool(stack) {
        return ToolScore::INELIGIBLE;
    }

    let has_silk_touch = stack.level(Enchantment::SilkTouch) > 0;
    let exempt_by_block = has_silk_touch && params.silk_touch_blocks.contains(&target.block);
    let edge_harvest = harvests_with_edge(stack, target);

    if !is_suitable_for(mining, stack, target) && !exempt_by_block && !edge_harvest {
        return ToolScore::INELIGIBLE;
    }

    if target.is_instant() {
        return ToolScore::INELIGIBLE;
    }

    if params.silk_touch_for_ender_chest
        && matches!(target.category, TargetCategory::EnderChest)
        && !has_silk_touch
    {
        return ToolScore::INELIGIBLE;
    }

    let mut value = f64::from(mining.speed_multiplier(stack, target)) * EFFECTIVENESS_WEIGHT;

    value += ALWAYS_COUNTED
        .iter()
        .map(|&enchantment| f64::from(stack.level(enchantment)))
        .sum::<f64>();

    if let Some(enchantment) = params.preferred_enchantment() {
        value += f64::from(stack.level(enchantment));
    }

    if edge_harvest {
        value += EDGE_HARVEST_BONUS + f64::from(stack.material_tier) * EDGE_HARVEST_TIER_WEIGHT;
    }

    ToolScore(value)
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::tests::FixedMining;
    use super::*;
    use crate::types::{ItemId, ToolCategory};

    fn tool_category() -> impl Strategy<Value = ToolCategory> {
        prop_oneof![
            Just(ToolCategory::Digger),
            Just(ToolCategory::Sword),
            Just(ToolCategory::Shears),
        ]
    }

    fn target_category() -> impl Strategy<Value = TargetCategory> {
        prop_oneof![
            Just(TargetCategory::Generic),
            Just(TargetCategory::EdgeHarvestPlant),
            Just(TargetCategory::EnderChest),
        ]
    }

    fn preference() -> impl Strategy<Value = EnchantPreference> {
        prop_oneof![
            Just(EnchantPreference::None),
            Just(EnchantPreference::Fortune),
            Just(EnchantPreference::SilkTouch),
        ]
    }

    prop_compose! {
        fn stack_with(category: ToolCategory)(
            item in 1u32..64,
            tier in 0u8..5,
            levels in proptest::array::uniform5(0u8..6),
        ) -> ToolStack {
            let mut stack = ToolStack::new(ItemId(item), category).with_tier(tier);
            for (enchantment, level) in [
                Enchantment::Unbreaking,
                Enchantment::Efficiency,
                Enchantment::Mending,
                Enchantment::Fortune,
                Enchantment::SilkTouch,
            ]
            .into_iter()
            .zip(levels)
            {
                stack.enchantments.set(enchantment, level);
            }
            stack
        }
    }

    proptest! {
        #[test]
        fn non_tools_are_always_ineligible(
            stack in stack_with(ToolCategory::None),
            hardness in 0.0f32..50.0,
            category in target_category(),
            preference in preference(),
            suitable in any::<bool>(),
        ) {
            let target = TargetDescriptor::new(BlockId(1), hardness).with_category(category);
            let params = ScoreParams {
                preference,
                silk_touch_for_ender_chest: false,
                silk_touch_blocks: &[BlockId(1)],
            };
            let mining = FixedMining { suitable, speed: 4.0 };

            prop_assert_eq!(
                score(&stack, &target, &params, &mining, |_| true),
                ToolScore::INELIGIBLE
            );
        }

        #[test]
        fn soft_targets_are_always_ineligible(
            category in tool_category(),
            seed in stack_with(ToolCategory::Digger),
            hardness in 0.0f32..0.1,
            preference in preference(),
        ) {
            let stack = ToolStack { category, ..seed };
            let target = TargetDescriptor::new(BlockId(2), hardness);
            let params = ScoreParams {
                preference,
                silk_touch_for_ender_chest: true,
                silk_touch_blocks: &[],
            };
            let mining = FixedMining { suitable: true, speed: 8.0 };

            prop_assert!(!score(&stack, &target, &params, &mining, |_| true).is_eligible());
        }

        #[test]
        fn preferred_enchantment_is_monotonic(
            seed in stack_with(ToolCategory::Digger),
            preference in preference(),
            bump in 1u8..5,
        ) {
            let target = TargetDescriptor::new(BlockId(3), 3.0);
            let params = ScoreParams {
                preference,
                silk_touch_for_ender_chest: false,
                silk_touch_blocks: &[],
            };
            let mining = FixedMining { suitable: true, speed: 6.0 };

            for enchantment in [Enchantment::Fortune, Enchantment::SilkTouch] {
                let raised = seed.with_enchantment(enchantment, seed.level(enchantment) + bump);
                let before = score(&seed, &target, &params, &mining, |_| true);
                let after = score(&raised, &target, &params, &mining, |_| true);

                if params.preferred_enchantment() == Some(enchantment) {
                    prop_assert!(after.beats(before));
                } else {
                    prop_assert_eq!(after, before);
                }
            }
        }

        #[test]
        fn scoring_is_idempotent(
            category in tool_category(),
            seed in stack_with(ToolCategory::Digger),
            hardness in 0.0f32..50.0,
            target_category in target_category(),
            preference in preference(),
            suitable in any::<bool>(),
        ) {
            let stack = ToolStack { category, ..seed };
            let target = TargetDescriptor::new(BlockId(4), hardness).with_category(target_category);
            let params = ScoreParams {
                preference,
                silk_touch_for_ender_chest: true,
                silk_touch_blocks: &[BlockId(4)],
            };
            let mining = FixedMining { suitable, speed: 2.5 };

            let first = score(&stack, &target, &params, &mining, |_| true);
            let second = score(&stack, &target, &params, &mining, |_| true);
            prop_assert_eq!(first, second);
        }
    }
}
