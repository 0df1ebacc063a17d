//! Hotbar scan and switch decision.
//!
//! The selector scores every hotbar slot, keeps the highest eligible score
//! (first slot wins a tie), scores the held stack with the same function, and
//! decides whether a switch is warranted. "Should we switch" and "where to"
//! are reported separately: a worn-out or non-tool held stack warrants a
//! switch even when no slot is eligible, which still matters for the
//! durability cancellation downstream.
use crate::capability::is_tool;
use crate::config::{AutoToolConfig, ListMode};
use crate::durability::DurabilityGuard;
use crate::env::{InventoryOracle, MiningOracle};
use crate::scoring::{ScoreParams, ToolScore, score};
use crate::types::{HotbarSlot, ItemId, TargetDescriptor, ToolStack};

/// Allow/deny filter over candidate items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListFilter<'a> {
    pub mode: ListMode,
    pub items: &'a [ItemId],
}

impl<'a> ListFilter<'a> {
    pub fn new(mode: ListMode, items: &'a [ItemId]) -> Self {
        Self { mode, items }
    }

    pub fn from_config(config: &'a AutoToolConfig) -> Self {
        Self::new(config.list_mode, config.active_list())
    }

    /// Whether a candidate holding `item` is considered at all.
    pub fn admits(&self, item: ItemId) -> bool {
        let listed = self.items.contains(&item);
        match self.mode {
            ListMode::Whitelist => listed,
            ListMode::Blacklist => !listed,
        }
    }
}

/// Everything the selector needs besides the oracles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionPolicy<'a> {
    pub filter: ListFilter<'a>,
    pub params: ScoreParams<'a>,
    pub guard: DurabilityGuard,
    /// Held items that are never switched away from.
    pub pinned: &'a [ItemId],
}

impl<'a> SelectionPolicy<'a> {
    pub fn from_config(config: &'a AutoToolConfig) -> Self {
        Self {
            filter: ListFilter::from_config(config),
            params: ScoreParams::from_config(config),
            guard: DurabilityGuard::from_config(config),
            pinned: &config.anti_switch_whitelist,
        }
    }

    fn score<M>(&self, stack: &ToolStack, target: &TargetDescriptor, mining: &M) -> ToolScore
    where
        M: MiningOracle + ?Sized,
    {
        score(stack, target, &self.params, mining, |candidate| {
            self.guard.allows(candidate)
        })
    }
}

/// Why a switch is warranted. Each condition independently authorizes one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SwitchReason {
    /// A hotbar slot strictly outscores the held stack.
    BetterTool,
    /// The held stack is below the durability threshold.
    CurrentWornOut,
    /// The held stack is not a tool.
    CurrentNotATool,
}

/// Result of scanning the hotbar for one target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotScan {
    /// Highest-scoring eligible slot; lowest index on ties.
    pub best_slot: Option<HotbarSlot>,
    pub best_score: ToolScore,
    pub current_score: ToolScore,
    pub reason: Option<SwitchReason>,
}

impl SlotScan {
    #[inline]
    pub fn should_switch(&self) -> bool {
        self.reason.is_some()
    }

    /// Destination slot, only when a switch is warranted and one exists.
    pub fn destination(&self) -> Option<HotbarSlot> {
        self.reason.and(self.best_slot)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selection {
    /// The held item is on the never-switch list; nothing was scored.
    Pinned,
    Scanned(SlotScan),
}

impl Selection {
    pub fn scan(&self) -> Option<&SlotScan> {
        match self {
            Selection::Pinned => None,
            Selection::Scanned(scan) => Some(scan),
        }
    }

    pub fn destination(&self) -> Option<HotbarSlot> {
        self.scan().and_then(SlotScan::destination)
    }
}

/// Scans the hotbar and decides whether to leave the held stack.
pub fn select_best_slot<I, M>(
    inventory: &I,
    target: &TargetDescriptor,
    policy: &SelectionPolicy<'_>,
    mining: &M,
) -> Selection
where
    I: InventoryOracle + ?Sized,
    M: MiningOracle + ?Sized,
{
    let current = inventory.main_hand();
    if policy.pinned.contains(&current.item) {
        return Selection::Pinned;
    }

    let mut best_slot = None;
    let mut best_score = ToolScore::INELIGIBLE;

    for slot in HotbarSlot::all() {
        let stack = inventory.slot(slot);
        if !policy.filter.admits(stack.item) {
            continue;
        }

        let candidate = policy.score(&stack, target, mining);
        if !candidate.is_eligible() {
            continue;
        }

        // Strict comparison keeps the first maximum on ties
        if candidate.beats(best_score) {
            best_slot = Some(slot);
            best_score = candidate;
        }
    }

    let current_score = policy.score(&current, target, mining);

    let reason = if best_slot.is_some() && best_score.beats(current_score) {
        Some(SwitchReason::BetterTool)
    } else if policy.guard.should_stop_using(&current) {
        Some(SwitchReason::CurrentWornOut)
    } else if !is_tool(&current) {
        Some(SwitchReason::CurrentNotATool)
    } else {
        None
    };

    Selection::Scanned(SlotScan {
        best_slot,
        best_score,
        current_score,
        reason,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::EnchantPreference;
    use crate::scoring::tests::FixedMining;
    use crate::types::{BlockId, Enchantment, HOTBAR_SIZE, ToolCategory};

    /// Hotbar backed by a plain array.
    pub(crate) struct TestHotbar {
        pub slots: [ToolStack; HOTBAR_SIZE],
        pub selected: usize,
        pub previous: Option<HotbarSlot>,
    }

    impl TestHotbar {
        pub fn empty() -> Self {
            Self {
                slots: [ToolStack::EMPTY; HOTBAR_SIZE],
                selected: 0,
                previous: None,
            }
        }

        pub fn with(mut self, index: usize, stack: ToolStack) -> Self {
            self.slots[index] = stack;
            self
        }

        pub fn holding(mut self, index: usize) -> Self {
            self.selected = index;
            self
        }
    }

    impl InventoryOracle for TestHotbar {
        fn slot(&self, slot: HotbarSlot) -> ToolStack {
            self.slots[slot.index()]
        }

        fn main_hand(&self) -> ToolStack {
            self.slots[self.selected]
        }

        fn previous_slot(&self) -> Option<HotbarSlot> {
            self.previous
        }
    }

    const MINING: FixedMining = FixedMining {
        suitable: true,
        speed: 4.0,
    };

    fn stone() -> TargetDescriptor {
        TargetDescriptor::new(BlockId(1), 1.5)
    }

    fn pickaxe(item: u32) -> ToolStack {
        ToolStack::new(ItemId(item), ToolCategory::Digger).with_durability(0, 250)
    }

    fn config() -> AutoToolConfig {
        AutoToolConfig {
            prefer: EnchantPreference::None,
            ..AutoToolConfig::default()
        }
    }

    fn scan(selection: Selection) -> SlotScan {
        match selection {
            Selection::Scanned(scan) => scan,
            Selection::Pinned => panic!("expected a scan"),
        }
    }

    #[test]
    fn picks_unique_maximum() {
        let hotbar = TestHotbar::empty()
            .with(2, pickaxe(10))
            .with(6, pickaxe(11).with_enchantment(Enchantment::Efficiency, 4));
        let config = config();
        let policy = SelectionPolicy::from_config(&config);

        let result = scan(select_best_slot(&hotbar, &stone(), &policy, &MINING));

        assert_eq!(result.best_slot, HotbarSlot::new(6));
        assert_eq!(result.best_score, ToolScore::new(4004.0));
        assert_eq!(result.reason, Some(SwitchReason::BetterTool));
    }

    #[test]
    fn ties_keep_lowest_index() {
        let hotbar = TestHotbar::empty()
            .with(3, pickaxe(10))
            .with(5, pickaxe(11))
            .with(7, pickaxe(12));
        let config = config();
        let policy = SelectionPolicy::from_config(&config);

        let result = scan(select_best_slot(&hotbar, &stone(), &policy, &MINING));

        assert_eq!(result.best_slot, HotbarSlot::new(3));
    }

    #[test]
    fn equal_score_keeps_current_tool() {
        let hotbar = TestHotbar::empty()
            .with(0, pickaxe(10))
            .with(4, pickaxe(11))
            .holding(0);
        let config = config();
        let policy = SelectionPolicy::from_config(&config);

        let result = scan(select_best_slot(&hotbar, &stone(), &policy, &MINING));

        assert_eq!(result.best_slot, HotbarSlot::new(0));
        assert!(!result.should_switch());
        assert_eq!(result.destination(), None);
    }

    #[test]
    fn blacklist_drops_listed_items() {
        let hotbar = TestHotbar::empty()
            .with(1, pickaxe(10).with_enchantment(Enchantment::Efficiency, 5))
            .with(2, pickaxe(11));
        let config = AutoToolConfig {
            blacklist: vec![ItemId(10)],
            ..config()
        };
        let policy = SelectionPolicy::from_config(&config);

        let result = scan(select_best_slot(&hotbar, &stone(), &policy, &MINING));

        assert_eq!(result.best_slot, HotbarSlot::new(2));
    }

    #[test]
    fn whitelist_keeps_only_listed_items() {
        let hotbar = TestHotbar::empty()
            .with(1, pickaxe(10).with_enchantment(Enchantment::Efficiency, 5))
            .with(2, pickaxe(11));
        let config = AutoToolConfig {
            list_mode: ListMode::Whitelist,
            whitelist: vec![ItemId(11)],
            ..config()
        };
        let policy = SelectionPolicy::from_config(&config);

        let result = scan(select_best_slot(&hotbar, &stone(), &policy, &MINING));

        assert_eq!(result.best_slot, HotbarSlot::new(2));
    }

    #[test]
    fn worn_candidates_are_skipped() {
        let hotbar = TestHotbar::empty()
            .with(
                0,
                pickaxe(10)
                    .with_durability(248, 250)
                    .with_enchantment(Enchantment::Efficiency, 5),
            )
            .with(1, pickaxe(11))
            .holding(8);
        let config = AutoToolConfig {
            anti_break: true,
            ..config()
        };
        let policy = SelectionPolicy::from_config(&config);

        let result = scan(select_best_slot(&hotbar, &stone(), &policy, &MINING));

        assert_eq!(result.destination(), HotbarSlot::new(1));
    }

    #[test]
    fn worn_current_tool_warrants_switch_without_destination() {
        let hotbar = TestHotbar::empty()
            .with(0, pickaxe(10).with_durability(240, 250))
            .holding(0);
        let config = AutoToolConfig {
            anti_break: true,
            ..config()
        };
        let policy = SelectionPolicy::from_config(&config);

        let result = scan(select_best_slot(&hotbar, &stone(), &policy, &MINING));

        assert_eq!(result.reason, Some(SwitchReason::CurrentWornOut));
        assert_eq!(result.best_slot, None);
        assert_eq!(result.destination(), None);
    }

    #[test]
    fn empty_hand_warrants_switch() {
        let hotbar = TestHotbar::empty().holding(4);
        let config = config();
        let policy = SelectionPolicy::from_config(&config);

        let result = scan(select_best_slot(&hotbar, &stone(), &policy, &MINING));

        assert_eq!(result.reason, Some(SwitchReason::CurrentNotATool));
    }

    #[test]
    fn pinned_item_short_circuits() {
        let wand = pickaxe(99);
        let hotbar = TestHotbar::empty()
            .with(0, wand)
            .with(1, pickaxe(10).with_enchantment(Enchantment::Efficiency, 5))
            .holding(0);
        let config = AutoToolConfig {
            anti_switch_whitelist: vec![ItemId(99)],
            ..config()
        };
        let policy = SelectionPolicy::from_config(&config);

        let selection = select_best_slot(&hotbar, &stone(), &policy, &MINING);

        assert_eq!(selection, Selection::Pinned);
        assert_eq!(selection.destination(), None);
    }

    #[test]
    fn list_filter_modes() {
        let items = [ItemId(1)];
        assert!(ListFilter::new(ListMode::Whitelist, &items).admits(ItemId(1)));
        assert!(!ListFilter::new(ListMode::Whitelist, &items).admits(ItemId(2)));
        assert!(!ListFilter::new(ListMode::Blacklist, &items).admits(ItemId(1)));
        assert!(ListFilter::new(ListMode::Blacklist, &items).admits(ItemId(2)));
    }
}
