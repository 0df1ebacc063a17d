//! Worn-out tool detection.
//!
//! The same check serves two purposes: it disqualifies low-durability tools
//! from selection, and it interrupts the current action when the held tool
//! itself is about to break, whether or not a replacement exists.
use crate::config::AutoToolConfig;
use crate::types::ToolStack;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurabilityGuard {
    pub enabled: bool,
    /// Percentage of max durability (1..=100) below which a tool is retired.
    pub threshold_percent: u8,
}

impl DurabilityGuard {
    pub const DISABLED: Self = Self {
        enabled: false,
        threshold_percent: AutoToolConfig::DEFAULT_ANTI_BREAK_PERCENTAGE,
    };

    pub const fn new(threshold_percent: u8) -> Self {
        Self {
            enabled: true,
            threshold_percent,
        }
    }

    pub fn from_config(config: &AutoToolConfig) -> Self {
        Self {
            enabled: config.anti_break,
            threshold_percent: config.anti_break_percentage,
        }
    }

    /// `(max - used) < max * threshold / 100`, in integer arithmetic.
    ///
    /// Items without durability (`max_damage == 0`) never trip the guard.
    pub fn should_stop_using(&self, stack: &ToolStack) -> bool {
        if !self.enabled {
            return false;
        }
        let max = u64::from(stack.max_damage);
        let remaining = u64::from(stack.remaining_durability());
        remaining < max * u64::from(self.threshold_percent) / 100
    }

    /// Inverse of [`Self::should_stop_using`], shaped as a scoring eligibility predicate.
    pub fn allows(&self, stack: &ToolStack) -> bool {
        !self.should_stop_using(stack)
    }
}

impl Default for DurabilityGuard {
    fn default() -> Self {
        Self::DISABLED
    }
}
