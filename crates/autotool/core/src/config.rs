use crate::error::ConfigError;
use crate::types::{BlockId, ItemId};

/// Which bonus enchantment counts towards a tool's score.
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
pub enum EnchantPreference {
    None,
    #[default]
    Fortune,
    SilkTouch,
}

/// How the configured item list filters hotbar candidates.
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
pub enum ListMode {
    /// Only listed tools are considered.
    Whitelist,
    /// Listed tools are never considered.
    #[default]
    Blacklist,
}

/// Tool-selection settings and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutoToolConfig {
    pub prefer: EnchantPreference,
    /// Ender chests may only be targeted with a silk-touch tool.
    pub silk_touch_for_ender_chest: bool,
    /// Stop using tools whose remaining durability drops below the threshold.
    pub anti_break: bool,
    pub anti_break_percentage: u8,
    /// Return to the previously selected slot when the action is released.
    pub switch_back: bool,
    /// Ticks to wait before committing a switch.
    pub switch_delay: u32,
    pub list_mode: ListMode,
    pub whitelist: Vec<ItemId>,
    pub blacklist: Vec<ItemId>,
    /// Blocks any silk-touch tool may target even when otherwise unsuitable.
    pub silk_touch_blocks: Vec<BlockId>,
    /// Held items that are never switched away from.
    pub anti_switch_whitelist: Vec<ItemId>,
}

impl AutoToolConfig {
    pub const DEFAULT_ANTI_BREAK_PERCENTAGE: u8 = 10;
    pub const MIN_ANTI_BREAK_PERCENTAGE: u8 = 1;
    pub const MAX_ANTI_BREAK_PERCENTAGE: u8 = 100;

    pub fn new() -> Self {
        Self {
            prefer: EnchantPreference::default(),
            silk_touch_for_ender_chest: true,
            anti_break: false,
            anti_break_percentage: Self::DEFAULT_ANTI_BREAK_PERCENTAGE,
            switch_back: false,
            switch_delay: 0,
            list_mode: ListMode::default(),
            whitelist: Vec::new(),
            blacklist: Vec::new(),
            silk_touch_blocks: Vec::new(),
            anti_switch_whitelist: Vec::new(),
        }
    }

    /// Checks value ranges that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::PercentageOutOfRange` if the anti-break
    /// percentage is outside `1..=100`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = Self::MIN_ANTI_BREAK_PERCENTAGE..=Self::MAX_ANTI_BREAK_PERCENTAGE;
        if !range.contains(&self.anti_break_percentage) {
            return Err(ConfigError::PercentageOutOfRange(
                self.anti_break_percentage,
            ));
        }
        Ok(())
    }

    /// The list consulted under the current [`ListMode`].
    pub fn active_list(&self) -> &[ItemId] {
        match self.list_mode {
            ListMode::Whitelist => &self.whitelist,
            ListMode::Blacklist => &self.blacklist,
        }
    }
}

impl Default for AutoToolConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_documented_values() {
        let config = AutoToolConfig::default();

        assert_eq!(config.prefer, EnchantPreference::Fortune);
        assert!(config.silk_touch_for_ender_chest);
        assert!(!config.anti_break);
        assert_eq!(config.anti_break_percentage, 10);
        assert_eq!(config.switch_delay, 0);
        assert_eq!(config.list_mode, ListMode::Blacklist);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_percentage_outside_range() {
        let mut config = AutoToolConfig::default();

        config.anti_break_percentage = 0;
        assert_eq!(config.validate(), Err(ConfigError::PercentageOutOfRange(0)));

        config.anti_break_percentage = 101;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PercentageOutOfRange(101))
        );

        config.anti_break_percentage = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn active_list_follows_mode() {
        let mut config = AutoToolConfig {
            whitelist: vec![ItemId(1)],
            blacklist: vec![ItemId(2)],
            ..AutoToolConfig::default()
        };
        assert_eq!(config.active_list(), &[ItemId(2)]);

        config.list_mode = ListMode::Whitelist;
        assert_eq!(config.active_list(), &[ItemId(1)]);
    }

    #[test]
    fn preference_parses_case_insensitively() {
        assert_eq!(
            "Silk_Touch".parse::<EnchantPreference>(),
            Ok(EnchantPreference::SilkTouch)
        );
        assert_eq!(ListMode::Whitelist.as_ref(), "whitelist");
    }
}
