//! User settings loader.
//!
//! Settings files name items and blocks instead of using raw ids; the names
//! are resolved against a [`Catalog`] while building the engine config.

use std::path::Path;

use anyhow::Context;
use autotool_core::{AutoToolConfig, BlockId, EnchantPreference, ItemId, ListMode, ToolCategory};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::loaders::{LoadResult, read_file};

/// Item that stays in hand by default; usually held on purpose.
pub const DEFAULT_PINNED_ITEM: &str = "wooden_axe";

/// Settings structure for TOML files.
///
/// Omitted fields take the engine defaults. An omitted `silk_touch_blocks`
/// falls back to the catalog's default silk-touch blocks, and an omitted
/// `anti_switch_whitelist` pins [`DEFAULT_PINNED_ITEM`] when the catalog has it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsSpec {
    pub prefer: EnchantPreference,
    pub silk_touch_for_ender_chest: bool,
    pub anti_break: bool,
    pub anti_break_percentage: u8,
    pub switch_back: bool,
    pub switch_delay: u32,
    pub list_mode: ListMode,
    pub whitelist: Vec<String>,
    pub blacklist: Vec<String>,
    pub silk_touch_blocks: Option<Vec<String>>,
    pub anti_switch_whitelist: Option<Vec<String>>,
}

impl Default for SettingsSpec {
    fn default() -> Self {
        let config = AutoToolConfig::default();
        Self {
            prefer: config.prefer,
            silk_touch_for_ender_chest: config.silk_touch_for_ender_chest,
            anti_break: config.anti_break,
            anti_break_percentage: config.anti_break_percentage,
            switch_back: config.switch_back,
            switch_delay: config.switch_delay,
            list_mode: config.list_mode,
            whitelist: Vec::new(),
            blacklist: Vec::new(),
            silk_touch_blocks: None,
            anti_switch_whitelist: None,
        }
    }
}

impl SettingsSpec {
    /// Resolves names against `catalog` and validates the result.
    pub fn resolve(&self, catalog: &Catalog) -> LoadResult<AutoToolConfig> {
        let silk_touch_blocks = match &self.silk_touch_blocks {
            Some(names) => resolve_blocks(catalog, names).context("in silk_touch_blocks")?,
            None => catalog.silk_touch_defaults(),
        };
        let anti_switch_whitelist = match &self.anti_switch_whitelist {
            Some(names) => resolve_tools(catalog, names).context("in anti_switch_whitelist")?,
            None => catalog
                .item_by_name(DEFAULT_PINNED_ITEM)
                .map(|item| vec![item.id])
                .unwrap_or_default(),
        };

        let config = AutoToolConfig {
            prefer: self.prefer,
            silk_touch_for_ender_chest: self.silk_touch_for_ender_chest,
            anti_break: self.anti_break,
            anti_break_percentage: self.anti_break_percentage,
            switch_back: self.switch_back,
            switch_delay: self.switch_delay,
            list_mode: self.list_mode,
            whitelist: resolve_tools(catalog, &self.whitelist).context("in whitelist")?,
            blacklist: resolve_tools(catalog, &self.blacklist).context("in blacklist")?,
            silk_touch_blocks,
            anti_switch_whitelist,
        };
        config.validate()?;

        Ok(config)
    }
}

/// Item lists only ever name tools; anything else is a settings mistake.
fn resolve_tools(catalog: &Catalog, names: &[String]) -> LoadResult<Vec<ItemId>> {
    names
        .iter()
        .map(|name| {
            let item = catalog
                .item_by_name(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown item '{}'", name))?;
            if item.category == ToolCategory::None {
                anyhow::bail!("Item '{}' is not a tool", name);
            }
            Ok(item.id)
        })
        .collect()
}

fn resolve_blocks(catalog: &Catalog, names: &[String]) -> LoadResult<Vec<BlockId>> {
    names
        .iter()
        .map(|name| {
            catalog
                .block_by_name(name)
                .map(|block| block.id)
                .ok_or_else(|| anyhow::anyhow!("Unknown block '{}'", name))
        })
        .collect()
}

/// Loader for user settings from TOML files.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing SettingsSpec
    /// * `catalog` - Catalog used to resolve item and block names
    ///
    /// # Returns
    ///
    /// Returns a validated AutoToolConfig.
    pub fn load(path: &Path, catalog: &Catalog) -> LoadResult<AutoToolConfig> {
        let content = read_file(path)?;
        Self::parse(&content, catalog)
            .with_context(|| format!("Failed to load settings {}", path.display()))
    }

    /// Parse settings TOML text and resolve it against `catalog`.
    pub fn parse(content: &str, catalog: &Catalog) -> LoadResult<AutoToolConfig> {
        let spec: SettingsSpec = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;

        spec.resolve(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_take_catalog_defaults() {
        let catalog = Catalog::builtin();
        let config = SettingsLoader::parse("", &catalog).unwrap();

        assert_eq!(config.prefer, EnchantPreference::Fortune);
        assert_eq!(config.anti_break_percentage, 10);
        assert_eq!(config.silk_touch_blocks, catalog.silk_touch_defaults());
        assert_eq!(config.anti_switch_whitelist, vec![ItemId(6)]);
    }

    #[test]
    fn explicit_empty_lists_stay_empty() {
        let catalog = Catalog::builtin();
        let config = SettingsLoader::parse(
            "silk_touch_blocks = []\nanti_switch_whitelist = []\n",
            &catalog,
        )
        .unwrap();

        assert!(config.silk_touch_blocks.is_empty());
        assert!(config.anti_switch_whitelist.is_empty());
    }

    #[test]
    fn unknown_item_names_are_errors() {
        let catalog = Catalog::builtin();
        let err = SettingsLoader::parse("blacklist = [\"golden_pickaxe\"]\n", &catalog)
            .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("in blacklist"), "{message}");
        assert!(message.contains("golden_pickaxe"), "{message}");
    }

    #[test]
    fn item_lists_reject_non_tools() {
        let catalog = Catalog::builtin();

        for list in ["whitelist", "blacklist", "anti_switch_whitelist"] {
            let err = SettingsLoader::parse(&format!("{list} = [\"torch\"]\n"), &catalog)
                .unwrap_err();
            let message = format!("{:#}", err);
            assert!(message.contains(&format!("in {list}")), "{message}");
            assert!(message.contains("'torch' is not a tool"), "{message}");
        }

        let config = SettingsLoader::parse("whitelist = [\"shears\"]\n", &catalog).unwrap();
        assert_eq!(config.whitelist, vec![ItemId(15)]);
    }

    #[test]
    fn out_of_range_percentage_is_rejected() {
        let catalog = Catalog::builtin();
        assert!(SettingsLoader::parse("anti_break_percentage = 0\n", &catalog).is_err());
        assert!(SettingsLoader::parse("anti_break_percentage = 101\n", &catalog).is_err());
    }
}
