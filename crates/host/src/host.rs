//! Event loop glue between the engine, the oracles and the hotbar.
use std::sync::Arc;

use autotool_content::Catalog;
use autotool_core::{
    AutoTool, AutoToolConfig, BlockPos, Commands, Decision, Env, InventoryOracle, OracleError,
    Selection, ToolCommand, ToolEvent, ToolStack,
};

use crate::error::{HostError, Result};
use crate::oracle::{CatalogMiningRules, HotbarInventory, WorldTargets};

/// Owns the engine and the oracles it reads, and applies emitted commands.
pub struct AutoToolHost {
    catalog: Arc<Catalog>,
    engine: AutoTool,
    inventory: HotbarInventory,
    targets: WorldTargets,
    mining: CatalogMiningRules,
    bulk_mining: bool,
    log: Vec<ToolCommand>,
}

impl AutoToolHost {
    /// # Errors
    ///
    /// Returns `HostError::Config` if the configuration fails validation.
    pub fn new(catalog: Arc<Catalog>, config: AutoToolConfig) -> Result<Self> {
        Ok(Self {
            engine: AutoTool::new(config)?,
            inventory: HotbarInventory::empty(),
            targets: WorldTargets::new(catalog.clone()),
            mining: CatalogMiningRules::new(catalog.clone()),
            catalog,
            bulk_mining: false,
            log: Vec::new(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> &AutoTool {
        &self.engine
    }

    pub fn inventory(&self) -> &HotbarInventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut HotbarInventory {
        &mut self.inventory
    }

    pub fn targets_mut(&mut self) -> &mut WorldTargets {
        &mut self.targets
    }

    /// Flags whether the bulk-mining feature currently owns tool handling.
    pub fn set_bulk_mining(&mut self, active: bool) {
        self.bulk_mining = active;
    }

    pub fn bulk_mining(&self) -> bool {
        self.bulk_mining
    }

    /// Every command applied so far, in order.
    pub fn command_log(&self) -> &[ToolCommand] {
        &self.log
    }

    /// A fresh stack of the named catalog item.
    pub fn stack_named(&self, name: &str) -> Result<ToolStack> {
        self.catalog
            .item_by_name(name)
            .map(|item| item.stack())
            .ok_or_else(|| HostError::UnknownItem(name.to_string()))
    }

    /// Places the named catalog block at `pos`.
    pub fn place_named(&mut self, pos: BlockPos, name: &str) -> Result<()> {
        let block = self
            .catalog
            .block_by_name(name)
            .ok_or_else(|| HostError::UnknownBlock(name.to_string()))?;
        self.targets.place(pos, block.id);
        Ok(())
    }

    /// Feeds one event to the engine and applies the commands it emits.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Oracle` if the engine cannot reach an oracle.
    pub fn handle(&mut self, event: ToolEvent) -> Result<Commands> {
        let commands = match event {
            ToolEvent::ActionStarted { pos } => {
                self.inventory.set_action_held(true);
                self.action_started(pos)?
            }
            ToolEvent::Tick { action_held } => {
                self.inventory.set_action_held(action_held);
                let env = Env::with_all(&self.inventory, &self.targets, &self.mining).as_tool_env();
                self.engine
                    .on_tick(&env, action_held, self.bulk_mining)
                    .inspect_err(log_oracle_error)?
            }
        };

        for command in &commands {
            self.apply(*command);
        }
        Ok(commands)
    }

    /// Starts an action on `pos`.
    pub fn start_action(&mut self, pos: BlockPos) -> Result<Commands> {
        self.handle(ToolEvent::ActionStarted { pos })
    }

    /// Advances one tick with the current action signal.
    pub fn tick(&mut self) -> Result<Commands> {
        let action_held = self.inventory.action_held();
        self.handle(ToolEvent::Tick { action_held })
    }

    /// Releases the action signal and advances one tick.
    pub fn release(&mut self) -> Result<Commands> {
        self.handle(ToolEvent::Tick { action_held: false })
    }

    fn action_started(&mut self, pos: BlockPos) -> Result<Commands> {
        let env = Env::with_all(&self.inventory, &self.targets, &self.mining).as_tool_env();
        let decision = self
            .engine
            .decide(&env, pos, self.bulk_mining)
            .inspect_err(log_oracle_error)?;

        match &decision {
            Decision::Skipped(reason) => {
                tracing::debug!(%pos, %reason, "auto-tool skipped action");
            }
            Decision::Evaluated {
                target, selection, ..
            } => match selection {
                Selection::Pinned => {
                    tracing::debug!(%pos, block = %target.block, "held item is pinned");
                }
                Selection::Scanned(scan) => {
                    tracing::debug!(
                        %pos,
                        block = %target.block,
                        best_slot = ?scan.best_slot,
                        best_score = scan.best_score.value(),
                        current_score = scan.current_score.value(),
                        reason = ?scan.reason,
                        "scored hotbar"
                    );
                }
            },
        }

        Ok(decision.into_commands())
    }

    fn apply(&mut self, command: ToolCommand) {
        match command {
            ToolCommand::CancelCurrentAction => {
                let held = self.inventory.main_hand();
                tracing::warn!(
                    item = %held.item,
                    remaining = held.remaining_durability(),
                    max = held.max_damage,
                    "held tool is nearly broken, cancelling action"
                );
            }
            _ => tracing::info!(command = command.as_str(), ?command, "applying command"),
        }
        self.inventory.apply(command);
        self.log.push(command);
    }
}

fn log_oracle_error(err: &OracleError) {
    tracing::error!(code = err.error_code(), %err, "engine could not reach an oracle");
}
