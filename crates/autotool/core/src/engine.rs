//! Event entry points.
//!
//! [`AutoTool`] owns the configuration and the [`SwitchStateMachine`]; all
//! other state (the hotbar, the previous-slot record, the world) is read
//! through the oracles in [`Env`] on every call. Exactly one action-started
//! and one tick event are processed per time step, in host order.
use crate::capability::is_tool;
use crate::command::{Commands, ToolCommand, ToolEvent};
use crate::config::AutoToolConfig;
use crate::durability::DurabilityGuard;
use crate::env::{Env, InventoryOracle, MiningOracle, OracleError, TargetOracle};
use crate::error::ConfigError;
use crate::selection::{Selection, SelectionPolicy, select_best_slot};
use crate::switch::{SwitchStateMachine, TickInput};
use crate::types::{BlockPos, TargetDescriptor};

/// Why an action-started event produced no evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    /// The bulk-mining feature owns tool handling while it runs.
    BulkMining,
    /// No target exists at the position.
    Unresolved,
    /// The host reports the target cannot be acted on.
    Unbreakable,
}

/// Full outcome of one action-started event.
#[derive(Clone, Debug, PartialEq)]
pub enum Decision {
    Skipped(SkipReason),
    Evaluated {
        target: TargetDescriptor,
        selection: Selection,
        commands: Commands,
    },
}

impl Decision {
    pub fn commands(&self) -> &[ToolCommand] {
        match self {
            Decision::Skipped(_) => &[],
            Decision::Evaluated { commands, .. } => commands.as_slice(),
        }
    }

    pub fn into_commands(self) -> Commands {
        match self {
            Decision::Skipped(_) => Commands::new(),
            Decision::Evaluated { commands, .. } => commands,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoTool {
    config: AutoToolConfig,
    machine: SwitchStateMachine,
}

impl AutoTool {
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails validation.
    pub fn new(config: AutoToolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            machine: SwitchStateMachine::new(),
        })
    }

    pub fn config(&self) -> &AutoToolConfig {
        &self.config
    }

    /// Replaces the configuration; a pending switch keeps its countdown.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails validation.
    pub fn set_config(&mut self, config: AutoToolConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn machine(&self) -> &SwitchStateMachine {
        &self.machine
    }

    /// Routes an event to the matching entry point.
    pub fn handle<I, T, M>(
        &mut self,
        env: &Env<'_, I, T, M>,
        event: ToolEvent,
        bulk_mining_active: bool,
    ) -> Result<Commands, OracleError>
    where
        I: InventoryOracle + ?Sized,
        T: TargetOracle + ?Sized,
        M: MiningOracle + ?Sized,
    {
        match event {
            ToolEvent::ActionStarted { pos } => {
                self.on_action_started(env, pos, bulk_mining_active)
            }
            ToolEvent::Tick { action_held } => self.on_tick(env, action_held, bulk_mining_active),
        }
    }

    pub fn on_action_started<I, T, M>(
        &mut self,
        env: &Env<'_, I, T, M>,
        pos: BlockPos,
        bulk_mining_active: bool,
    ) -> Result<Commands, OracleError>
    where
        I: InventoryOracle + ?Sized,
        T: TargetOracle + ?Sized,
        M: MiningOracle + ?Sized,
    {
        self.decide(env, pos, bulk_mining_active)
            .map(Decision::into_commands)
    }

    /// Evaluates an action-started event and returns the full decision.
    ///
    /// # Errors
    ///
    /// Returns `OracleError` when a required oracle is missing from `env`.
    pub fn decide<I, T, M>(
        &mut self,
        env: &Env<'_, I, T, M>,
        pos: BlockPos,
        bulk_mining_active: bool,
    ) -> Result<Decision, OracleError>
    where
        I: InventoryOracle + ?Sized,
        T: TargetOracle + ?Sized,
        M: MiningOracle + ?Sized,
    {
        if bulk_mining_active {
            return Ok(Decision::Skipped(SkipReason::BulkMining));
        }

        let targets = env.targets()?;
        let Some(target) = targets.resolve(pos) else {
            return Ok(Decision::Skipped(SkipReason::Unresolved));
        };
        if !targets.can_break(pos, &target) {
            return Ok(Decision::Skipped(SkipReason::Unbreakable));
        }

        let inventory = env.inventory()?;
        let mining = env.mining()?;

        let policy = SelectionPolicy::from_config(&self.config);
        let selection = select_best_slot(inventory, &target, &policy, mining);
        let mut commands = Commands::new();

        let Selection::Scanned(scan) = selection else {
            return Ok(Decision::Evaluated {
                target,
                selection,
                commands,
            });
        };

        let mut held = inventory.main_hand();
        if scan.should_switch() {
            match scan.destination() {
                Some(slot) => {
                    let fired = self.machine.on_decision(
                        slot,
                        self.config.switch_back,
                        self.config.switch_delay,
                    );
                    if let Some(command) = fired {
                        commands.push(command);
                        held = inventory.slot(slot);
                    }
                }
                // Superseded by a decision with nowhere to go
                None => self.machine.clear(),
            }
        }

        let guard = DurabilityGuard::from_config(&self.config);
        if is_tool(&held) && guard.should_stop_using(&held) {
            commands.push(ToolCommand::CancelCurrentAction);
        }

        Ok(Decision::Evaluated {
            target,
            selection,
            commands,
        })
    }

    /// Advances the release edge and the countdown by one tick.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::InventoryNotAvailable` when the inventory oracle
    /// is missing from `env`.
    pub fn on_tick<I, T, M>(
        &mut self,
        env: &Env<'_, I, T, M>,
        action_held: bool,
        bulk_mining_active: bool,
    ) -> Result<Commands, OracleError>
    where
        I: InventoryOracle + ?Sized,
        T: TargetOracle + ?Sized,
        M: MiningOracle + ?Sized,
    {
        let mut commands = Commands::new();
        if bulk_mining_active {
            return Ok(commands);
        }

        let input = TickInput {
            action_held,
            switch_back: self.config.switch_back,
            previous_slot: env.inventory()?.previous_slot(),
        };
        if let Some(command) = self.machine.on_tick(input) {
            commands.push(command);
        }
        Ok(commands)
    }
}
