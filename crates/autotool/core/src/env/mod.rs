//! Traits describing read-only host data.
//!
//! Oracles expose the hotbar, target resolution, and the host's mining rules.
//! The [`Env`] aggregate bundles them so the engine can access everything it
//! needs without hard coupling to concrete implementations.
mod error;
mod inventory;
mod mining;
mod target;

pub use error::OracleError;
pub use inventory::InventoryOracle;
pub use mining::MiningOracle;
pub use target::TargetOracle;

/// Aggregates read-only oracles required by the decision pipeline.
#[derive(Debug)]
pub struct Env<'a, I, T, M>
where
    I: InventoryOracle + ?Sized,
    T: TargetOracle + ?Sized,
    M: MiningOracle + ?Sized,
{
    inventory: Option<&'a I>,
    targets: Option<&'a T>,
    mining: Option<&'a M>,
}

pub type ToolEnv<'a> =
    Env<'a, dyn InventoryOracle + 'a, dyn TargetOracle + 'a, dyn MiningOracle + 'a>;

// Manual impls: derives would require the oracle types themselves to be Clone.
impl<I, T, M> Clone for Env<'_, I, T, M>
where
    I: InventoryOracle + ?Sized,
    T: TargetOracle + ?Sized,
    M: MiningOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, T, M> Copy for Env<'_, I, T, M>
where
    I: InventoryOracle + ?Sized,
    T: TargetOracle + ?Sized,
    M: MiningOracle + ?Sized,
{
}

impl<'a, I, T, M> Env<'a, I, T, M>
where
    I: InventoryOracle + ?Sized,
    T: TargetOracle + ?Sized,
    M: MiningOracle + ?Sized,
{
    pub fn new(inventory: Option<&'a I>, targets: Option<&'a T>, mining: Option<&'a M>) -> Self {
        Self {
            inventory,
            targets,
            mining,
        }
    }

    pub fn with_all(inventory: &'a I, targets: &'a T, mining: &'a M) -> Self {
        Self::new(Some(inventory), Some(targets), Some(mining))
    }

    pub fn empty() -> Self {
        Self {
            inventory: None,
            targets: None,
            mining: None,
        }
    }

    /// Returns the InventoryOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::InventoryNotAvailable` if no inventory oracle was provided.
    pub fn inventory(&self) -> Result<&'a I, OracleError> {
        self.inventory.ok_or(OracleError::InventoryNotAvailable)
    }

    /// Returns the TargetOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TargetsNotAvailable` if no target oracle was provided.
    pub fn targets(&self) -> Result<&'a T, OracleError> {
        self.targets.ok_or(OracleError::TargetsNotAvailable)
    }

    /// Returns the MiningOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MiningNotAvailable` if no mining oracle was provided.
    pub fn mining(&self) -> Result<&'a M, OracleError> {
        self.mining.ok_or(OracleError::MiningNotAvailable)
    }
}

impl<'a, I, T, M> Env<'a, I, T, M>
where
    I: InventoryOracle + 'a,
    T: TargetOracle + 'a,
    M: MiningOracle + 'a,
{
    /// Converts this environment into a trait-object based `ToolEnv`.
    pub fn as_tool_env(&self) -> ToolEnv<'a> {
        let inventory: Option<&'a dyn InventoryOracle> = self.inventory.map(|inv| inv as _);
        let targets: Option<&'a dyn TargetOracle> = self.targets.map(|targets| targets as _);
        let mining: Option<&'a dyn MiningOracle> = self.mining.map(|mining| mining as _);
        Env::new(inventory, targets, mining)
    }
}
