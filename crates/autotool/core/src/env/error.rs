//! Oracle access errors.

/// Errors that occur when accessing oracle data.
///
/// A missing oracle is a wiring mistake in the host; the engine cannot make a
/// decision without inventory, target, and mining data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// InventoryOracle is not available in the environment.
    #[error("InventoryOracle not available")]
    InventoryNotAvailable,

    /// TargetOracle is not available in the environment.
    #[error("TargetOracle not available")]
    TargetsNotAvailable,

    /// MiningOracle is not available in the environment.
    #[error("MiningOracle not available")]
    MiningNotAvailable,
}

impl OracleError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            OracleError::InventoryNotAvailable => "ORACLE_INVENTORY_NOT_AVAILABLE",
            OracleError::TargetsNotAvailable => "ORACLE_TARGETS_NOT_AVAILABLE",
            OracleError::MiningNotAvailable => "ORACLE_MINING_NOT_AVAILABLE",
        }
    }
}
