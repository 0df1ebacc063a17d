//! Errors surfaced by the reference host.
use autotool_core::{ConfigError, OracleError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HostError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("invalid auto-tool configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown item '{0}'")]
    UnknownItem(String),

    #[error("unknown block '{0}'")]
    UnknownBlock(String),
}
