//! Error types for autotool-core.
//!
//! Decisions themselves never fail: "no eligible tool" and "current tool is
//! already best" are ordinary outcomes. Errors only describe wiring mistakes
//! (a missing oracle, see [`crate::env::OracleError`]) and invalid settings.

/// Invalid [`crate::AutoToolConfig`] values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("anti-break percentage {0} is out of range (expected 1..=100)")]
    PercentageOutOfRange(u8),
}
