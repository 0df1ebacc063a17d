use crate::types::{TargetDescriptor, ToolStack};

/// Host rules for how tools interact with targets.
///
/// Tier and material tables live with the host; the scorer treats both
/// answers as opaque inputs.
pub trait MiningOracle {
    /// Whether the tool's type and tier can affect the target at all.
    fn is_suitable_for(&self, stack: &ToolStack, target: &TargetDescriptor) -> bool;

    /// Target-specific effectiveness multiplier (1.0 for bare hands).
    fn speed_multiplier(&self, stack: &ToolStack, target: &TargetDescriptor) -> f32;
}
