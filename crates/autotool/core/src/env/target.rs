use crate::types::{BlockPos, TargetDescriptor};

/// Resolves world positions into target descriptors.
pub trait TargetOracle {
    fn resolve(&self, pos: BlockPos) -> Option<TargetDescriptor>;

    /// Whether the target can be acted on at all right now (not bedrock,
    /// not protected, in reach). Consulted before any scoring happens.
    fn can_break(&self, pos: BlockPos, target: &TargetDescriptor) -> bool;
}
