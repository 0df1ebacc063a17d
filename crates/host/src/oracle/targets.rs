//! Block placement resolved through the catalog.
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use autotool_content::Catalog;
use autotool_core::{BlockId, BlockPos, TargetDescriptor, TargetOracle};

/// TargetOracle implementation over a sparse block map.
pub struct WorldTargets {
    catalog: Arc<Catalog>,
    blocks: HashMap<BlockPos, BlockId>,
    protected: HashSet<BlockPos>,
}

impl WorldTargets {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            blocks: HashMap::new(),
            protected: HashSet::new(),
        }
    }

    /// Place a block; replaces whatever was there.
    pub fn place(&mut self, pos: BlockPos, block: BlockId) {
        self.blocks.insert(pos, block);
    }

    pub fn remove(&mut self, pos: BlockPos) -> Option<BlockId> {
        self.blocks.remove(&pos)
    }

    /// Mark a position as off-limits regardless of the block there.
    pub fn protect(&mut self, pos: BlockPos) {
        self.protected.insert(pos);
    }

    pub fn block_at(&self, pos: BlockPos) -> Option<BlockId> {
        self.blocks.get(&pos).copied()
    }
}

impl TargetOracle for WorldTargets {
    fn resolve(&self, pos: BlockPos) -> Option<TargetDescriptor> {
        let id = self.blocks.get(&pos)?;
        self.catalog.block(*id).map(|block| block.descriptor())
    }

    fn can_break(&self, pos: BlockPos, target: &TargetDescriptor) -> bool {
        if self.protected.contains(&pos) {
            return false;
        }
        self.catalog
            .block(target.block)
            .is_some_and(|block| !block.unbreakable)
    }
}
