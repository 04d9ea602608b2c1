//! Masks over the block stored at a cell.

use std::collections::HashSet;

use crate::block::Block;
use crate::core::types::IVec3;
use crate::world::World;

use super::Mask;

/// Matches any non-air cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExistingBlockMask;

impl Mask for ExistingBlockMask {
    fn test(&self, world: &dyn World, pos: IVec3) -> bool {
        !world.block_at(pos).is_air()
    }
}

/// Fuzzy match against a set of blocks; wildcard data matches every variant.
#[derive(Clone, Debug, Default)]
pub struct BlockMask {
    blocks: Vec<Block>,
}

impl BlockMask {
    pub fn new(blocks: impl IntoIterator<Item = Block>) -> Self {
        Self {
            blocks: blocks.into_iter().collect(),
        }
    }

    pub fn add(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl Mask for BlockMask {
    fn test(&self, world: &dyn World, pos: IVec3) -> bool {
        let current = world.block_at(pos);
        self.blocks.iter().any(|b| b.matches(&current))
    }
}

/// Match on block type id only.
#[derive(Clone, Debug, Default)]
pub struct BlockTypeMask {
    ids: HashSet<u16>,
}

impl BlockTypeMask {
    pub fn new(ids: impl IntoIterator<Item = u16>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }
}

impl Mask for BlockTypeMask {
    fn test(&self, world: &dyn World, pos: IVec3) -> bool {
        self.ids.contains(&world.block_at(pos).id)
    }
}
