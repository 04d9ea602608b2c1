//! Materialises chunk columns ahead of writes.

use std::any::Any;

use crate::block::Block;
use crate::core::types::{IVec3, Result};
use crate::world::chunk_of;

use super::{Chain, Stage};

#[derive(Debug)]
pub struct ChunkLoadingStage {
    enabled: bool,
}

impl Default for ChunkLoadingStage {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ChunkLoadingStage {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Stage for ChunkLoadingStage {
    fn name(&self) -> &'static str {
        "chunk-loading"
    }

    fn set_block(&mut self, pos: IVec3, block: Block, mut next: Chain<'_>) -> Result<bool> {
        if self.enabled {
            next.world_mut().ensure_chunk_loaded(chunk_of(pos));
        }
        next.set_block(pos, block)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ids;
    use crate::core::types::IVec2;
    use crate::world::MemoryWorld;

    #[test]
    fn test_loads_before_write() {
        let mut world = MemoryWorld::new(15);
        let mut rest: Vec<Box<dyn Stage>> = Vec::new();
        let mut stage = ChunkLoadingStage::default();
        stage
            .set_block(IVec3::new(33, 0, -2), Block::new(ids::STONE), Chain::new(&mut rest, &mut world))
            .unwrap();
        assert!(world.loaded_chunks().contains(&IVec2::new(2, -1)));

        stage.set_enabled(false);
        stage
            .set_block(IVec3::new(100, 0, 0), Block::new(ids::STONE), Chain::new(&mut rest, &mut world))
            .unwrap();
        assert_eq!(world.loaded_chunks().len(), 1);
    }
}
