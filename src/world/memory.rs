//! Hash-map backed world for tests, benches and headless tools.

use std::collections::{HashMap, HashSet};

use crate::block::Block;
use crate::core::types::{IVec2, IVec3};
use crate::region::Region;

use super::{Entity, World};

/// Sparse in-memory world; unset cells read as air.
#[derive(Clone, Debug, Default)]
pub struct MemoryWorld {
    blocks: HashMap<IVec3, Block>,
    max_y: i32,
    entities: Vec<Entity>,
    loaded_chunks: HashSet<IVec2>,
    relit_chunks: Vec<IVec2>,
    cleared_containers: Vec<IVec3>,
    silent_writes: usize,
}

impl MemoryWorld {
    /// Create an empty world with the given build height.
    pub fn new(max_y: i32) -> Self {
        Self {
            max_y,
            ..Self::default()
        }
    }

    /// Store a block without going through an edit session.
    pub fn put(&mut self, pos: IVec3, block: Block) {
        self.set_block(pos, block, true);
    }

    /// Fill an inclusive box directly.
    pub fn fill(&mut self, min: IVec3, max: IVec3, block: Block) {
        for z in min.z..=max.z {
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    self.put(IVec3::new(x, y, z), block);
                }
            }
        }
    }

    /// Number of non-air cells.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate stored non-air cells.
    pub fn iter(&self) -> impl Iterator<Item = (&IVec3, &Block)> {
        self.blocks.iter()
    }

    pub fn loaded_chunks(&self) -> &HashSet<IVec2> {
        &self.loaded_chunks
    }

    /// Chunks handed to `fix_after_fast_mode`, in call order.
    pub fn relit_chunks(&self) -> &[IVec2] {
        &self.relit_chunks
    }

    pub fn cleared_containers(&self) -> &[IVec3] {
        &self.cleared_containers
    }

    /// Writes made with neighbour notification disabled.
    pub fn silent_writes(&self) -> usize {
        self.silent_writes
    }
}

impl World for MemoryWorld {
    fn block_at(&self, pos: IVec3) -> Block {
        self.blocks.get(&pos).copied().unwrap_or(Block::AIR)
    }

    fn set_block(&mut self, pos: IVec3, block: Block, notify_and_light: bool) -> bool {
        if !notify_and_light {
            self.silent_writes += 1;
        }
        let block = block.normalized();
        let previous = if block.is_air() {
            self.blocks.remove(&pos)
        } else {
            self.blocks.insert(pos, block)
        };
        previous.unwrap_or(Block::AIR) != block
    }

    fn max_y(&self) -> i32 {
        self.max_y
    }

    fn ensure_chunk_loaded(&mut self, chunk: IVec2) {
        self.loaded_chunks.insert(chunk);
    }

    fn fix_after_fast_mode(&mut self, chunks: &[IVec2]) {
        self.relit_chunks.extend_from_slice(chunks);
    }

    fn clear_container_contents(&mut self, pos: IVec3) -> bool {
        self.cleared_containers.push(pos);
        true
    }

    fn entities(&self, region: Option<&Region>) -> Vec<Entity> {
        self.entities
            .iter()
            .filter(|e| region.is_none_or(|r| r.contains(e.position.floor().as_ivec3())))
            .cloned()
            .collect()
    }

    fn create_entity(&mut self, entity: Entity) -> Option<Entity> {
        self.entities.push(entity.clone());
        Some(entity)
    }
}
