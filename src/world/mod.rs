//! The world collaborator that edit sessions read from and write into

pub mod entity;
pub mod memory;

pub use entity::Entity;
pub use memory::MemoryWorld;

use crate::block::{ids, Block};
use crate::core::types::{IVec2, IVec3};
use crate::mask::{BlockTypeMask, Mask};
use crate::region::Region;

/// Chunk column containing a block position.
pub fn chunk_of(pos: IVec3) -> IVec2 {
    IVec2::new(pos.x >> 4, pos.z >> 4)
}

/// Storage, lighting and entity backend for an edit session.
///
/// Only `block_at`, `set_block` and `max_y` are required; the remaining
/// hooks default to no-ops for backends without chunks or entities.
pub trait World {
    /// Current block at `pos`, air when nothing is stored.
    fn block_at(&self, pos: IVec3) -> Block;

    /// Store `block` at `pos`. Returns whether the stored value changed.
    ///
    /// `notify_and_light` is false while fast mode defers neighbour updates.
    fn set_block(&mut self, pos: IVec3, block: Block, notify_and_light: bool) -> bool;

    /// Highest valid Y coordinate.
    fn max_y(&self) -> i32;

    fn min_point(&self) -> IVec3 {
        IVec3::new(-30_000_000, 0, -30_000_000)
    }

    fn max_point(&self) -> IVec3 {
        IVec3::new(30_000_000, self.max_y(), 30_000_000)
    }

    fn is_valid_block_type(&self, _id: u16) -> bool {
        true
    }

    /// Mask matching every liquid block this world knows about.
    fn create_liquid_mask(&self) -> Box<dyn Mask> {
        Box::new(BlockTypeMask::new([
            ids::WATER,
            ids::STATIONARY_WATER,
            ids::LAVA,
            ids::STATIONARY_LAVA,
        ]))
    }

    /// Materialise the chunk column before a write lands in it.
    fn ensure_chunk_loaded(&mut self, _chunk: IVec2) {}

    /// Relight and notify chunks written while fast mode was on.
    fn fix_after_fast_mode(&mut self, _chunks: &[IVec2]) {}

    /// Empty the inventory of a container block so replacing it drops nothing.
    fn clear_container_contents(&mut self, _pos: IVec3) -> bool {
        false
    }

    /// Entities inside `region`, or all entities when `None`.
    fn entities(&self, _region: Option<&Region>) -> Vec<Entity> {
        Vec::new()
    }

    /// Spawn an entity, returning the spawned copy.
    fn create_entity(&mut self, _entity: Entity) -> Option<Entity> {
        None
    }
}
