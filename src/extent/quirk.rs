//! World-specific fixups before a block is replaced.

use std::any::Any;

use crate::block::{ids, kind, Block};
use crate::core::types::{IVec3, Result};

use super::{Chain, Stage};

/// Empties containers before they are overwritten and clears ice first so
/// it cannot melt into water during the replacement.
#[derive(Debug, Default)]
pub struct BlockQuirkStage;

impl Stage for BlockQuirkStage {
    fn name(&self) -> &'static str {
        "block-quirk"
    }

    fn set_block(&mut self, pos: IVec3, block: Block, mut next: Chain<'_>) -> Result<bool> {
        let existing = next.block_at(pos);
        if kind::is_container(existing.id) {
            next.world_mut().clear_container_contents(pos);
        } else if existing.id == ids::ICE {
            next.set_block(pos, Block::AIR)?;
        }
        next.set_block(pos, block)?;
        // Changed relative to the cell before the fixup, not the air step
        Ok(existing != block.normalized())
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
    use crate::core::config::EditConfig;
    use crate::session::EditSession;
    use crate::world::{MemoryWorld, World};

    #[test]
    fn test_container_cleared() {
        let mut world = MemoryWorld::new(15);
        world.put(IVec3::ZERO, Block::new(ids::CHEST));
        let mut rest: Vec<Box<dyn Stage>> = Vec::new();
        BlockQuirkStage
            .set_block(IVec3::ZERO, Block::AIR, Chain::new(&mut rest, &mut world))
            .unwrap();
        assert_eq!(world.cleared_containers(), &[IVec3::ZERO]);
        assert!(world.block_at(IVec3::ZERO).is_air());
    }

    #[test]
    fn test_ice_replaced_via_air() {
        let mut world = MemoryWorld::new(15);
        world.put(IVec3::ZERO, Block::new(ids::ICE));
        let mut rest: Vec<Box<dyn Stage>> = Vec::new();
        let changed = BlockQuirkStage
            .set_block(IVec3::ZERO, Block::new(ids::STONE), Chain::new(&mut rest, &mut world))
            .unwrap();
        assert!(changed);
        assert_eq!(world.block_at(IVec3::ZERO).id, ids::STONE);
        assert!(world.cleared_containers().is_empty());
    }

    #[test]
    fn test_ice_to_air_is_recorded_and_undone() {
        let mut world = MemoryWorld::new(15);
        world.put(IVec3::ZERO, Block::new(ids::ICE));
        let changes = {
            let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
            assert!(session.set_block(IVec3::ZERO, Block::AIR).unwrap());
            assert_eq!(session.block_change_count(), 1);
            session.into_change_set()
        };
        assert!(world.block_at(IVec3::ZERO).is_air());

        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        changes.undo(&mut session);
        drop(session);
        assert_eq!(world.block_at(IVec3::ZERO).id, ids::ICE);
    }

    #[test]
    fn test_ice_over_ice_is_unchanged() {
        let mut world = MemoryWorld::new(15);
        world.put(IVec3::ZERO, Block::new(ids::ICE));
        let mut rest: Vec<Box<dyn Stage>> = Vec::new();
        let changed = BlockQuirkStage
            .set_block(IVec3::ZERO, Block::new(ids::ICE), Chain::new(&mut rest, &mut world))
            .unwrap();
        assert!(!changed);

        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        assert!(!session.set_block(IVec3::ZERO, Block::new(ids::ICE)).unwrap());
        assert_eq!(session.block_change_count(), 0);
    }
}
