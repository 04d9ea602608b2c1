//! Records each effective write into the session's change set.

use std::any::Any;

use crate::block::Block;
use crate::core::types::{IVec3, Result};
use crate::history::{BlockChange, ChangeSet};

use super::{Chain, Stage};

#[derive(Debug, Default)]
pub struct ChangeSetRecorder {
    changes: ChangeSet,
}

impl ChangeSetRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn change_set(&self) -> &ChangeSet {
        &self.changes
    }

    pub fn change_set_mut(&mut self) -> &mut ChangeSet {
        &mut self.changes
    }

    /// Hand over the recorded history, leaving an empty one behind.
    pub fn take(&mut self) -> ChangeSet {
        std::mem::take(&mut self.changes)
    }
}

impl Stage for ChangeSetRecorder {
    fn name(&self) -> &'static str {
        "change-set"
    }

    fn set_block(&mut self, pos: IVec3, block: Block, mut next: Chain<'_>) -> Result<bool> {
        let previous = next.block_at(pos);
        let changed = next.set_block(pos, block)?;
        if changed {
            self.changes.add(BlockChange::new(pos, previous, block));
        }
        Ok(changed)
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
    use crate::world::MemoryWorld;

    #[test]
    fn test_only_real_changes_recorded() {
        let mut world = MemoryWorld::new(15);
        world.put(IVec3::ZERO, Block::new(ids::DIRT));
        let mut recorder = ChangeSetRecorder::new();
        let mut rest: Vec<Box<dyn Stage>> = Vec::new();

        let stone = Block::new(ids::STONE);
        recorder.set_block(IVec3::ZERO, stone, Chain::new(&mut rest, &mut world)).unwrap();
        recorder.set_block(IVec3::ZERO, stone, Chain::new(&mut rest, &mut world)).unwrap();

        let set = recorder.take();
        assert_eq!(set.len(), 1);
        let change = set.iter().next().unwrap();
        assert_eq!(change.previous, Block::new(ids::DIRT));
        assert_eq!(change.current, stone);
        assert!(recorder.change_set().is_empty());
    }
}
