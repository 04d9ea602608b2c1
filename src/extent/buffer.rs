//! Staging buffer for copies whose source and destination may overlap.

use indexmap::IndexMap;

use crate::block::Block;
use crate::core::types::IVec3;
use crate::pattern::Pattern;
use crate::region::{ArbitraryRegion, Region};

/// Holds writes aimed inside a guarded region until they can be replayed.
///
/// Writes outside the guard are not needed later and are not buffered; the
/// caller sends those straight to the session.
#[derive(Clone, Debug)]
pub struct ExtentBuffer {
    guard: Region,
    blocks: IndexMap<IVec3, Block>,
}

impl ExtentBuffer {
    pub fn new(guard: impl Into<Region>) -> Self {
        Self {
            guard: guard.into(),
            blocks: IndexMap::new(),
        }
    }

    /// Whether a write to `pos` belongs in the buffer.
    pub fn accepts(&self, pos: IVec3) -> bool {
        self.guard.contains(pos)
    }

    /// Buffer a write. Returns false and stores nothing outside the guard.
    pub fn put(&mut self, pos: IVec3, block: Block) -> bool {
        if !self.accepts(pos) {
            return false;
        }
        self.blocks.insert(pos, block);
        true
    }

    pub fn get(&self, pos: IVec3) -> Option<Block> {
        self.blocks.get(&pos).copied()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The buffered positions, in write order.
    pub fn as_region(&self) -> Region {
        Region::Arbitrary(ArbitraryRegion::new(self.blocks.keys().copied().collect()))
    }
}

/// Replays buffered blocks; unbuffered cells read as air.
impl Pattern for ExtentBuffer {
    fn apply(&self, pos: IVec3) -> Block {
        self.get(pos).unwrap_or(Block::AIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ids;
    use crate::region::CuboidRegion;

    #[test]
    fn test_guard_and_replay() {
        let mut buffer = ExtentBuffer::new(CuboidRegion::new(IVec3::ZERO, IVec3::splat(3)));
        assert!(buffer.put(IVec3::new(2, 0, 0), Block::new(ids::STONE)));
        assert!(buffer.put(IVec3::new(1, 0, 0), Block::new(ids::DIRT)));
        assert!(!buffer.put(IVec3::new(4, 0, 0), Block::new(ids::DIRT)));

        assert_eq!(buffer.len(), 2);
        let order: Vec<IVec3> = buffer.as_region().iter().collect();
        assert_eq!(order, vec![IVec3::new(2, 0, 0), IVec3::new(1, 0, 0)]);
        assert_eq!(buffer.apply(IVec3::new(1, 0, 0)).id, ids::DIRT);
        assert!(buffer.apply(IVec3::new(3, 3, 3)).is_air());
    }
}
