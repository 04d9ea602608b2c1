//! Lays staged buffer contents down through a session.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::types::Result;
use crate::extent::ExtentBuffer;
use crate::function::BlockReplace;
use crate::session::EditSession;
use crate::visitor::RegionVisitor;

use super::{complete, Operation};

/// Writes every cell of a shared [`ExtentBuffer`] as it stands when the
/// operation runs.
pub struct BufferCommit {
    buffer: Rc<RefCell<ExtentBuffer>>,
    affected: usize,
}

impl BufferCommit {
    pub fn new(buffer: Rc<RefCell<ExtentBuffer>>) -> Self {
        Self { buffer, affected: 0 }
    }

    pub fn affected(&self) -> usize {
        self.affected
    }
}

impl Operation for BufferCommit {
    fn resume(&mut self, session: &mut EditSession<'_>) -> Result<bool> {
        let buffer = self.buffer.borrow();
        let mut visitor = RegionVisitor::new(buffer.as_region(), BlockReplace::new(&*buffer));
        complete(&mut visitor, session)?;
        self.affected = visitor.affected();
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{ids, Block};
    use crate::core::config::EditConfig;
    use crate::core::types::IVec3;
    use crate::region::CuboidRegion;
    use crate::world::{MemoryWorld, World};

    #[test]
    fn test_commit_writes_staged_cells() {
        let mut world = MemoryWorld::new(15);
        let buffer = Rc::new(RefCell::new(ExtentBuffer::new(CuboidRegion::new(IVec3::ZERO, IVec3::ONE))));
        buffer.borrow_mut().put(IVec3::ONE, Block::new(ids::SANDSTONE));
        {
            let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
            let mut commit = BufferCommit::new(Rc::clone(&buffer));
            complete(&mut commit, &mut session).unwrap();
            assert_eq!(commit.affected(), 1);
        }
        assert_eq!(world.block_at(IVec3::ONE).id, ids::SANDSTONE);
        assert_eq!(world.len(), 1);
    }
}
