//! Tree placement contract used by forest generation.

use crate::block::{ids, Block};
use crate::core::types::{IVec3, Result};
use crate::session::EditSession;

/// Grows one tree rooted at `pos` (the first cell above the ground).
pub trait TreeGenerator {
    fn generate(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool>;
}

impl<T: TreeGenerator + ?Sized> TreeGenerator for &mut T {
    fn generate(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        (**self).generate(session, pos)
    }
}

/// Log trunk with a round leaf crown.
#[derive(Clone, Copy, Debug)]
pub struct SimpleTree {
    pub min_height: i32,
    pub max_height: i32,
    pub crown_radius: i32,
}

impl Default for SimpleTree {
    fn default() -> Self {
        Self {
            min_height: 4,
            max_height: 6,
            crown_radius: 2,
        }
    }
}

impl TreeGenerator for SimpleTree {
    fn generate(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        let height = session
            .rng()
            .i32(self.min_height..=self.max_height.max(self.min_height));
        let log = Block::new(ids::LOG);
        for y in 0..height {
            session.set_block(pos + IVec3::new(0, y, 0), log)?;
        }

        let top = pos + IVec3::new(0, height - 1, 0);
        let r = self.crown_radius;
        let leaves = Block::new(ids::LEAVES);
        for z in -r..=r {
            for y in -1..=r {
                for x in -r..=r {
                    if x * x + y * y + z * z <= r * r + 1 {
                        session.set_block_if_air(top + IVec3::new(x, y, z), leaves)?;
                    }
                }
            }
        }
        Ok(true)
    }
}
