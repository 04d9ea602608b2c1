//! Turns exposed rock and soil into a natural profile.

use crate::block::{ids, Block};
use crate::core::types::{IVec3, Result};
use crate::mask::{BlockTypeMask, Mask};
use crate::session::EditSession;

use super::LayerFunction;

/// Grass on the surface, three layers of dirt, then stone.
///
/// Only grass, dirt and stone are touched; anything else in the column is
/// skipped but does not stop the descent.
pub struct Naturalizer {
    mask: BlockTypeMask,
    affected: usize,
}

impl Default for Naturalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Naturalizer {
    pub fn new() -> Self {
        Self {
            mask: BlockTypeMask::new([ids::GRASS, ids::DIRT, ids::STONE]),
            affected: 0,
        }
    }

    pub fn affected(&self) -> usize {
        self.affected
    }

    fn naturalize(session: &mut EditSession<'_>, pos: IVec3, depth: i32) -> Result<bool> {
        let target = match depth {
            0 => ids::GRASS,
            1..=3 => ids::DIRT,
            _ => ids::STONE,
        };
        if session.block_at(pos).id == target {
            return Ok(false);
        }
        session.set_block(pos, Block::new(target))
    }
}

impl LayerFunction for Naturalizer {
    fn is_ground(&self, session: &EditSession<'_>, pos: IVec3) -> bool {
        self.mask.test(session.world(), pos)
    }

    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3, depth: i32) -> Result<bool> {
        if self.mask.test(session.world(), pos) && Self::naturalize(session, pos, depth)? {
            self.affected += 1;
        }
        Ok(true)
    }
}
