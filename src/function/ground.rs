//! Applies a function to the topmost ground cell of each column.

use crate::core::types::{IVec3, Result};
use crate::mask::Mask;
use crate::session::EditSession;

use super::{LayerFunction, RegionFunction};

/// Ground is wherever `mask` holds; the inner function runs once per
/// column, on the surface cell only.
pub struct GroundFunction<M, F> {
    mask: M,
    function: F,
    affected: usize,
}

impl<M: Mask, F: RegionFunction> GroundFunction<M, F> {
    pub fn new(mask: M, function: F) -> Self {
        Self {
            mask,
            function,
            affected: 0,
        }
    }

    /// Surface cells where the inner function reported a change.
    pub fn affected(&self) -> usize {
        self.affected
    }
}

impl<M: Mask, F: RegionFunction> LayerFunction for GroundFunction<M, F> {
    fn is_ground(&self, session: &EditSession<'_>, pos: IVec3) -> bool {
        self.mask.test(session.world(), pos)
    }

    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3, depth: i32) -> Result<bool> {
        if depth == 0 && self.function.apply(session, pos)? {
            self.affected += 1;
        }
        Ok(false)
    }
}
