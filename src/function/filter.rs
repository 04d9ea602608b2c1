//! Function combinators.

use crate::core::types::{IVec3, Result};
use crate::mask::Mask;
use crate::session::EditSession;

use super::RegionFunction;

/// Applies the inner function only where the mask holds.
pub struct RegionMaskingFilter<M, F> {
    mask: M,
    function: F,
}

impl<M: Mask, F: RegionFunction> RegionMaskingFilter<M, F> {
    pub fn new(mask: M, function: F) -> Self {
        Self { mask, function }
    }

    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<M: Mask, F: RegionFunction> RegionFunction for RegionMaskingFilter<M, F> {
    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        if !self.mask.test(session.world(), pos) {
            return Ok(false);
        }
        self.function.apply(session, pos)
    }
}

/// Applies the inner function at a fixed offset from the visited cell.
pub struct RegionOffset<F> {
    offset: IVec3,
    function: F,
}

impl<F: RegionFunction> RegionOffset<F> {
    pub fn new(offset: IVec3, function: F) -> Self {
        Self { offset, function }
    }
}

impl<F: RegionFunction> RegionFunction for RegionOffset<F> {
    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        self.function.apply(session, pos + self.offset)
    }
}

/// Runs both functions on every cell; true if either did something.
pub struct CombinedFunction<A, B> {
    first: A,
    second: B,
}

impl<A: RegionFunction, B: RegionFunction> CombinedFunction<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: RegionFunction, B: RegionFunction> RegionFunction for CombinedFunction<A, B> {
    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        let a = self.first.apply(session, pos)?;
        let b = self.second.apply(session, pos)?;
        Ok(a || b)
    }
}
