//! Basic block-level functions.

use crate::core::types::{IVec3, Result};
use crate::pattern::Pattern;
use crate::session::EditSession;

use super::RegionFunction;

/// Writes the pattern's block for each visited cell.
pub struct BlockReplace<P> {
    pattern: P,
}

impl<P: Pattern> BlockReplace<P> {
    pub fn new(pattern: P) -> Self {
        Self { pattern }
    }
}

impl<P: Pattern> RegionFunction for BlockReplace<P> {
    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        session.set_block(pos, self.pattern.apply(pos))
    }
}

/// Counts the cells it is applied to.
#[derive(Debug, Default)]
pub struct Counter {
    count: usize,
}

impl Counter {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl RegionFunction for Counter {
    fn apply(&mut self, _session: &mut EditSession<'_>, _pos: IVec3) -> Result<bool> {
        self.count += 1;
        Ok(true)
    }
}
