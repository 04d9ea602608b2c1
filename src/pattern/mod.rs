//! Patterns: functions from a cell to the block to place there

pub mod random;

pub use random::RandomPattern;

use crate::block::Block;
use crate::core::types::IVec3;

/// Positional block generator. Must return the same block for the same
/// cell on repeated calls.
pub trait Pattern {
    fn apply(&self, pos: IVec3) -> Block;
}

impl Pattern for Block {
    fn apply(&self, _pos: IVec3) -> Block {
        *self
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn apply(&self, pos: IVec3) -> Block {
        (**self).apply(pos)
    }
}

impl<P: Pattern + ?Sized> Pattern for Box<P> {
    fn apply(&self, pos: IVec3) -> Block {
        (**self).apply(pos)
    }
}

/// Pattern backed by a closure.
#[derive(Clone, Copy)]
pub struct FnPattern<F>(pub F);

impl<F: Fn(IVec3) -> Block> Pattern for FnPattern<F> {
    fn apply(&self, pos: IVec3) -> Block {
        (self.0)(pos)
    }
}

/// Wrap a closure as a pattern.
pub fn from_fn<F: Fn(IVec3) -> Block>(f: F) -> FnPattern<F> {
    FnPattern(f)
}
