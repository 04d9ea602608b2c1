//! Mask algebra: positional predicates that gate writes and visitation.
//!
//! Masks read the world through a shared reference passed per call, so the
//! same mask value can be tested from a visitor and from the masking stage.
//! Combinators own their children and evaluate them in order, stopping at
//! the first decisive result.

pub mod block;
pub mod bounds;
pub mod combinator;
pub mod noise;

pub use block::{BlockMask, BlockTypeMask, ExistingBlockMask};
pub use bounds::{BoundedHeightMask, RegionMask};
pub use combinator::{MaskIntersection, MaskNegation, MaskUnion};
pub use noise::{NoiseFilter, NoiseGenerator, PerlinNoise, WhiteNoise};

use crate::core::types::{IVec2, IVec3};
use crate::world::World;

/// Predicate over a cell. Must not mutate anything observable.
pub trait Mask {
    fn test(&self, world: &dyn World, pos: IVec3) -> bool;
}

/// Predicate over an (x, z) column.
pub trait Mask2D {
    fn test(&self, column: IVec2) -> bool;
}

impl<M: Mask + ?Sized> Mask for Box<M> {
    fn test(&self, world: &dyn World, pos: IVec3) -> bool {
        (**self).test(world, pos)
    }
}

impl<M: Mask + ?Sized> Mask for &M {
    fn test(&self, world: &dyn World, pos: IVec3) -> bool {
        (**self).test(world, pos)
    }
}

/// Mask backed by a closure.
#[derive(Clone, Copy)]
pub struct FnMask<F>(pub F);

impl<F: Fn(&dyn World, IVec3) -> bool> Mask for FnMask<F> {
    fn test(&self, world: &dyn World, pos: IVec3) -> bool {
        (self.0)(world, pos)
    }
}

/// Wrap a closure as a mask.
pub fn from_fn<F: Fn(&dyn World, IVec3) -> bool>(f: F) -> FnMask<F> {
    FnMask(f)
}

impl<M: Mask2D + ?Sized> Mask2D for Box<M> {
    fn test(&self, column: IVec2) -> bool {
        (**self).test(column)
    }
}

/// Mask with a constant answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstMask(pub bool);

impl ConstMask {
    pub const ALWAYS: ConstMask = ConstMask(true);
    pub const NEVER: ConstMask = ConstMask(false);
}

impl Mask for ConstMask {
    fn test(&self, _world: &dyn World, _pos: IVec3) -> bool {
        self.0
    }
}

impl Mask2D for ConstMask {
    fn test(&self, _column: IVec2) -> bool {
        self.0
    }
}

/// Boxed mask that accepts every cell.
pub fn always() -> Box<dyn Mask> {
    Box::new(ConstMask::ALWAYS)
}

/// Invert a mask.
pub fn negate<M: Mask + 'static>(mask: M) -> MaskNegation {
    MaskNegation::new(Box::new(mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::MemoryWorld;

    #[test]
    fn test_const_and_closure_masks() {
        let world = MemoryWorld::new(15);
        assert!(Mask::test(&ConstMask::ALWAYS, &world, IVec3::ZERO));
        assert!(!Mask::test(&ConstMask::NEVER, &world, IVec3::ZERO));
        let above = from_fn(|_: &dyn World, p: IVec3| p.y > 3);
        assert!(above.test(&world, IVec3::new(0, 4, 0)));
        assert!(!negate(above).test(&world, IVec3::new(0, 4, 0)));
        assert!(always().test(&world, IVec3::splat(-9)));
    }
}
