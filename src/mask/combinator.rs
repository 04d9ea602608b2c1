//! Boolean combinators over masks.

use crate::core::types::IVec3;
use crate::world::World;

use super::Mask;

/// AND over children in order; empty is true.
#[derive(Default)]
pub struct MaskIntersection {
    masks: Vec<Box<dyn Mask>>,
}

impl MaskIntersection {
    pub fn new(masks: Vec<Box<dyn Mask>>) -> Self {
        Self { masks }
    }

    pub fn with(mut self, mask: impl Mask + 'static) -> Self {
        self.masks.push(Box::new(mask));
        self
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

impl Mask for MaskIntersection {
    fn test(&self, world: &dyn World, pos: IVec3) -> bool {
        self.masks.iter().all(|m| m.test(world, pos))
    }
}

/// OR over children in order; empty is false.
#[derive(Default)]
pub struct MaskUnion {
    masks: Vec<Box<dyn Mask>>,
}

impl MaskUnion {
    pub fn new(masks: Vec<Box<dyn Mask>>) -> Self {
        Self { masks }
    }

    pub fn with(mut self, mask: impl Mask + 'static) -> Self {
        self.masks.push(Box::new(mask));
        self
    }
}

impl Mask for MaskUnion {
    fn test(&self, world: &dyn World, pos: IVec3) -> bool {
        self.masks.iter().any(|m| m.test(world, pos))
    }
}

/// Inverts its child.
pub struct MaskNegation {
    mask: Box<dyn Mask>,
}

impl MaskNegation {
    pub fn new(mask: Box<dyn Mask>) -> Self {
        Self { mask }
    }
}

impl Mask for MaskNegation {
    fn test(&self, world: &dyn World, pos: IVec3) -> bool {
        !self.mask.test(world, pos)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::mask::{from_fn, ConstMask};
    use crate::world::MemoryWorld;

    /// Mask that counts how often it is consulted.
    fn counting(answer: bool, hits: Rc<Cell<usize>>) -> impl Mask + 'static {
        from_fn(move |_: &dyn World, _: IVec3| {
            hits.set(hits.get() + 1);
            answer
        })
    }

    #[test]
    fn test_empty_identities() {
        let world = MemoryWorld::new(15);
        assert!(MaskIntersection::default().test(&world, IVec3::ZERO));
        assert!(!MaskUnion::default().test(&world, IVec3::ZERO));
    }

    #[test]
    fn test_intersection_short_circuits() {
        let world = MemoryWorld::new(15);
        let hits = Rc::new(Cell::new(0));
        let mask = MaskIntersection::default()
            .with(ConstMask::NEVER)
            .with(counting(true, hits.clone()));
        assert!(!mask.test(&world, IVec3::ZERO));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_union_short_circuits() {
        let world = MemoryWorld::new(15);
        let hits = Rc::new(Cell::new(0));
        let mask = MaskUnion::default()
            .with(ConstMask::ALWAYS)
            .with(counting(false, hits.clone()));
        assert!(mask.test(&world, IVec3::ZERO));
        assert_eq!(hits.get(), 0);

        let mask = MaskUnion::default()
            .with(counting(false, hits.clone()))
            .with(ConstMask::ALWAYS);
        assert!(mask.test(&world, IVec3::ZERO));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_negation() {
        let world = MemoryWorld::new(15);
        let mask = MaskNegation::new(Box::new(MaskUnion::default()));
        assert!(mask.test(&world, IVec3::ZERO));
    }
}
