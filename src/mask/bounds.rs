//! Geometric masks.

use crate::core::types::IVec3;
use crate::region::Region;
use crate::world::World;

use super::Mask;

/// Accepts cells with `min_y <= y <= max_y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundedHeightMask {
    pub min_y: i32,
    pub max_y: i32,
}

impl BoundedHeightMask {
    pub fn new(min_y: i32, max_y: i32) -> Self {
        Self { min_y, max_y }
    }
}

impl Mask for BoundedHeightMask {
    fn test(&self, _world: &dyn World, pos: IVec3) -> bool {
        pos.y >= self.min_y && pos.y <= self.max_y
    }
}

/// Accepts cells inside a region.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionMask {
    region: Region,
}

impl RegionMask {
    pub fn new(region: impl Into<Region>) -> Self {
        Self {
            region: region.into(),
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }
}

impl Mask for RegionMask {
    fn test(&self, _world: &dyn World, pos: IVec3) -> bool {
        self.region.contains(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::EllipsoidRegion;
    use crate::world::MemoryWorld;

    #[test]
    fn test_height_bounds_inclusive() {
        let world = MemoryWorld::new(15);
        let mask = BoundedHeightMask::new(2, 4);
        assert!(!mask.test(&world, IVec3::new(0, 1, 0)));
        assert!(mask.test(&world, IVec3::new(0, 2, 0)));
        assert!(mask.test(&world, IVec3::new(0, 4, 0)));
        assert!(!mask.test(&world, IVec3::new(0, 5, 0)));
    }

    #[test]
    fn test_region_mask() {
        let world = MemoryWorld::new(15);
        let mask = RegionMask::new(EllipsoidRegion::sphere(IVec3::ZERO, 1.0));
        assert!(mask.test(&world, IVec3::new(1, 0, 0)));
        assert!(!mask.test(&world, IVec3::new(2, 0, 0)));
    }
}
