//! Flood fills for pools and liquids.

use crate::block::Block;
use crate::core::error::check_argument;
use crate::core::types::{IVec3, Result};
use crate::function::BlockReplace;
use crate::mask::{negate, BlockMask, BoundedHeightMask, ExistingBlockMask, Mask, MaskIntersection, MaskUnion, RegionMask};
use crate::operation::complete;
use crate::pattern::Pattern;
use crate::region::{CuboidRegion, EllipsoidRegion};
use crate::visitor::{DownwardVisitor, NonRisingVisitor, RecursiveVisitor};

use super::EditSession;

impl EditSession<'_> {
    /// Fill the empty cells connected to `origin` within `radius`, from
    /// `origin.y` down through `depth` layers. Without `recursive` the fill
    /// only spreads sideways on the origin's layer and then falls straight
    /// down.
    pub fn fill_xz<P: Pattern + ?Sized>(
        &mut self,
        origin: IVec3,
        pattern: &P,
        radius: f64,
        depth: i32,
        recursive: bool,
    ) -> Result<usize> {
        check_argument(radius >= 0.0, "radius must be >= 0")?;
        check_argument(depth >= 1, "depth must be >= 1")?;

        let mask = MaskIntersection::default()
            .with(RegionMask::new(EllipsoidRegion::sphere(origin, radius)))
            .with(BoundedHeightMask::new((origin.y - depth + 1).max(0), self.max_y().min(origin.y)))
            .with(negate(ExistingBlockMask));
        let replace = BlockReplace::new(pattern);

        if recursive {
            let mut visitor = RecursiveVisitor::new(mask, replace);
            visitor.visit(origin);
            complete(&mut visitor, self)?;
            Ok(visitor.affected())
        } else {
            let mut visitor = DownwardVisitor::new(mask, replace, origin.y);
            visitor.visit(origin);
            complete(&mut visitor, self)?;
            Ok(visitor.affected())
        }
    }

    /// Remove the liquid connected to the cells around `origin`, within
    /// `radius`.
    pub fn drain_area(&mut self, origin: IVec3, radius: f64) -> Result<usize> {
        check_argument(radius >= 0.0, "radius must be >= 0")?;

        let mask = MaskIntersection::default()
            .with(BoundedHeightMask::new(0, self.max_y()))
            .with(RegionMask::new(EllipsoidRegion::sphere(origin, radius)))
            .with(self.world().create_liquid_mask());
        let seeds: Vec<IVec3> = CuboidRegion::from_center(origin, 1)
            .iter()
            .filter(|p| mask.test(self.world(), *p))
            .collect();

        let mut visitor = RecursiveVisitor::new(mask, BlockReplace::new(Block::AIR));
        for seed in seeds {
            visitor.visit(seed);
        }
        complete(&mut visitor, self)?;
        Ok(visitor.affected())
    }

    /// Level liquid around `origin`: every moving or stationary cell of the
    /// given types, and every air cell it can flow into without rising,
    /// becomes `stationary`.
    pub fn fix_liquid(&mut self, origin: IVec3, radius: f64, moving: u16, stationary: u16) -> Result<usize> {
        check_argument(radius >= 0.0, "radius must be >= 0")?;

        let liquid = || BlockMask::new([Block::any(moving), Block::any(stationary)]);
        let mask = MaskIntersection::default()
            .with(BoundedHeightMask::new(0, origin.y.min(self.max_y())))
            .with(RegionMask::new(EllipsoidRegion::sphere(origin, radius)))
            .with(MaskUnion::default().with(liquid()).with(BlockMask::new([Block::AIR])));

        let origins = liquid();
        let seeds: Vec<IVec3> = CuboidRegion::from_center(origin, 1)
            .iter()
            .filter(|p| origins.test(self.world(), *p))
            .collect();

        let mut visitor = NonRisingVisitor::new(mask, BlockReplace::new(Block::new(stationary)));
        for seed in seeds {
            visitor.visit(seed);
        }
        complete(&mut visitor, self)?;
        Ok(visitor.affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ids;
    use crate::core::config::EditConfig;
    use crate::world::{MemoryWorld, World};

    /// A 5x5 stone basin, floor at y = 0, walls up to y = 3.
    fn basin() -> MemoryWorld {
        let mut world = MemoryWorld::new(31);
        world.fill(IVec3::new(-2, 0, -2), IVec3::new(2, 3, 2), Block::new(ids::STONE));
        world.fill(IVec3::new(-1, 1, -1), IVec3::new(1, 3, 1), Block::AIR);
        world
    }

    #[test]
    fn test_fill_xz_single_cell() {
        let mut world = MemoryWorld::new(31);
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        let water = Block::new(ids::WATER);
        assert_eq!(session.fill_xz(IVec3::new(0, 5, 0), &water, 0.0, 1, false).unwrap(), 1);
        assert_eq!(session.block_at(IVec3::new(0, 5, 0)).id, ids::WATER);
        assert!(session.block_at(IVec3::new(1, 5, 0)).is_air());
        assert!(session.block_at(IVec3::new(0, 4, 0)).is_air());
    }

    #[test]
    fn test_fill_xz_basin() {
        let mut world = basin();
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        let water = Block::new(ids::WATER);
        assert_eq!(session.fill_xz(IVec3::new(0, 3, 0), &water, 5.0, 3, true).unwrap(), 27);
        assert_eq!(session.fill_xz(IVec3::new(0, 3, 0), &water, 5.0, 3, true).unwrap(), 0);
    }

    #[test]
    fn test_fill_xz_arguments() {
        let mut world = MemoryWorld::new(31);
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        assert!(session.fill_xz(IVec3::ZERO, &Block::AIR, -1.0, 1, true).is_err());
        assert!(session.fill_xz(IVec3::ZERO, &Block::AIR, 1.0, 0, true).is_err());
    }

    #[test]
    fn test_drain() {
        let mut world = basin();
        world.fill(IVec3::new(-1, 1, -1), IVec3::new(1, 2, 1), Block::new(ids::STATIONARY_WATER));
        {
            let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
            assert_eq!(session.drain_area(IVec3::new(0, 3, 0), 5.0).unwrap(), 18);
        }
        assert!(world.iter().all(|(_, b)| b.id == ids::STONE));
    }

    #[test]
    fn test_fix_liquid_levels_pool() {
        let mut world = basin();
        world.fill(IVec3::new(-1, 1, -1), IVec3::new(1, 1, 1), Block::new(ids::WATER));
        world.put(IVec3::new(0, 2, 0), Block::new(ids::WATER));
        {
            let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
            let affected = session
                .fix_liquid(IVec3::new(0, 2, 0), 5.0, ids::WATER, ids::STATIONARY_WATER)
                .unwrap();
            assert_eq!(affected, 18);
        }
        assert_eq!(world.block_at(IVec3::new(1, 2, 1)).id, ids::STATIONARY_WATER);
        assert!(world.block_at(IVec3::new(0, 3, 0)).is_air());
    }
}
