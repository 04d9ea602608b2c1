//! Operations over a selected region.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use indexmap::IndexMap;
use log::debug;

use crate::block::{kind, Block, Countable};
use crate::core::error::check_argument;
use crate::core::types::{IVec3, Result};
use crate::extent::ExtentBuffer;
use crate::function::{
    BlockReplace, CombinedFunction, Counter, ForwardCopy, GroundFunction, Naturalizer,
    RegionMaskingFilter, RegionOffset,
};
use crate::mask::{BlockMask, ExistingBlockMask, Mask};
use crate::math::direction::neighbours;
use crate::operation::{complete, BufferCommit, OperationQueue};
use crate::pattern::Pattern;
use crate::region::{CuboidRegion, Region};
use crate::shape::ArbitraryShape;
use crate::visitor::{LayerVisitor, RegionVisitor};

use super::{source_mask, EditSession};

impl EditSession<'_> {
    /// Fill a region with a pattern.
    pub fn set_blocks<P: Pattern + ?Sized>(&mut self, region: &Region, pattern: &P) -> Result<usize> {
        let mut visitor = RegionVisitor::new(region.clone(), BlockReplace::new(pattern));
        complete(&mut visitor, self)?;
        Ok(visitor.affected())
    }

    /// Replace the cells matching any of `filter` (fuzzily), or every
    /// non-air cell when there is no filter.
    pub fn replace_blocks<P: Pattern + ?Sized>(
        &mut self,
        region: &Region,
        filter: Option<&[Block]>,
        pattern: &P,
    ) -> Result<usize> {
        match filter {
            Some(blocks) => self.replace_blocks_masked(region, BlockMask::new(blocks.iter().copied()), pattern),
            None => self.replace_blocks_masked(region, ExistingBlockMask, pattern),
        }
    }

    /// Replace the cells of a region that pass `mask`.
    pub fn replace_blocks_masked<M: Mask, P: Pattern + ?Sized>(
        &mut self,
        region: &Region,
        mask: M,
        pattern: &P,
    ) -> Result<usize> {
        let filter = RegionMaskingFilter::new(mask, BlockReplace::new(pattern));
        let mut visitor = RegionVisitor::new(region.clone(), filter);
        complete(&mut visitor, self)?;
        Ok(visitor.affected())
    }

    /// Fill the one to eight cells nearest the region's centre.
    pub fn center<P: Pattern + ?Sized>(&mut self, region: &Region, pattern: &P) -> Result<usize> {
        let center = region.center();
        let cells = CuboidRegion::new(center.floor().as_ivec3(), center.ceil().as_ivec3());
        self.set_blocks(&cells.into(), pattern)
    }

    /// Fill the six outer faces of a box.
    pub fn make_cuboid_faces<P: Pattern + ?Sized>(&mut self, region: &CuboidRegion, pattern: &P) -> Result<usize> {
        self.set_blocks(&region.faces().into(), pattern)
    }

    /// Fill the outer shell of any region.
    pub fn make_faces<P: Pattern + ?Sized>(&mut self, region: &Region, pattern: &P) -> Result<usize> {
        if let Some(cuboid) = region.as_cuboid() {
            return self.make_cuboid_faces(cuboid, pattern);
        }
        let inside = region.clone();
        let mut shape = ArbitraryShape::new(region.clone(), move |pos: IVec3, default: Block| {
            inside.contains(pos).then_some(default)
        });
        shape.generate(self, pattern, true)
    }

    /// Fill the four vertical faces of a box.
    pub fn make_cuboid_walls<P: Pattern + ?Sized>(&mut self, region: &CuboidRegion, pattern: &P) -> Result<usize> {
        self.set_blocks(&region.walls().into(), pattern)
    }

    /// Fill the sides of any region, leaving its top and bottom open.
    pub fn make_walls<P: Pattern + ?Sized>(&mut self, region: &Region, pattern: &P) -> Result<usize> {
        if let Some(cuboid) = region.as_cuboid() {
            return self.make_cuboid_walls(cuboid, pattern);
        }
        let bounds = region.bounding_box();
        let (min_y, max_y) = (bounds.min.y, bounds.max.y);
        let inside = region.clone();
        // Past the floor and ceiling the shape continues, so those faces are not drawn.
        let mut shape = ArbitraryShape::new(region.clone(), move |pos: IVec3, default: Block| {
            if pos.y < min_y || pos.y > max_y {
                return Some(default);
            }
            inside.contains(pos).then_some(default)
        });
        shape.generate(self, pattern, true)
    }

    /// Place the pattern on top of the highest non-air cell of each column.
    pub fn overlay_cuboid_blocks<P: Pattern + ?Sized>(&mut self, region: &Region, pattern: &P) -> Result<usize> {
        let replace = RegionOffset::new(IVec3::Y, BlockReplace::new(pattern));
        let bounds = region.bounding_box();
        let mut visitor = LayerVisitor::new(
            region.clone(),
            bounds.min.y,
            bounds.max.y,
            GroundFunction::new(ExistingBlockMask, replace),
        );
        complete(&mut visitor, self)?;
        Ok(visitor.function().affected())
    }

    /// Give each column a grass, dirt and stone profile.
    pub fn naturalize_cuboid_blocks(&mut self, region: &Region) -> Result<usize> {
        let bounds = region.bounding_box();
        let mut visitor = LayerVisitor::new(region.clone(), bounds.min.y, bounds.max.y, Naturalizer::new());
        complete(&mut visitor, self)?;
        Ok(visitor.function().affected())
    }

    /// Repeat a region `count` times along `dir`, each copy one region size
    /// further. Copies must not overlap the source; nothing is buffered.
    pub fn stack_cuboid_region(&mut self, region: &Region, dir: IVec3, count: usize, copy_air: bool) -> Result<usize> {
        check_argument(count >= 1, "stack count must be at least 1")?;
        let size = region.bounding_box().size();
        let mut affected = 0;
        for i in 1..=count as i32 {
            let copy = RegionMaskingFilter::new(source_mask(copy_air), ForwardCopy::new(dir * size * i));
            let mut visitor = RegionVisitor::new(region.clone(), copy);
            complete(&mut visitor, self)?;
            affected += visitor.affected();
        }
        debug!("Stacked {count} copies, {affected} cells");
        Ok(affected)
    }

    /// Move a region `distance` cells along `dir`, leaving `replacement`
    /// (air by default) behind. Source and destination may overlap.
    pub fn move_region(
        &mut self,
        region: &Region,
        dir: IVec3,
        distance: i32,
        copy_air: bool,
        replacement: Option<&dyn Pattern>,
    ) -> Result<usize> {
        let buffer = Rc::new(RefCell::new(ExtentBuffer::new(region.clone())));
        let replacement: &dyn Pattern = replacement.unwrap_or(&Block::AIR);

        let copy = RegionMaskingFilter::new(
            source_mask(copy_air),
            ForwardCopy::buffered(dir * distance, Rc::clone(&buffer)),
        );
        let mut copy = RegionVisitor::new(region.clone(), CombinedFunction::new(copy, BlockReplace::new(replacement)));
        let mut commit = BufferCommit::new(Rc::clone(&buffer));

        let mut queue = OperationQueue::new();
        queue.offer(&mut copy);
        queue.offer(&mut commit);
        complete(&mut queue, self)?;
        drop(queue);

        debug!("Moved {} cells, {} staged", copy.affected(), commit.affected());
        Ok(copy.affected())
    }

    /// Same as [`move_region`](Self::move_region).
    pub fn move_cuboid_region(
        &mut self,
        region: &Region,
        dir: IVec3,
        distance: i32,
        copy_air: bool,
        replacement: Option<&dyn Pattern>,
    ) -> Result<usize> {
        self.move_region(region, dir, distance, copy_air, replacement)
    }

    /// Fill everything inside a region's walls, keeping walls `thickness`
    /// cells thick. Passable cells reachable from the bounding box faces
    /// count as outside.
    pub fn hollow_out_region<P: Pattern + ?Sized>(&mut self, region: &Region, thickness: i32, pattern: &P) -> Result<usize> {
        let bounds = region.bounding_box();
        let (min, max) = (bounds.min, bounds.max);
        let mut outside = HashSet::new();

        for x in min.x..=max.x {
            for y in min.y..=max.y {
                self.recurse_hollow(region, IVec3::new(x, y, min.z), &mut outside);
                self.recurse_hollow(region, IVec3::new(x, y, max.z), &mut outside);
            }
        }
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                self.recurse_hollow(region, IVec3::new(min.x, y, z), &mut outside);
                self.recurse_hollow(region, IVec3::new(max.x, y, z), &mut outside);
            }
        }
        for z in min.z..=max.z {
            for x in min.x..=max.x {
                self.recurse_hollow(region, IVec3::new(x, min.y, z), &mut outside);
                self.recurse_hollow(region, IVec3::new(x, max.y, z), &mut outside);
            }
        }

        for _ in 1..thickness {
            let grown: Vec<IVec3> = region
                .iter()
                .filter(|p| neighbours(*p).any(|n| outside.contains(&n)))
                .collect();
            outside.extend(grown);
        }

        let mut affected = 0;
        for pos in region.iter() {
            if neighbours(pos).any(|n| outside.contains(&n)) {
                continue;
            }
            if self.set_block(pos, pattern.apply(pos))? {
                affected += 1;
            }
        }
        Ok(affected)
    }

    fn recurse_hollow(&self, region: &Region, origin: IVec3, outside: &mut HashSet<IVec3>) {
        let mut queue = std::collections::VecDeque::from([origin]);
        while let Some(current) = queue.pop_front() {
            if !kind::can_pass_through(self.block_at(current).id) {
                continue;
            }
            if !outside.insert(current) || !region.contains(current) {
                continue;
            }
            queue.extend(neighbours(current));
        }
    }

    /// Clear a square column `apothem - 1` cells around `pos`, from `pos`
    /// upwards, `height` cells tall.
    pub fn remove_above(&mut self, pos: IVec3, apothem: i32, height: i32) -> Result<usize> {
        check_argument(apothem >= 1, "apothem must be at least 1")?;
        check_argument(height >= 1, "height must be at least 1")?;
        let region = CuboidRegion::new(
            pos + IVec3::new(-apothem + 1, 0, -apothem + 1),
            pos + IVec3::new(apothem - 1, height - 1, apothem - 1),
        );
        self.set_blocks(&region.into(), &Block::AIR)
    }

    /// Like [`remove_above`](Self::remove_above), extending downwards.
    pub fn remove_below(&mut self, pos: IVec3, apothem: i32, height: i32) -> Result<usize> {
        check_argument(apothem >= 1, "apothem must be at least 1")?;
        check_argument(height >= 1, "height must be at least 1")?;
        let region = CuboidRegion::new(
            pos + IVec3::new(-apothem + 1, 0, -apothem + 1),
            pos + IVec3::new(apothem - 1, -height + 1, apothem - 1),
        );
        self.set_blocks(&region.into(), &Block::AIR)
    }

    /// Clear every block of type `id` in the cube around `pos`.
    pub fn remove_near(&mut self, pos: IVec3, id: u16, apothem: i32) -> Result<usize> {
        check_argument(apothem >= 1, "apothem must be at least 1")?;
        let region: Region = CuboidRegion::from_center(pos, apothem - 1).into();
        self.replace_blocks_masked(&region, BlockMask::new([Block::any(id)]), &Block::AIR)
    }

    /// Count cells whose type is one of `ids`, any data.
    pub fn count_block(&mut self, region: &Region, ids: &[u16]) -> Result<usize> {
        self.count_blocks(region, &ids.iter().map(|&id| Block::any(id)).collect::<Vec<_>>())
    }

    /// Count cells matching any of `blocks`.
    pub fn count_blocks(&mut self, region: &Region, blocks: &[Block]) -> Result<usize> {
        let filter = RegionMaskingFilter::new(BlockMask::new(blocks.iter().copied()), Counter::default());
        let mut visitor = RegionVisitor::new(region.clone(), filter);
        complete(&mut visitor, self)?;
        Ok(visitor.into_function().into_inner().count())
    }

    /// Block type counts, least common first. Ties keep first-seen order.
    pub fn block_distribution(&self, region: &Region) -> Vec<Countable<u16>> {
        self.distribution(region, |b| b.id)
    }

    /// Like [`block_distribution`](Self::block_distribution), keeping data
    /// variants apart.
    pub fn block_distribution_with_data(&self, region: &Region) -> Vec<Countable<Block>> {
        self.distribution(region, |b| b.normalized())
    }

    fn distribution<K: Copy + Eq + std::hash::Hash>(&self, region: &Region, key: impl Fn(Block) -> K) -> Vec<Countable<K>> {
        let mut counts: IndexMap<K, usize> = IndexMap::new();
        let mut tally = |pos: IVec3| *counts.entry(key(self.block_at(pos))).or_insert(0) += 1;

        match region.as_cuboid() {
            Some(cuboid) => {
                let (min, max) = (cuboid.min, cuboid.max);
                for x in min.x..=max.x {
                    for y in min.y..=max.y {
                        for z in min.z..=max.z {
                            tally(IVec3::new(x, y, z));
                        }
                    }
                }
            }
            None => region.iter().for_each(&mut tally),
        }

        let mut distribution: Vec<Countable<K>> =
            counts.into_iter().map(|(id, amount)| Countable::new(id, amount)).collect();
        distribution.sort_by_key(|c| c.amount);
        distribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ids;
    use crate::core::config::EditConfig;
    use crate::region::EllipsoidRegion;
    use crate::world::{MemoryWorld, World};

    fn stone() -> Block {
        Block::new(ids::STONE)
    }

    fn cuboid(a: IVec3, b: IVec3) -> Region {
        CuboidRegion::new(a, b).into()
    }

    #[test]
    fn test_set_and_replace() {
        let mut world = MemoryWorld::new(31);
        world.put(IVec3::ZERO, Block::new(ids::DIRT));
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        let region = cuboid(IVec3::ZERO, IVec3::new(2, 2, 2));

        assert_eq!(session.replace_blocks(&region, None, &stone()).unwrap(), 1);
        assert_eq!(session.replace_blocks(&region, Some(&[Block::AIR][..]), &Block::new(ids::GLASS)).unwrap(), 26);
        assert_eq!(session.set_blocks(&region, &stone()).unwrap(), 26);
        assert_eq!(session.count_block(&region, &[ids::STONE]).unwrap(), 27);
    }

    #[test]
    fn test_center_even_and_odd() {
        let mut world = MemoryWorld::new(31);
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        assert_eq!(session.center(&cuboid(IVec3::ZERO, IVec3::splat(2)), &stone()).unwrap(), 1);
        assert_eq!(session.center(&cuboid(IVec3::splat(10), IVec3::splat(13)), &stone()).unwrap(), 8);
    }

    #[test]
    fn test_faces_and_walls() {
        let mut world = MemoryWorld::new(31);
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        let region = cuboid(IVec3::ZERO, IVec3::splat(2));
        assert_eq!(session.make_faces(&region, &stone()).unwrap(), 26);

        let region = cuboid(IVec3::new(10, 0, 0), IVec3::new(12, 2, 2));
        assert_eq!(session.make_walls(&region, &stone()).unwrap(), 24);
        assert!(session.block_at(IVec3::new(11, 0, 1)).is_air());
    }

    #[test]
    fn test_faces_of_sphere_are_hollow() {
        let mut world = MemoryWorld::new(31);
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        let region: Region = EllipsoidRegion::sphere(IVec3::new(0, 10, 0), 3.0).into();
        let faces = session.make_faces(&region, &stone()).unwrap();
        assert!(faces > 0);
        assert_eq!(session.block_at(IVec3::new(0, 13, 0)).id, ids::STONE);
        assert!(session.block_at(IVec3::new(0, 10, 0)).is_air());
    }

    #[test]
    fn test_overlay_and_naturalize() {
        let mut world = MemoryWorld::new(31);
        world.fill(IVec3::ZERO, IVec3::new(1, 5, 1), stone());
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        let region = cuboid(IVec3::ZERO, IVec3::new(1, 10, 1));

        assert_eq!(session.naturalize_cuboid_blocks(&region).unwrap(), 16);
        assert_eq!(session.block_at(IVec3::new(0, 5, 0)).id, ids::GRASS);
        assert_eq!(session.block_at(IVec3::new(0, 2, 0)).id, ids::DIRT);
        assert_eq!(session.block_at(IVec3::new(0, 1, 0)).id, ids::STONE);

        assert_eq!(session.overlay_cuboid_blocks(&region, &Block::new(ids::SNOW)).unwrap(), 4);
        assert_eq!(session.block_at(IVec3::new(1, 6, 1)).id, ids::SNOW);
    }

    #[test]
    fn test_stack() {
        let mut world = MemoryWorld::new(31);
        world.put(IVec3::ZERO, stone());
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        let region = cuboid(IVec3::ZERO, IVec3::new(1, 0, 0));

        assert!(session.stack_cuboid_region(&region, IVec3::X, 0, true).is_err());
        assert_eq!(session.stack_cuboid_region(&region, IVec3::X, 3, false).unwrap(), 3);
        for x in [2, 4, 6] {
            assert_eq!(session.block_at(IVec3::new(x, 0, 0)).id, ids::STONE);
        }
        assert!(session.block_at(IVec3::new(3, 0, 0)).is_air());
    }

    #[test]
    fn test_overlapping_move() {
        let mut world = MemoryWorld::new(31);
        for x in 0..4 {
            world.put(IVec3::new(x, 0, 0), Block::with_data(ids::CLOTH, x as u8 + 1));
        }
        {
            let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
            let region = cuboid(IVec3::ZERO, IVec3::new(3, 0, 0));
            session.move_region(&region, IVec3::X, 1, true, None).unwrap();
        }
        assert!(world.block_at(IVec3::ZERO).is_air());
        for x in 1..5 {
            assert_eq!(world.block_at(IVec3::new(x, 0, 0)), Block::with_data(ids::CLOTH, x as u8));
        }
    }

    #[test]
    fn test_overlapping_move_without_air() {
        let mut world = MemoryWorld::new(31);
        world.put(IVec3::ZERO, stone());
        world.put(IVec3::new(2, 0, 0), Block::new(ids::GLASS));
        {
            let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
            let region = cuboid(IVec3::ZERO, IVec3::new(2, 0, 0));
            session.move_region(&region, IVec3::X, 1, false, None).unwrap();
        }
        assert!(world.block_at(IVec3::ZERO).is_air());
        assert_eq!(world.block_at(IVec3::X).id, ids::STONE);
        assert!(world.block_at(IVec3::new(2, 0, 0)).is_air());
        assert_eq!(world.block_at(IVec3::new(3, 0, 0)).id, ids::GLASS);
    }

    #[test]
    fn test_hollow_out() {
        let mut world = MemoryWorld::new(31);
        world.fill(IVec3::ONE, IVec3::splat(3), stone());
        let region = cuboid(IVec3::ZERO, IVec3::splat(4));
        {
            let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
            assert_eq!(session.hollow_out_region(&region, 1, &Block::AIR).unwrap(), 1);
        }
        assert!(world.block_at(IVec3::splat(2)).is_air());
        assert_eq!(world.block_at(IVec3::new(1, 2, 2)).id, ids::STONE);
        assert_eq!(world.len(), 26);
    }

    #[test]
    fn test_remove_helpers() {
        let mut world = MemoryWorld::new(31);
        world.fill(IVec3::splat(-3), IVec3::splat(3), stone());
        world.put(IVec3::ZERO, Block::with_data(ids::LOG, 2));
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();

        assert_eq!(session.remove_near(IVec3::ZERO, ids::LOG, 2).unwrap(), 1);
        assert_eq!(session.remove_above(IVec3::new(0, 1, 0), 1, 3).unwrap(), 3);
        assert_eq!(session.remove_below(IVec3::new(0, -1, 0), 2, 2).unwrap(), 18);
        assert!(session.remove_above(IVec3::ZERO, 0, 1).is_err());
    }

    #[test]
    fn test_distribution_sums_to_volume() {
        let mut world = MemoryWorld::new(31);
        world.fill(IVec3::ZERO, IVec3::new(3, 0, 3), stone());
        world.put(IVec3::ONE, Block::with_data(ids::CLOTH, 4));
        world.put(IVec3::new(2, 1, 2), Block::with_data(ids::CLOTH, 5));
        let session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        let region = cuboid(IVec3::ZERO, IVec3::new(3, 2, 3));

        let by_type = session.block_distribution(&region);
        assert_eq!(by_type.iter().map(|c| c.amount).sum::<usize>(), 48);
        assert_eq!(by_type.first().map(|c| c.id), Some(ids::CLOTH));
        assert_eq!(by_type.last().map(|c| c.id), Some(ids::AIR));

        let with_data = session.block_distribution_with_data(&region);
        assert_eq!(with_data.len(), 4);
        assert_eq!(with_data.iter().map(|c| c.amount).sum::<usize>(), 48);
    }
}
