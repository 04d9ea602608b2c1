//! Surface treatments and vegetation.
//!
//! The column passes (`thaw`, `simulate_snow`, `green`) visit every column
//! whose centre lies within `radius` of the origin on the XZ plane and scan
//! it from the top of the world down to y = 1, acting on the first cell that
//! matters and then moving on.

use log::debug;

use crate::block::{ids, kind, Block};
use crate::core::types::{IVec2, IVec3, Result};
use crate::function::{GardenPatchGenerator, GroundFunction, TreeGenerator};
use crate::mask::{ExistingBlockMask, NoiseFilter, WhiteNoise};
use crate::operation::complete;
use crate::region::CuboidRegion;
use crate::visitor::LayerVisitor;

use super::EditSession;

/// Share of columns a pumpkin patch may start in.
const PUMPKIN_DENSITY: f64 = 0.02;

/// How far below the base a forest scan looks for ground.
const FOREST_DEPTH: i32 = 10;

/// Columns within `radius` of `origin`, measured at the origin's height.
fn columns_within(origin: IVec3, radius: f64) -> impl Iterator<Item = IVec2> {
    let r = radius.ceil() as i32;
    let radius_sq = radius * radius;
    (origin.x - r..=origin.x + r)
        .flat_map(move |x| (origin.z - r..=origin.z + r).map(move |z| IVec2::new(x, z)))
        .filter(move |c| {
            let d = (*c - IVec2::new(origin.x, origin.z)).as_dvec2();
            d.length_squared() <= radius_sq
        })
}

impl EditSession<'_> {
    /// Melt the top of each column: ice turns to still water and snow
    /// cover disappears.
    pub fn thaw(&mut self, origin: IVec3, radius: f64) -> Result<usize> {
        let water = Block::new(ids::STATIONARY_WATER);
        let mut affected = 0;
        for column in columns_within(origin, radius) {
            for y in (1..=self.max_y()).rev() {
                let pos = IVec3::new(column.x, y, column.y);
                let changed = match self.block_at(pos).id {
                    ids::AIR => continue,
                    ids::ICE => self.set_block(pos, water)?,
                    ids::SNOW => self.set_block(pos, Block::AIR)?,
                    _ => false,
                };
                if changed {
                    affected += 1;
                }
                break;
            }
        }
        Ok(affected)
    }

    /// Freeze surface water to ice and lay snow on the top solid cell of
    /// each column. Translucent tops and the world ceiling stay bare.
    pub fn simulate_snow(&mut self, origin: IVec3, radius: f64) -> Result<usize> {
        let max_y = self.max_y();
        let mut affected = 0;
        for column in columns_within(origin, radius) {
            for y in (1..=max_y).rev() {
                let pos = IVec3::new(column.x, y, column.y);
                let id = self.block_at(pos).id;
                if id == ids::AIR {
                    continue;
                }

                let changed = if id == ids::WATER || id == ids::STATIONARY_WATER {
                    self.set_block(pos, Block::new(ids::ICE))?
                } else if kind::is_translucent(id) || y == max_y {
                    false
                } else {
                    self.set_block(pos + IVec3::Y, Block::new(ids::SNOW))?
                };
                if changed {
                    affected += 1;
                }
                break;
            }
        }
        Ok(affected)
    }

    /// Turn the topmost dirt of each column into grass. Liquids and solid
    /// blocks shield what is below them. With `only_normal_dirt`, dirt
    /// variants other than 0 are left alone.
    pub fn green(&mut self, origin: IVec3, radius: f64, only_normal_dirt: bool) -> Result<usize> {
        let grass = Block::new(ids::GRASS);
        let mut affected = 0;
        for column in columns_within(origin, radius) {
            for y in (1..=self.max_y()).rev() {
                let pos = IVec3::new(column.x, y, column.y);
                let block = self.block_at(pos);
                if block.id == ids::DIRT {
                    if (!only_normal_dirt || block.data_value() == 0) && self.set_block(pos, grass)? {
                        affected += 1;
                    }
                    break;
                }
                if kind::is_liquid(block.id) || !kind::can_pass_through(block.id) {
                    break;
                }
            }
        }
        Ok(affected)
    }

    /// Scatter pumpkin patches over the ground within `apothem` columns of
    /// `pos`, from 5 below to 10 above it. Returns the number of patches.
    pub fn make_pumpkin_patches(&mut self, pos: IVec3, apothem: i32) -> Result<usize> {
        let region = CuboidRegion::new(
            pos + IVec3::new(-apothem, -5, -apothem),
            pos + IVec3::new(apothem, 10, apothem),
        )
        .clamp_y(0, self.max_y());

        let ground = GroundFunction::new(ExistingBlockMask, GardenPatchGenerator::default());
        let mut visitor = LayerVisitor::new(region, region.min.y, region.max.y, ground);
        let seed = self.rng().u32(..);
        visitor.set_mask(Box::new(NoiseFilter::new(WhiteNoise::new(seed), PUMPKIN_DENSITY)?));
        complete(&mut visitor, self)?;

        let patches = visitor.function().affected();
        debug!("Grew {patches} pumpkin patches around {pos}");
        Ok(patches)
    }

    /// Plant trees in the square of `size` columns around `base`.
    ///
    /// A column is considered when its cell at the base height is empty,
    /// and then planted with probability `density`. The first grass or dirt
    /// found within 10 cells below the base gets a tree on top; snow on the
    /// way down is cleared and anything else stops the column.
    pub fn make_forest<T: TreeGenerator + ?Sized>(
        &mut self,
        base: IVec3,
        size: i32,
        density: f64,
        trees: &mut T,
    ) -> Result<usize> {
        let mut affected = 0;
        for x in base.x - size..=base.x + size {
            for z in base.z - size..=base.z + size {
                if !self.block_at(IVec3::new(x, base.y, z)).is_air() {
                    continue;
                }
                if self.rng().f64() >= density {
                    continue;
                }

                for y in (base.y - FOREST_DEPTH..=base.y).rev() {
                    let pos = IVec3::new(x, y, z);
                    match self.block_at(pos).id {
                        ids::GRASS | ids::DIRT => {
                            trees.generate(self, pos + IVec3::Y)?;
                            affected += 1;
                            break;
                        }
                        ids::SNOW => {
                            self.set_block(pos, Block::AIR)?;
                        }
                        ids::AIR => {}
                        _ => break,
                    }
                }
            }
        }
        debug!("Planted {affected} trees around {base}");
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EditConfig;
    use crate::world::{MemoryWorld, World};

    fn session(world: &mut MemoryWorld) -> EditSession<'_> {
        EditSession::new(world, EditConfig::default()).unwrap()
    }

    /// Remembers where it was asked to grow, without writing anything.
    #[derive(Default)]
    struct Planter {
        spots: Vec<IVec3>,
    }

    impl TreeGenerator for Planter {
        fn generate(&mut self, _session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
            self.spots.push(pos);
            Ok(true)
        }
    }

    #[test]
    fn test_columns_within_radius() {
        assert_eq!(columns_within(IVec3::new(3, 7, 3), 0.0).count(), 1);
        assert_eq!(columns_within(IVec3::ZERO, 1.0).count(), 5);
        assert_eq!(columns_within(IVec3::ZERO, 1.5).count(), 9);
    }

    #[test]
    fn test_thaw() {
        let mut world = MemoryWorld::new(15);
        world.fill(IVec3::new(-2, 0, -2), IVec3::new(2, 3, 2), Block::new(ids::STONE));
        world.put(IVec3::new(0, 4, 0), Block::new(ids::ICE));
        world.put(IVec3::new(1, 4, 0), Block::new(ids::SNOW));
        world.put(IVec3::new(2, 4, 0), Block::new(ids::SNOW));

        let affected = session(&mut world).thaw(IVec3::new(0, 8, 0), 1.0).unwrap();
        assert_eq!(affected, 2);
        assert_eq!(world.block_at(IVec3::new(0, 4, 0)).id, ids::STATIONARY_WATER);
        assert!(world.block_at(IVec3::new(1, 4, 0)).is_air());
        assert_eq!(world.block_at(IVec3::new(2, 4, 0)).id, ids::SNOW);
        assert_eq!(world.block_at(IVec3::new(0, 3, 0)).id, ids::STONE);
    }

    #[test]
    fn test_simulate_snow() {
        let mut world = MemoryWorld::new(15);
        world.fill(IVec3::new(-2, 0, -2), IVec3::new(2, 2, 2), Block::new(ids::STONE));
        world.put(IVec3::new(0, 2, 0), Block::new(ids::WATER));
        world.put(IVec3::new(1, 3, 0), Block::new(ids::GLASS));

        let affected = session(&mut world).simulate_snow(IVec3::ZERO, 1.0).unwrap();
        assert_eq!(affected, 4);
        assert_eq!(world.block_at(IVec3::new(0, 2, 0)).id, ids::ICE);
        assert!(world.block_at(IVec3::new(0, 3, 0)).is_air());
        assert!(world.block_at(IVec3::new(1, 4, 0)).is_air());
        for pos in [IVec3::new(-1, 3, 0), IVec3::new(0, 3, 1), IVec3::new(0, 3, -1)] {
            assert_eq!(world.block_at(pos).id, ids::SNOW);
        }
    }

    #[test]
    fn test_snow_skips_world_ceiling() {
        let mut world = MemoryWorld::new(7);
        world.put(IVec3::new(0, 7, 0), Block::new(ids::STONE));
        assert_eq!(session(&mut world).simulate_snow(IVec3::ZERO, 0.0).unwrap(), 0);
    }

    #[test]
    fn test_green() {
        let mut world = MemoryWorld::new(15);
        world.fill(IVec3::new(-1, 0, -1), IVec3::new(1, 3, 1), Block::new(ids::DIRT));
        world.put(IVec3::new(1, 3, 0), Block::with_data(ids::DIRT, 1));
        world.put(IVec3::new(-1, 4, 0), Block::new(ids::STATIONARY_WATER));
        world.put(IVec3::new(0, 4, 1), Block::new(ids::TORCH));
        world.put(IVec3::new(0, 4, -1), Block::new(ids::STONE));

        let affected = session(&mut world).green(IVec3::ZERO, 1.0, true).unwrap();
        assert_eq!(affected, 2);
        assert_eq!(world.block_at(IVec3::new(0, 3, 0)).id, ids::GRASS);
        assert_eq!(world.block_at(IVec3::new(0, 3, 1)).id, ids::GRASS);
        assert_eq!(world.block_at(IVec3::new(1, 3, 0)).id, ids::DIRT);
        assert_eq!(world.block_at(IVec3::new(-1, 3, 0)).id, ids::DIRT);
        assert_eq!(world.block_at(IVec3::new(0, 3, -1)).id, ids::DIRT);

        let affected = session(&mut world).green(IVec3::ZERO, 1.0, false).unwrap();
        assert_eq!(affected, 1);
        assert_eq!(world.block_at(IVec3::new(1, 3, 0)).id, ids::GRASS);
    }

    #[test]
    fn test_pumpkin_patches_on_grass() {
        let mut world = MemoryWorld::new(31);
        world.fill(IVec3::new(-20, 0, -20), IVec3::new(20, 0, 20), Block::new(ids::GRASS));

        let patches = session(&mut world).make_pumpkin_patches(IVec3::new(0, 1, 0), 20).unwrap();
        assert!(patches > 0);
        assert!(patches < 120, "{patches} patches");
        let leaves = world.iter().filter(|(_, b)| b.id == ids::LEAVES).count();
        assert!(leaves >= patches);
        assert!(world.iter().all(|(p, _)| p.y <= 3));
    }

    #[test]
    fn test_forest_placement() {
        let mut world = MemoryWorld::new(31);
        world.fill(IVec3::new(-3, 0, -3), IVec3::new(3, 0, 3), Block::new(ids::GRASS));
        world.put(IVec3::new(0, 1, 0), Block::new(ids::SNOW));
        world.put(IVec3::new(1, 1, 0), Block::new(ids::STONE));
        world.put(IVec3::new(2, 3, 2), Block::new(ids::STONE));

        let mut planter = Planter::default();
        let planted = session(&mut world)
            .make_forest(IVec3::new(0, 3, 0), 3, 1.0, &mut planter)
            .unwrap();
        assert_eq!(planted, 47);
        assert_eq!(planter.spots.len(), 47);
        assert!(planter.spots.iter().all(|p| p.y == 1));
        assert!(planter.spots.contains(&IVec3::new(0, 1, 0)));
        assert!(!planter.spots.contains(&IVec3::new(1, 1, 0)));
        assert!(world.block_at(IVec3::new(0, 1, 0)).is_air());
    }

    #[test]
    fn test_forest_zero_density() {
        let mut world = MemoryWorld::new(31);
        world.fill(IVec3::new(-3, 0, -3), IVec3::new(3, 0, 3), Block::new(ids::GRASS));
        let mut planter = Planter::default();
        let planted = session(&mut world)
            .make_forest(IVec3::new(0, 3, 0), 3, 0.0, &mut planter)
            .unwrap();
        assert_eq!(planted, 0);
    }
}
