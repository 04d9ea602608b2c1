//! Weighted random choice between patterns.

use crate::block::Block;
use crate::core::error::check_argument;
use crate::core::types::{IVec3, Result};
use crate::math::hash::unit_3d;

use super::Pattern;

/// Picks one of several patterns per cell, weighted by chance.
///
/// The choice is a seeded hash of the cell, so repeated calls for the same
/// cell agree.
pub struct RandomPattern {
    entries: Vec<(Box<dyn Pattern>, f64)>,
    total: f64,
    seed: u32,
}

impl RandomPattern {
    pub fn new(seed: u32) -> Self {
        Self {
            entries: Vec::new(),
            total: 0.0,
            seed,
        }
    }

    /// Add a choice with a non-negative relative weight.
    pub fn add(&mut self, pattern: impl Pattern + 'static, chance: f64) -> Result<&mut Self> {
        check_argument(chance >= 0.0 && chance.is_finite(), "chance must be >= 0")?;
        self.entries.push((Box::new(pattern), chance));
        self.total += chance;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Pattern for RandomPattern {
    fn apply(&self, pos: IVec3) -> Block {
        let r = unit_3d(pos.x, pos.y, pos.z, self.seed) * self.total;
        let mut offset = 0.0;
        for (pattern, chance) in &self.entries {
            offset += chance;
            if r < offset {
                return pattern.apply(pos);
            }
        }
        // Only reached when every weight is zero
        self.entries
            .last()
            .map(|(p, _)| p.apply(pos))
            .unwrap_or(Block::AIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ids;
    use crate::region::CuboidRegion;

    #[test]
    fn test_weights() {
        let mut pattern = RandomPattern::new(99);
        pattern.add(Block::new(ids::STONE), 3.0).unwrap();
        pattern.add(Block::new(ids::DIRT), 1.0).unwrap();

        let region = CuboidRegion::new(IVec3::ZERO, IVec3::new(19, 19, 19));
        let stone = region
            .iter()
            .filter(|p| pattern.apply(*p).id == ids::STONE)
            .count();
        let ratio = stone as f64 / region.volume() as f64;
        assert!((ratio - 0.75).abs() < 0.04, "ratio {ratio}");
    }

    #[test]
    fn test_stable_per_cell() {
        let mut pattern = RandomPattern::new(5);
        pattern.add(Block::new(ids::STONE), 1.0).unwrap();
        pattern.add(Block::new(ids::GLASS), 1.0).unwrap();
        let p = IVec3::new(3, 1, -7);
        assert_eq!(pattern.apply(p), pattern.apply(p));
    }

    #[test]
    fn test_empty_and_invalid() {
        let mut pattern = RandomPattern::new(0);
        assert!(pattern.apply(IVec3::ZERO).is_air());
        assert!(pattern.add(Block::new(ids::STONE), -1.0).is_err());
        assert!(pattern.is_empty());
    }
}
