//! Noise-thresholded masks used to thin generator output.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::core::error::check_argument;
use crate::core::types::{DVec2, DVec3, IVec2, IVec3, Result};
use crate::math::hash::unit_3d;
use crate::world::World;

use super::{Mask, Mask2D};

/// Source of noise values in [0, 1].
pub trait NoiseGenerator {
    fn noise_2d(&self, pos: DVec2) -> f64;
    fn noise_3d(&self, pos: DVec3) -> f64;
}

/// Uncorrelated per-cell noise from a seeded lattice hash.
#[derive(Clone, Copy, Debug)]
pub struct WhiteNoise {
    seed: u32,
}

impl WhiteNoise {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl NoiseGenerator for WhiteNoise {
    fn noise_2d(&self, pos: DVec2) -> f64 {
        let p = pos.floor().as_ivec2();
        unit_3d(p.x, 0, p.y, self.seed ^ 0x9e37_79b9)
    }

    fn noise_3d(&self, pos: DVec3) -> f64 {
        let p = pos.floor().as_ivec3();
        unit_3d(p.x, p.y, p.z, self.seed)
    }
}

/// Smooth fractal Perlin noise.
pub struct PerlinNoise {
    noise: Fbm<Perlin>,
    frequency: f64,
}

impl PerlinNoise {
    pub fn new(seed: u32, frequency: f64, octaves: usize) -> Self {
        let noise = Fbm::<Perlin>::new(seed).set_octaves(octaves.max(1));
        Self { noise, frequency }
    }
}

impl NoiseGenerator for PerlinNoise {
    fn noise_2d(&self, pos: DVec2) -> f64 {
        let p = pos * self.frequency;
        ((self.noise.get([p.x, p.y]) + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    fn noise_3d(&self, pos: DVec3) -> f64 {
        let p = pos * self.frequency;
        ((self.noise.get([p.x, p.y, p.z]) + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

/// Accepts a cell when its noise sample is at most `density`, so roughly
/// `density` of all cells pass for uniform noise.
pub struct NoiseFilter<N: NoiseGenerator = WhiteNoise> {
    noise: N,
    density: f64,
}

impl<N: NoiseGenerator> NoiseFilter<N> {
    /// `density` must lie in [0, 1].
    pub fn new(noise: N, density: f64) -> Result<Self> {
        check_argument((0.0..=1.0).contains(&density), "density must be in [0, 1]")?;
        Ok(Self { noise, density })
    }

    pub fn density(&self) -> f64 {
        self.density
    }
}

impl<N: NoiseGenerator> Mask for NoiseFilter<N> {
    fn test(&self, _world: &dyn World, pos: IVec3) -> bool {
        self.noise.noise_3d(pos.as_dvec3()) <= self.density
    }
}

impl<N: NoiseGenerator> Mask2D for NoiseFilter<N> {
    fn test(&self, column: IVec2) -> bool {
        self.noise.noise_2d(column.as_dvec2()) <= self.density
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::CuboidRegion;
    use crate::world::MemoryWorld;

    #[test]
    fn test_density_bounds() {
        assert!(NoiseFilter::new(WhiteNoise::new(1), 1.5).is_err());
        assert!(NoiseFilter::new(WhiteNoise::new(1), -0.1).is_err());
        assert!(NoiseFilter::new(WhiteNoise::new(1), 0.0).is_ok());
    }

    #[test]
    fn test_pass_rate_tracks_density() {
        let world = MemoryWorld::new(63);
        let filter = NoiseFilter::new(WhiteNoise::new(42), 0.2).unwrap();
        let region = CuboidRegion::new(IVec3::ZERO, IVec3::new(29, 9, 29));
        let passed = region
            .iter()
            .filter(|p| Mask::test(&filter, &world, *p))
            .count();
        let ratio = passed as f64 / region.volume() as f64;
        assert!((ratio - 0.2).abs() < 0.03, "ratio {ratio}");
    }

    #[test]
    fn test_deterministic_per_column() {
        let filter = NoiseFilter::new(WhiteNoise::new(7), 0.5).unwrap();
        let c = IVec2::new(12, -4);
        assert_eq!(Mask2D::test(&filter, c), Mask2D::test(&filter, c));
    }

    #[test]
    fn test_perlin_in_unit_range() {
        let noise = PerlinNoise::new(3, 0.1, 3);
        for i in 0..100 {
            let v = noise.noise_3d(DVec3::new(i as f64 * 1.3, 2.0, -(i as f64)));
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
