//! Ellipsoid region.

use crate::core::types::{DVec3, IVec3};

use super::CuboidRegion;

/// Ellipsoid around a lattice centre. The stored radius already includes
/// the half-block margin so boundary cells are included consistently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipsoidRegion {
    pub center: IVec3,
    radius: DVec3,
}

impl EllipsoidRegion {
    /// Ellipsoid with per-axis block radius `radius`.
    pub fn new(center: IVec3, radius: DVec3) -> Self {
        Self {
            center,
            radius: radius + DVec3::splat(0.5),
        }
    }

    pub fn sphere(center: IVec3, radius: f64) -> Self {
        Self::new(center, DVec3::splat(radius))
    }

    /// Radius as given at construction.
    pub fn radius(&self) -> DVec3 {
        self.radius - DVec3::splat(0.5)
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        ((pos - self.center).as_dvec3() / self.radius).length_squared() <= 1.0
    }

    /// Tight lattice bounding box.
    pub fn bounds(&self) -> CuboidRegion {
        let r = self.radius.floor().as_ivec3();
        CuboidRegion::new(self.center - r, self.center + r)
    }

    pub fn iter(&self) -> impl Iterator<Item = IVec3> + use<> {
        let this = *self;
        this.bounds().iter().filter(move |p| this.contains(*p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_radius_is_single_cell() {
        let e = EllipsoidRegion::sphere(IVec3::new(4, 5, 6), 0.0);
        let cells: Vec<IVec3> = e.iter().collect();
        assert_eq!(cells, vec![IVec3::new(4, 5, 6)]);
    }

    #[test]
    fn test_contains_boundary() {
        let e = EllipsoidRegion::sphere(IVec3::ZERO, 2.0);
        assert!(e.contains(IVec3::new(2, 0, 0)));
        assert!(!e.contains(IVec3::new(3, 0, 0)));
        assert!(!e.contains(IVec3::new(2, 2, 0)));
        assert_eq!(e.radius(), DVec3::splat(2.0));
    }

    #[test]
    fn test_iter_matches_contains() {
        let e = EllipsoidRegion::new(IVec3::ZERO, DVec3::new(3.0, 1.0, 2.0));
        let n = e.iter().count();
        let brute = CuboidRegion::from_center(IVec3::ZERO, 5)
            .iter()
            .filter(|p| e.contains(*p))
            .count();
        assert_eq!(n, brute);
    }
}
