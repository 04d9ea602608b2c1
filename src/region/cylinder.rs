//! Vertical elliptic cylinder region.

use crate::core::types::{DVec2, IVec2, IVec3};

use super::CuboidRegion;

/// Upright cylinder with an elliptic XZ cross-section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderRegion {
    pub center: IVec2,
    radius: DVec2,
    pub min_y: i32,
    pub max_y: i32,
}

impl CylinderRegion {
    /// Cylinder over `[min_y, max_y]` with per-axis block radius.
    pub fn new(center: IVec2, radius: DVec2, min_y: i32, max_y: i32) -> Self {
        Self {
            center,
            radius: radius + DVec2::splat(0.5),
            min_y: min_y.min(max_y),
            max_y: min_y.max(max_y),
        }
    }

    pub fn radius(&self) -> DVec2 {
        self.radius - DVec2::splat(0.5)
    }

    pub fn contains_column(&self, column: IVec2) -> bool {
        ((column - self.center).as_dvec2() / self.radius).length_squared() <= 1.0
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        (self.min_y..=self.max_y).contains(&pos.y) && self.contains_column(IVec2::new(pos.x, pos.z))
    }

    pub fn bounds(&self) -> CuboidRegion {
        let r = self.radius.floor().as_ivec2();
        CuboidRegion::new(
            IVec3::new(self.center.x - r.x, self.min_y, self.center.y - r.y),
            IVec3::new(self.center.x + r.x, self.max_y, self.center.y + r.y),
        )
    }

    pub fn columns(&self) -> impl Iterator<Item = IVec2> + use<> {
        let this = *self;
        this.bounds().columns().filter(move |c| this.contains_column(*c))
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
    fn test_columns_and_height() {
        let c = CylinderRegion::new(IVec2::ZERO, DVec2::splat(2.0), 5, 3);
        // x^2 + z^2 <= 6.25
        assert_eq!(c.columns().count(), 21);
        assert_eq!(c.iter().count(), 63);
        assert!(c.contains(IVec3::new(2, 4, 1)));
        assert!(!c.contains(IVec3::new(2, 4, 2)));
        assert!(!c.contains(IVec3::new(0, 6, 0)));
        assert_eq!(c.radius(), DVec2::splat(2.0));
    }
}
