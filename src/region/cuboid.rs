//! Axis-aligned box region.

use indexmap::IndexSet;

use crate::core::types::{IVec2, IVec3};

use super::ArbitraryRegion;

/// Inclusive axis-aligned box between two corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CuboidRegion {
    pub min: IVec3,
    pub max: IVec3,
}

impl CuboidRegion {
    /// Box spanning two corners given in any order.
    pub fn new(a: IVec3, b: IVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Cube of side `2 * apothem + 1` around `origin`.
    pub fn from_center(origin: IVec3, apothem: i32) -> Self {
        let r = IVec3::splat(apothem);
        Self::new(origin - r, origin + r)
    }

    /// Clamp the Y span into `[min_y, max_y]`.
    pub fn clamp_y(mut self, min_y: i32, max_y: i32) -> Self {
        self.min.y = self.min.y.clamp(min_y, max_y);
        self.max.y = self.max.y.clamp(min_y, max_y);
        self
    }

    pub fn size(&self) -> IVec3 {
        self.max - self.min + IVec3::ONE
    }

    pub fn volume(&self) -> usize {
        let s = self.size().as_i64vec3();
        (s.x * s.y * s.z) as usize
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }

    /// Cells with x innermost, then y, then z.
    pub fn iter(&self) -> impl Iterator<Item = IVec3> + use<> {
        let (min, max) = (self.min, self.max);
        (min.z..=max.z).flat_map(move |z| {
            (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| IVec3::new(x, y, z)))
        })
    }

    /// (x, z) columns with x innermost.
    pub fn columns(&self) -> impl Iterator<Item = IVec2> + use<> {
        let (min, max) = (self.min, self.max);
        (min.z..=max.z).flat_map(move |z| (min.x..=max.x).map(move |x| IVec2::new(x, z)))
    }

    pub fn shifted(&self, offset: IVec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// The six one-block-thick outer faces.
    pub fn faces(&self) -> ArbitraryRegion {
        let (min, max) = (self.min, self.max);
        let floor = Self::new(min, IVec3::new(max.x, min.y, max.z));
        let ceiling = Self::new(IVec3::new(min.x, max.y, min.z), max);
        let mut slabs = self.side_slabs().to_vec();
        slabs.extend([floor, ceiling]);
        Self::union(&slabs)
    }

    /// The four vertical side faces, without floor and ceiling.
    pub fn walls(&self) -> ArbitraryRegion {
        Self::union(&self.side_slabs())
    }

    fn side_slabs(&self) -> [Self; 4] {
        let (min, max) = (self.min, self.max);
        [
            Self::new(min, IVec3::new(min.x, max.y, max.z)),
            Self::new(IVec3::new(max.x, min.y, min.z), max),
            Self::new(min, IVec3::new(max.x, max.y, min.z)),
            Self::new(IVec3::new(min.x, min.y, max.z), max),
        ]
    }

    fn union(slabs: &[Self]) -> ArbitraryRegion {
        let points: IndexSet<IVec3> = slabs.iter().flat_map(|s| s.iter()).collect();
        ArbitraryRegion::new(points)
    }
}
