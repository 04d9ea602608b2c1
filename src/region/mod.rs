//! Iterable volumes of lattice cells
//!
//! `Region` is a closed set of shapes. Callers that have a faster path for
//! boxes match on `Region::Cuboid` and fall back to `iter()` otherwise.

pub mod arbitrary;
pub mod cuboid;
pub mod cylinder;
pub mod ellipsoid;

pub use arbitrary::ArbitraryRegion;
pub use cuboid::CuboidRegion;
pub use cylinder::CylinderRegion;
pub use ellipsoid::EllipsoidRegion;

use indexmap::IndexSet;

use crate::core::types::{DVec3, IVec2, IVec3};

/// A finite set of cells with bounds and a stable iteration order.
#[derive(Clone, Debug, PartialEq)]
pub enum Region {
    Cuboid(CuboidRegion),
    Ellipsoid(EllipsoidRegion),
    /// Flat region: an upright cylinder, iterable by column.
    Cylinder(CylinderRegion),
    Arbitrary(ArbitraryRegion),
}

impl Region {
    pub fn min_point(&self) -> IVec3 {
        self.bounding_box().min
    }

    pub fn max_point(&self) -> IVec3 {
        self.bounding_box().max
    }

    /// Smallest box containing every cell.
    pub fn bounding_box(&self) -> CuboidRegion {
        match self {
            Region::Cuboid(r) => *r,
            Region::Ellipsoid(r) => r.bounds(),
            Region::Cylinder(r) => r.bounds(),
            Region::Arbitrary(r) => CuboidRegion::new(r.min(), r.max()),
        }
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        match self {
            Region::Cuboid(r) => r.contains(pos),
            Region::Ellipsoid(r) => r.contains(pos),
            Region::Cylinder(r) => r.contains(pos),
            Region::Arbitrary(r) => r.contains(pos),
        }
    }

    /// Every cell exactly once, in the shape's natural order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = IVec3> + '_> {
        match self {
            Region::Cuboid(r) => Box::new(r.iter()),
            Region::Ellipsoid(r) => Box::new(r.iter()),
            Region::Cylinder(r) => Box::new(r.iter()),
            Region::Arbitrary(r) => Box::new(r.iter()),
        }
    }

    /// Number of cells.
    pub fn volume(&self) -> usize {
        match self {
            Region::Cuboid(r) => r.volume(),
            Region::Arbitrary(r) => r.len(),
            _ => self.iter().count(),
        }
    }

    /// Midpoint of the bounding box.
    pub fn center(&self) -> DVec3 {
        let b = self.bounding_box();
        (b.min.as_dvec3() + b.max.as_dvec3()) / 2.0
    }

    /// Distinct (x, z) columns the region covers.
    pub fn columns(&self) -> Box<dyn Iterator<Item = IVec2> + '_> {
        match self {
            Region::Cuboid(r) => Box::new(r.columns()),
            Region::Cylinder(r) => Box::new(r.columns()),
            _ => {
                let columns: IndexSet<IVec2> =
                    self.iter().map(|p| IVec2::new(p.x, p.z)).collect();
                Box::new(columns.into_iter())
            }
        }
    }

    /// The same shape translated by `offset`.
    pub fn shifted(&self, offset: IVec3) -> Region {
        match self {
            Region::Cuboid(r) => Region::Cuboid(r.shifted(offset)),
            Region::Ellipsoid(r) => {
                Region::Ellipsoid(EllipsoidRegion::new(r.center + offset, r.radius()))
            }
            Region::Cylinder(r) => Region::Cylinder(CylinderRegion::new(
                r.center + IVec2::new(offset.x, offset.z),
                r.radius(),
                r.min_y + offset.y,
                r.max_y + offset.y,
            )),
            Region::Arbitrary(r) => Region::Arbitrary(r.shifted(offset)),
        }
    }

    pub fn as_cuboid(&self) -> Option<&CuboidRegion> {
        match self {
            Region::Cuboid(r) => Some(r),
            _ => None,
        }
    }
}

impl From<CuboidRegion> for Region {
    fn from(r: CuboidRegion) -> Self {
        Region::Cuboid(r)
    }
}

impl From<EllipsoidRegion> for Region {
    fn from(r: EllipsoidRegion) -> Self {
        Region::Ellipsoid(r)
    }
}

impl From<CylinderRegion> for Region {
    fn from(r: CylinderRegion) -> Self {
        Region::Cylinder(r)
    }
}

impl From<ArbitraryRegion> for Region {
    fn from(r: ArbitraryRegion) -> Self {
        Region::Arbitrary(r)
    }
}
