//! Region backed by an explicit point set.

use indexmap::IndexSet;

use crate::core::types::IVec3;

/// Explicit set of cells, iterated in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArbitraryRegion {
    points: IndexSet<IVec3>,
    min: IVec3,
    max: IVec3,
}

impl ArbitraryRegion {
    pub fn new(points: IndexSet<IVec3>) -> Self {
        let mut min = IVec3::MAX;
        let mut max = IVec3::MIN;
        for p in &points {
            min = min.min(*p);
            max = max.max(*p);
        }
        if points.is_empty() {
            min = IVec3::ZERO;
            max = IVec3::ZERO;
        }
        Self { points, min, max }
    }

    pub fn min(&self) -> IVec3 {
        self.min
    }

    pub fn max(&self) -> IVec3 {
        self.max
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        self.points.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.points.iter().copied()
    }

    pub fn shifted(&self, offset: IVec3) -> Self {
        Self::new(self.points.iter().map(|p| *p + offset).collect())
    }
}

impl FromIterator<IVec3> for ArbitraryRegion {
    fn from_iter<I: IntoIterator<Item = IVec3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_and_order() {
        let r: ArbitraryRegion = [IVec3::new(3, 0, 0), IVec3::new(-1, 2, 5), IVec3::new(3, 0, 0)]
            .into_iter()
            .collect();
        assert_eq!(r.len(), 2);
        assert_eq!(r.min(), IVec3::new(-1, 0, 0));
        assert_eq!(r.max(), IVec3::new(3, 2, 5));
        assert_eq!(r.iter().next(), Some(IVec3::new(3, 0, 0)));
    }

    #[test]
    fn test_empty() {
        let r = ArbitraryRegion::default();
        assert!(r.is_empty());
        assert!(!r.contains(IVec3::ZERO));
    }
}
