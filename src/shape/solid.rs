//! Thickening and hollowing of point sets.

use indexmap::IndexSet;

use crate::core::types::IVec3;
use crate::math::direction::neighbours;

/// Every lattice point within `radius` of some point of `points`.
pub fn balloon(points: &IndexSet<IVec3>, radius: f64) -> IndexSet<IVec3> {
    let reach = radius.ceil() as i32;
    let mut out = IndexSet::new();
    for &tip in points {
        for x in tip.x - reach..=tip.x + reach {
            for y in tip.y - reach..=tip.y + reach {
                for z in tip.z - reach..=tip.z + reach {
                    let pos = IVec3::new(x, y, z);
                    if (pos - tip).as_dvec3().length() <= radius {
                        out.insert(pos);
                    }
                }
            }
        }
    }
    out
}

/// The points of `points` with at least one face neighbour outside the set.
pub fn hollow(points: &IndexSet<IVec3>) -> IndexSet<IVec3> {
    points
        .iter()
        .copied()
        .filter(|p| !neighbours(*p).all(|n| points.contains(&n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balloon_zero_radius_is_identity() {
        let points: IndexSet<IVec3> = [IVec3::ZERO, IVec3::X].into_iter().collect();
        assert_eq!(balloon(&points, 0.0), points);
    }

    #[test]
    fn test_balloon_unit_radius() {
        let points: IndexSet<IVec3> = [IVec3::ZERO].into_iter().collect();
        let ball = balloon(&points, 1.0);
        assert_eq!(ball.len(), 7);
        assert!(!ball.contains(&IVec3::new(1, 1, 0)));
    }

    #[test]
    fn test_hollow_removes_enclosed() {
        let points: IndexSet<IVec3> = [IVec3::ZERO].into_iter().collect();
        let ball = balloon(&points, 1.0);
        let shell = hollow(&ball);
        assert_eq!(shell.len(), 6);
        assert!(!shell.contains(&IVec3::ZERO));
    }
}
