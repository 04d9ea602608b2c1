//! Lattice points along a Kochanek-Bartels spline.

use indexmap::IndexSet;

use crate::core::error::{check_argument, Error};
use crate::core::types::{IVec3, Result};
use crate::math::interpolation::{KochanekBartels, Node};

use super::line::round_half_up;

/// Sample the curve through `nodes` and round each sample to a cell.
///
/// The parameter step is `1 / length / quality`, so longer curves and
/// higher qualities produce more samples.
pub fn spline(nodes: &[Node], quality: f64) -> Result<IndexSet<IVec3>> {
    check_argument(quality > 0.0, "spline quality must be positive")?;
    let curve = KochanekBartels::new(nodes)
        .ok_or_else(|| Error::invalid("spline needs at least one node"))?;

    let step = 1.0 / curve.arc_length(0.0, 1.0) / quality;
    let mut points = IndexSet::new();
    let mut t = 0.0;
    while t <= 1.0 {
        if let Some(p) = curve.position(t) {
            points.insert(IVec3::new(round_half_up(p.x), round_half_up(p.y), round_half_up(p.z)));
        }
        t += step;
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DVec3;

    #[test]
    fn test_single_node() {
        let points = spline(&[Node::new(DVec3::new(1.2, 2.0, 3.6))], 1.0).unwrap();
        assert_eq!(points.into_iter().collect::<Vec<_>>(), vec![IVec3::new(1, 2, 4)]);
    }

    #[test]
    fn test_straight_spline_is_connected() {
        let nodes = [Node::new(DVec3::ZERO), Node::new(DVec3::new(10.0, 0.0, 0.0))];
        let points = spline(&nodes, 2.0).unwrap();
        for x in 0..=10 {
            assert!(points.contains(&IVec3::new(x, 0, 0)), "missing {x}");
        }
        assert!(points.iter().all(|p| p.y == 0 && p.z == 0));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(spline(&[], 1.0).is_err());
        assert!(spline(&[Node::new(DVec3::ZERO)], 0.0).is_err());
    }
}
