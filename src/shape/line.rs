//! Straight lattice lines.

use indexmap::IndexSet;

use crate::core::types::IVec3;

/// Nearest integer, halves rounding towards positive infinity.
pub(crate) fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Cells of the line from `a` to `b`, both ends included.
///
/// The axis with the largest extent is walked one cell at a time and the
/// other two follow proportionally. Ties prefer x, then y, then z.
pub fn line(a: IVec3, b: IVec3) -> IndexSet<IVec3> {
    let delta = (b - a).abs();
    let sign = (b - a).signum();
    let dominant = delta.max_element();

    let mut points = IndexSet::new();
    if dominant == 0 {
        points.insert(a);
        return points;
    }

    let follow = |start: i32, d: i32, s: i32, step: i32, along: i32| {
        round_half_up(start as f64 + step as f64 * d as f64 / along as f64 * s as f64)
    };
    for step in 0..=dominant {
        let point = if delta.x == dominant {
            IVec3::new(
                a.x + step * sign.x,
                follow(a.y, delta.y, sign.y, step, delta.x),
                follow(a.z, delta.z, sign.z, step, delta.x),
            )
        } else if delta.y == dominant {
            IVec3::new(
                follow(a.x, delta.x, sign.x, step, delta.y),
                a.y + step * sign.y,
                follow(a.z, delta.z, sign.z, step, delta.y),
            )
        } else {
            IVec3::new(
                follow(a.x, delta.x, sign.x, step, delta.z),
                follow(a.y, delta.y, sign.y, step, delta.z),
                a.z + step * sign.z,
            )
        };
        points.insert(point);
    }
    points
}
