//! Upright elliptic cylinder rasterizer.

use crate::core::types::{DVec2, IVec3, Result};

use super::emit_all;

/// Normalise a cylinder's base and height against the world's height range.
///
/// A negative height extrudes downwards, so the base moves down by that
/// much. A base below 0 is raised to 0, and a cylinder poking above
/// `max_y` is cut short. Returns `None` for a zero height.
pub fn fit_height(base: IVec3, height: i32, max_y: i32) -> Option<(IVec3, i32)> {
    let (mut base, mut height) = match height {
        0 => return None,
        h if h < 0 => (base - IVec3::new(0, -h, 0), -h),
        h => (base, h),
    };
    if base.y < 0 {
        base.y = 0;
    } else if base.y + height - 1 > max_y {
        height = max_y - base.y + 1;
    }
    Some((base, height))
}

/// Emit the cells of a cylinder standing on the origin, `height` layers
/// tall. Each footprint cell is mirrored into the four quadrants.
pub fn cylinder(
    radius: DVec2,
    height: i32,
    filled: bool,
    mut emit: impl FnMut(IVec3) -> Result<bool>,
) -> Result<usize> {
    let radius = radius + DVec2::splat(0.5);
    let inv = radius.recip();
    let ceil = radius.ceil().as_ivec2();
    let inside = |x: f64, z: f64| x * x + z * z <= 1.0;

    let mut affected = 0;
    let mut next_xn = 0.0;
    'x: for x in 0..=ceil.x {
        let xn = next_xn;
        next_xn = (x + 1) as f64 * inv.x;
        let mut next_zn = 0.0;
        for z in 0..=ceil.y {
            let zn = next_zn;
            next_zn = (z + 1) as f64 * inv.y;

            if !inside(xn, zn) {
                if z == 0 {
                    break 'x;
                }
                break;
            }

            if !filled && inside(next_xn, zn) && inside(xn, next_zn) {
                continue;
            }

            for y in 0..height {
                affected += emit_all(
                    [
                        IVec3::new(x, y, z),
                        IVec3::new(-x, y, z),
                        IVec3::new(x, y, -z),
                        IVec3::new(-x, y, -z),
                    ],
                    &mut emit,
                )?;
            }
        }
    }
    Ok(affected)
}
