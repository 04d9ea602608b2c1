//! Octant-mirrored ellipsoid rasterizer.

use crate::core::types::{DVec3, IVec3, Result};

use super::emit_all;

/// Emit the cells of an ellipsoid centred on the origin.
///
/// Half a cell is added to each radius so the boundary shell is included
/// consistently. Only the positive octant is scanned; each accepted cell is
/// emitted once per sign combination, so cells on an axis plane are emitted
/// more than once. In shell mode a cell is dropped when stepping one cell
/// outward along each axis still stays inside.
pub fn ellipsoid(
    radius: DVec3,
    filled: bool,
    mut emit: impl FnMut(IVec3) -> Result<bool>,
) -> Result<usize> {
    let radius = radius + DVec3::splat(0.5);
    let inv = radius.recip();
    let ceil = radius.ceil().as_ivec3();
    let inside = |x: f64, y: f64, z: f64| x * x + y * y + z * z <= 1.0;

    let mut affected = 0;
    let mut next_xn = 0.0;
    'x: for x in 0..=ceil.x {
        let xn = next_xn;
        next_xn = (x + 1) as f64 * inv.x;
        let mut next_yn = 0.0;
        'y: for y in 0..=ceil.y {
            let yn = next_yn;
            next_yn = (y + 1) as f64 * inv.y;
            let mut next_zn = 0.0;
            for z in 0..=ceil.z {
                let zn = next_zn;
                next_zn = (z + 1) as f64 * inv.z;

                if !inside(xn, yn, zn) {
                    if z == 0 {
                        if y == 0 {
                            break 'x;
                        }
                        break 'y;
                    }
                    break;
                }

                if !filled
                    && inside(next_xn, yn, zn)
                    && inside(xn, next_yn, zn)
                    && inside(xn, yn, next_zn)
                {
                    continue;
                }

                affected += emit_all(
                    [
                        IVec3::new(x, y, z),
                        IVec3::new(-x, y, z),
                        IVec3::new(x, -y, z),
                        IVec3::new(x, y, -z),
                        IVec3::new(-x, -y, z),
                        IVec3::new(x, -y, -z),
                        IVec3::new(-x, y, -z),
                        IVec3::new(-x, -y, -z),
                    ],
                    &mut emit,
                )?;
            }
        }
    }
    Ok(affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use indexmap::IndexSet;

    fn cells(radius: DVec3, filled: bool) -> IndexSet<IVec3> {
        let mut set = IndexSet::new();
        ellipsoid(radius, filled, |p| Ok(set.insert(p))).unwrap();
        set
    }

    #[test]
    fn test_radius_zero_is_single_cell() {
        let set = cells(DVec3::ZERO, true);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&IVec3::ZERO));
    }

    #[test]
    fn test_filled_sphere_bounds_and_symmetry() {
        let radius = 4.0;
        let set = cells(DVec3::splat(radius), true);
        for p in &set {
            assert!(p.as_dvec3().length() <= radius + 0.5);
            for flip in [IVec3::new(-1, 1, 1), IVec3::new(1, -1, 1), IVec3::new(1, 1, -1)] {
                assert!(set.contains(&(*p * flip)));
            }
        }
        assert!(set.contains(&IVec3::new(4, 0, 0)));
        assert!(!set.contains(&IVec3::new(5, 0, 0)));
    }

    #[test]
    fn test_shell_has_no_interior_cells() {
        let set = cells(DVec3::splat(5.0), false);
        let solid = cells(DVec3::splat(5.0), true);
        assert!(set.is_subset(&solid));
        assert!(!set.contains(&IVec3::ZERO));
        for p in &set {
            let abs = p.abs();
            let outward = [abs + IVec3::X, abs + IVec3::Y, abs + IVec3::Z];
            assert!(outward.iter().any(|n| !solid.contains(n)), "{p} is interior");
        }
    }

    #[test]
    fn test_error_stops_emission() {
        let mut calls = 0;
        let result = ellipsoid(DVec3::splat(3.0), true, |_| {
            calls += 1;
            if calls == 3 {
                Err(Error::ChangeLimitExceeded { limit: 2 })
            } else {
                Ok(true)
            }
        });
        assert!(result.is_err());
        assert_eq!(calls, 3);
    }
}
