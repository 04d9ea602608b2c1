//! Solids, lines and expression-driven shapes.

use indexmap::IndexSet;
use log::warn;

use crate::block::Block;
use crate::core::error::check_argument;
use crate::core::types::{DVec2, DVec3, IVec3, Result};
use crate::expression::{Expression, ExpressionError, VariableHandle};
use crate::math::interpolation::Node;
use crate::pattern::Pattern;
use crate::region::Region;
use crate::shape::{self, ArbitraryShape};

use super::EditSession;

fn handle(expression: &Expression, name: &str) -> std::result::Result<VariableHandle, ExpressionError> {
    expression
        .variable(name)
        .ok_or_else(|| ExpressionError::UnknownVariable(name.to_string()))
}

/// `value` truncated to a `T`, if finite and in range.
fn to_int<T: TryFrom<i64>>(value: f64) -> Option<T> {
    if !value.is_finite() {
        return None;
    }
    T::try_from(value.trunc() as i64).ok()
}

fn check_unit(unit: DVec3) -> Result<()> {
    check_argument(unit.cmpne(DVec3::ZERO).all(), "unit must be non-zero on every axis")
}

impl EditSession<'_> {
    /// Sphere of `radius` around `pos`; a hollow sphere is one cell thick.
    pub fn make_sphere<P: Pattern + ?Sized>(
        &mut self,
        pos: IVec3,
        pattern: &P,
        radius: f64,
        filled: bool,
    ) -> Result<usize> {
        self.make_ellipsoid(pos, pattern, DVec3::splat(radius), filled)
    }

    pub fn make_ellipsoid<P: Pattern + ?Sized>(
        &mut self,
        pos: IVec3,
        pattern: &P,
        radius: DVec3,
        filled: bool,
    ) -> Result<usize> {
        check_argument(radius.min_element() >= 0.0, "radius must be >= 0")?;
        shape::ellipsoid(radius, filled, |offset| {
            self.set_block_pattern(pos + offset, pattern)
        })
    }

    /// Upright cylinder standing on `pos`. A negative height grows it
    /// downwards instead; the world's height range cuts it short.
    pub fn make_cylinder<P: Pattern + ?Sized>(
        &mut self,
        pos: IVec3,
        pattern: &P,
        radius: f64,
        height: i32,
        filled: bool,
    ) -> Result<usize> {
        self.make_elliptic_cylinder(pos, pattern, DVec2::splat(radius), height, filled)
    }

    pub fn make_elliptic_cylinder<P: Pattern + ?Sized>(
        &mut self,
        pos: IVec3,
        pattern: &P,
        radius: DVec2,
        height: i32,
        filled: bool,
    ) -> Result<usize> {
        check_argument(radius.min_element() >= 0.0, "radius must be >= 0")?;
        let Some((base, height)) = shape::fit_height(pos, height, self.max_y()) else {
            return Ok(0);
        };
        shape::cylinder(radius, height, filled, |offset| {
            self.set_block_pattern(base + offset, pattern)
        })
    }

    /// Stepped pyramid with its base layer centred on `pos`.
    pub fn make_pyramid<P: Pattern + ?Sized>(
        &mut self,
        pos: IVec3,
        pattern: &P,
        size: i32,
        filled: bool,
    ) -> Result<usize> {
        shape::pyramid(size, filled, |offset| {
            self.set_block_pattern(pos + offset, pattern)
        })
    }

    /// Line from `a` to `b`, thickened to `radius`.
    pub fn draw_line<P: Pattern + ?Sized>(
        &mut self,
        pattern: &P,
        a: IVec3,
        b: IVec3,
        radius: f64,
        filled: bool,
    ) -> Result<usize> {
        check_argument(radius >= 0.0, "radius must be >= 0")?;
        let points = shape::line(a, b);
        self.set_thick_points(&points, pattern, radius, filled)
    }

    /// Spline through `nodes`, all sharing one tangent shape, thickened to
    /// `radius`.
    pub fn draw_spline<P: Pattern + ?Sized>(
        &mut self,
        pattern: &P,
        nodes: &[DVec3],
        tension: f64,
        bias: f64,
        continuity: f64,
        quality: f64,
        radius: f64,
        filled: bool,
    ) -> Result<usize> {
        check_argument(radius >= 0.0, "radius must be >= 0")?;
        let nodes: Vec<Node> = nodes
            .iter()
            .map(|p| Node::new(*p).with_shape(tension, bias, continuity))
            .collect();
        let points = shape::spline(&nodes, quality)?;
        self.set_thick_points(&points, pattern, radius, filled)
    }

    fn set_thick_points<P: Pattern + ?Sized>(
        &mut self,
        points: &IndexSet<IVec3>,
        pattern: &P,
        radius: f64,
        filled: bool,
    ) -> Result<usize> {
        let mut points = shape::balloon(points, radius);
        if !filled {
            points = shape::hollow(&points);
        }
        let mut affected = 0;
        for pos in points {
            if self.set_block_pattern(pos, pattern)? {
                affected += 1;
            }
        }
        Ok(affected)
    }

    /// Fill the cells of `region` for which `expression` is positive.
    ///
    /// The expression sees `x`, `y`, `z` as the cell mapped through
    /// `(pos - zero) / unit`, and `type`, `data` preset to the pattern's
    /// block for that cell. Whatever it leaves in `type` and `data` is
    /// placed. A cell whose evaluation fails, or whose type or data is out
    /// of range, is logged and left out; a source that does not compile
    /// fails before anything is written.
    pub fn make_shape<P: Pattern + ?Sized>(
        &mut self,
        region: &Region,
        zero: DVec3,
        unit: DVec3,
        pattern: &P,
        expression: &str,
        hollow: bool,
    ) -> Result<usize> {
        check_unit(unit)?;
        let mut expression = Expression::compile(expression, &["x", "y", "z", "type", "data"])?;
        let type_var = handle(&expression, "type")?;
        let data_var = handle(&expression, "data")?;

        let material = |pos: IVec3, default: Block| -> Option<Block> {
            let scaled = (pos.as_dvec3() - zero) / unit;
            let inputs = [
                scaled.x,
                scaled.y,
                scaled.z,
                f64::from(default.id),
                f64::from(default.data_value()),
            ];
            match expression.evaluate(&inputs) {
                Ok(v) if v <= 0.0 => None,
                Ok(_) => {
                    let id = expression.value(type_var);
                    let data = expression.value(data_var);
                    match (to_int::<u16>(id), to_int::<u8>(data)) {
                        (Some(id), Some(data)) => Some(Block::with_data(id, data)),
                        _ => {
                            warn!("Shape expression gave type {id}, data {data} at {pos}");
                            None
                        }
                    }
                }
                Err(e) => {
                    warn!("Shape expression failed at {pos}: {e}");
                    None
                }
            }
        };

        ArbitraryShape::new(region.clone(), material).generate(self, pattern, hollow)
    }

    /// Rebuild `region` by pulling each cell's block from elsewhere.
    ///
    /// For every cell the expression gets `x`, `y`, `z` mapped through
    /// `(pos - zero) / unit` and may reassign them; the result, mapped
    /// back to the world, names the source cell. All sources are read
    /// before the first write. A cell whose evaluation fails is logged
    /// and left as it is.
    pub fn deform_region(
        &mut self,
        region: &Region,
        zero: DVec3,
        unit: DVec3,
        expression: &str,
    ) -> Result<usize> {
        check_unit(unit)?;
        let mut expression = Expression::compile(expression, &["x", "y", "z"])?;
        let vars = [
            handle(&expression, "x")?,
            handle(&expression, "y")?,
            handle(&expression, "z")?,
        ];

        let mut staged = Vec::with_capacity(region.volume());
        for pos in region.iter() {
            let scaled = (pos.as_dvec3() - zero) / unit;
            let mapped = expression.evaluate(&scaled.to_array()).and_then(|_| {
                Ok(DVec3::new(
                    expression.finite_value(vars[0])?,
                    expression.finite_value(vars[1])?,
                    expression.finite_value(vars[2])?,
                ))
            });
            let mapped = match mapped {
                Ok(mapped) => mapped,
                Err(e) => {
                    warn!("Deform expression failed at {pos}: {e}");
                    continue;
                }
            };
            let source = (mapped * unit + zero + DVec3::splat(0.5)).floor().as_ivec3();
            staged.push((pos, self.block_at(source)));
        }

        let mut affected = 0;
        for (pos, block) in staged {
            if self.set_block(pos, block)? {
                affected += 1;
            }
        }
        Ok(affected)
    }
}
