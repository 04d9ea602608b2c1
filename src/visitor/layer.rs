//! Column-wise ground-seeking traversal.

use crate::core::types::{IVec2, IVec3, Result};
use crate::function::LayerFunction;
use crate::mask::{ConstMask, Mask2D};
use crate::operation::Operation;
use crate::region::Region;
use crate::session::EditSession;

/// Walks each column of a region from `max_y` down to `min_y`.
///
/// The first cell the function calls ground becomes depth 0; from there the
/// function is applied to every lower cell with an increasing depth until
/// it returns false. A column whose cell just above `max_y` is already
/// ground lies under the surface and is skipped.
pub struct LayerVisitor<F> {
    region: Region,
    min_y: i32,
    max_y: i32,
    mask: Box<dyn Mask2D>,
    function: F,
}

impl<F: LayerFunction> LayerVisitor<F> {
    pub fn new(region: impl Into<Region>, min_y: i32, max_y: i32, function: F) -> Self {
        Self {
            region: region.into(),
            min_y,
            max_y,
            mask: Box::new(ConstMask::ALWAYS),
            function,
        }
    }

    /// Only visit columns the mask accepts.
    pub fn set_mask(&mut self, mask: Box<dyn Mask2D>) {
        self.mask = mask;
    }

    pub fn function(&self) -> &F {
        &self.function
    }

    pub fn into_function(self) -> F {
        self.function
    }

    fn visit_column(&mut self, session: &mut EditSession<'_>, column: IVec2) -> Result<()> {
        let at = |y: i32| IVec3::new(column.x, y, column.y);
        if self.function.is_ground(session, at(self.max_y + 1)) {
            return Ok(());
        }

        let mut ground_y = None;
        for y in (self.min_y..=self.max_y).rev() {
            let pos = at(y);
            if ground_y.is_none() && self.function.is_ground(session, pos) {
                ground_y = Some(y);
            }
            if let Some(ground_y) = ground_y {
                if !self.function.apply(session, pos, ground_y - y)? {
                    break;
                }
            }
        }
        Ok(())
    }
}

impl<F: LayerFunction> Operation for LayerVisitor<F> {
    fn resume(&mut self, session: &mut EditSession<'_>) -> Result<bool> {
        let columns: Vec<IVec2> = self.region.columns().filter(|c| self.mask.test(*c)).collect();
        for column in columns {
            self.visit_column(session, column)?;
        }
        Ok(false)
    }
}
