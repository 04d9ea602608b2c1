//! Visits every cell of a region.

use crate::core::types::Result;
use crate::function::RegionFunction;
use crate::operation::Operation;
use crate::region::Region;
use crate::session::EditSession;

/// Applies a function to each cell of a region in the region's own order.
pub struct RegionVisitor<F> {
    region: Region,
    function: F,
    affected: usize,
}

impl<F: RegionFunction> RegionVisitor<F> {
    pub fn new(region: impl Into<Region>, function: F) -> Self {
        Self {
            region: region.into(),
            function,
            affected: 0,
        }
    }

    /// Cells where the function reported a change.
    pub fn affected(&self) -> usize {
        self.affected
    }

    pub fn function(&self) -> &F {
        &self.function
    }

    pub fn into_function(self) -> F {
        self.function
    }
}

impl<F: RegionFunction> Operation for RegionVisitor<F> {
    fn resume(&mut self, session: &mut EditSession<'_>) -> Result<bool> {
        for pos in self.region.iter() {
            if self.function.apply(session, pos)? {
                self.affected += 1;
            }
        }
        Ok(false)
    }
}
