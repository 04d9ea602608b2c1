//! Per-cell callbacks driven by visitors
//!
//! A [`RegionFunction`] is applied once per visited cell and reports
//! whether it did something. A [`LayerFunction`] is driven column by
//! column from the top down, told how deep below the first ground cell it
//! is, and stops the column by returning false.

pub mod block;
pub mod copy;
pub mod filter;
pub mod garden;
pub mod ground;
pub mod naturalizer;
pub mod tree;

pub use block::{BlockReplace, Counter};
pub use copy::ForwardCopy;
pub use filter::{CombinedFunction, RegionMaskingFilter, RegionOffset};
pub use garden::GardenPatchGenerator;
pub use ground::GroundFunction;
pub use naturalizer::Naturalizer;
pub use tree::{SimpleTree, TreeGenerator};

use crate::core::types::{IVec3, Result};
use crate::session::EditSession;

pub trait RegionFunction {
    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool>;
}

impl<F: RegionFunction + ?Sized> RegionFunction for &mut F {
    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        (**self).apply(session, pos)
    }
}

impl<F: RegionFunction + ?Sized> RegionFunction for Box<F> {
    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        (**self).apply(session, pos)
    }
}

pub trait LayerFunction {
    /// Whether `pos` counts as the top of the ground.
    fn is_ground(&self, session: &EditSession<'_>, pos: IVec3) -> bool;

    /// Handle a cell `depth` layers below the ground surface (0 = surface).
    /// Returning false ends the column.
    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3, depth: i32) -> Result<bool>;
}

impl<F: LayerFunction + ?Sized> LayerFunction for &mut F {
    fn is_ground(&self, session: &EditSession<'_>, pos: IVec3) -> bool {
        (**self).is_ground(session, pos)
    }

    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3, depth: i32) -> Result<bool> {
        (**self).apply(session, pos, depth)
    }
}
