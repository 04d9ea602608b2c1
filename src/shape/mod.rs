//! Shape rasterizers
//!
//! The solid rasterizers are pure: they hand each lattice offset to an
//! `emit` callback, which performs the write and reports whether it changed
//! anything. They return how many emits reported a change and stop at the
//! first error. Line-like shapes build a point set instead, see
//! [`balloon`] and [`hollow`].

pub mod arbitrary;
pub mod cylinder;
pub mod ellipsoid;
pub mod line;
pub mod pyramid;
pub mod solid;
pub mod spline;

pub use arbitrary::ArbitraryShape;
pub use cylinder::{cylinder, fit_height};
pub use ellipsoid::ellipsoid;
pub use line::line;
pub use pyramid::pyramid;
pub use solid::{balloon, hollow};
pub use spline::spline;

use crate::core::types::{IVec3, Result};

/// Run `emit` over `offsets`, counting the emits that changed something.
fn emit_all(
    offsets: impl IntoIterator<Item = IVec3>,
    emit: &mut impl FnMut(IVec3) -> Result<bool>,
) -> Result<usize> {
    let mut affected = 0;
    for offset in offsets {
        if emit(offset)? {
            affected += 1;
        }
    }
    Ok(affected)
}
