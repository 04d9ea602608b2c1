//! Stepped pyramid rasterizer.

use crate::core::types::{IVec3, Result};

use super::emit_all;

/// Emit a pyramid whose base layer sits on the origin. Layer `y` spans
/// `-(size - 1 - y)..=(size - 1 - y)` on both horizontal axes; a shell
/// keeps only each layer's rim.
pub fn pyramid(
    size: i32,
    filled: bool,
    mut emit: impl FnMut(IVec3) -> Result<bool>,
) -> Result<usize> {
    let height = size;
    let mut size = size;
    let mut affected = 0;
    for y in 0..=height {
        size -= 1;
        for x in 0..=size {
            for z in 0..=size {
                if filled || z == size || x == size {
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
    }
    Ok(affected)
}
