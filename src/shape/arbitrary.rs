//! Shapes defined by a per-cell material function.

use std::collections::HashMap;

use crate::block::Block;
use crate::core::types::{IVec3, Result};
use crate::math::direction::neighbours;
use crate::pattern::Pattern;
use crate::region::Region;
use crate::session::EditSession;

/// A shape over the cells of a region, decided cell by cell.
///
/// `material(pos, default)` returns the block to place at `pos`, or `None`
/// when `pos` is outside the shape. `default` comes from the pattern the
/// shape is generated with. In hollow mode the function is also asked about
/// neighbouring cells, which may lie outside the region; answers are cached.
pub struct ArbitraryShape<F> {
    region: Region,
    material: F,
    cache: HashMap<IVec3, Option<Block>>,
}

impl<F: FnMut(IVec3, Block) -> Option<Block>> ArbitraryShape<F> {
    pub fn new(region: impl Into<Region>, material: F) -> Self {
        Self {
            region: region.into(),
            material,
            cache: HashMap::new(),
        }
    }

    /// Place the shape's material through `session`. A hollow shape keeps
    /// only cells with a face neighbour outside the shape.
    pub fn generate<P: Pattern + ?Sized>(
        &mut self,
        session: &mut EditSession<'_>,
        pattern: &P,
        hollow: bool,
    ) -> Result<usize> {
        let Self {
            region,
            material,
            cache,
        } = self;

        let mut affected = 0;
        for pos in region.iter() {
            let block = if hollow {
                let Some(block) = cached(material, cache, pattern, pos) else {
                    continue;
                };
                if neighbours(pos).all(|n| cached(material, cache, pattern, n).is_some()) {
                    continue;
                }
                block
            } else {
                let Some(block) = material(pos, pattern.apply(pos)) else {
                    continue;
                };
                block
            };
            if session.set_block(pos, block)? {
                affected += 1;
            }
        }
        Ok(affected)
    }
}

fn cached<F, P>(
    material: &mut F,
    cache: &mut HashMap<IVec3, Option<Block>>,
    pattern: &P,
    pos: IVec3,
) -> Option<Block>
where
    F: FnMut(IVec3, Block) -> Option<Block>,
    P: Pattern + ?Sized,
{
    *cache
        .entry(pos)
        .or_insert_with(|| material(pos, pattern.apply(pos)))
}
