//! Rejects writes the world cannot store.

use std::any::Any;

use crate::block::Block;
use crate::core::types::{IVec3, Result};

use super::{Chain, Stage};

/// Drops writes outside `[0, max_y]` or with a block type the world does
/// not know.
#[derive(Debug, Default)]
pub struct DataValidator;

impl Stage for DataValidator {
    fn name(&self) -> &'static str {
        "data-validator"
    }

    fn set_block(&mut self, pos: IVec3, block: Block, mut next: Chain<'_>) -> Result<bool> {
        let world = next.world();
        if pos.y < 0 || pos.y > world.max_y() || !world.is_valid_block_type(block.id) {
            return Ok(false);
        }
        next.set_block(pos, block)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
