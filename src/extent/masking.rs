//! Drops writes whose target fails the session mask.

use std::any::Any;

use crate::block::Block;
use crate::core::types::{IVec3, Result};
use crate::mask::{self, Mask};

use super::{Chain, Stage};

pub struct MaskingStage {
    mask: Box<dyn Mask>,
}

impl Default for MaskingStage {
    fn default() -> Self {
        Self::new(mask::always())
    }
}

impl MaskingStage {
    pub fn new(mask: Box<dyn Mask>) -> Self {
        Self { mask }
    }

    pub fn mask(&self) -> &dyn Mask {
        self.mask.as_ref()
    }

    pub fn set_mask(&mut self, mask: Box<dyn Mask>) {
        self.mask = mask;
    }
}

impl Stage for MaskingStage {
    fn name(&self) -> &'static str {
        "masking"
    }

    fn set_block(&mut self, pos: IVec3, block: Block, mut next: Chain<'_>) -> Result<bool> {
        if !self.mask.test(next.world(), pos) {
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
