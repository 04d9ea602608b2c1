//! Multi-pass placement for blocks that depend on their neighbours.

use std::any::Any;

use indexmap::IndexMap;
use log::debug;

use crate::block::{kind, Block};
use crate::core::types::{IVec3, Result};

use super::{Chain, Stage};

/// Holds back attachable blocks until flush.
///
/// Ordinary blocks pass straight through. Blocks that need support
/// (torches, flowers, rails) wait in a second pass and multi-part blocks
/// (doors, signs, cacti) in a third. Each pass keeps its insertion order.
#[derive(Debug, Default)]
pub struct ReorderStage {
    enabled: bool,
    place_last: IndexMap<IVec3, Block>,
    place_final: IndexMap<IVec3, Block>,
}

impl ReorderStage {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling does not drop writes already queued; they go out on flush.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Number of writes waiting for flush.
    pub fn pending(&self) -> usize {
        self.place_last.len() + self.place_final.len()
    }
}

impl Stage for ReorderStage {
    fn name(&self) -> &'static str {
        "reorder"
    }

    fn set_block(&mut self, pos: IVec3, block: Block, mut next: Chain<'_>) -> Result<bool> {
        if !self.enabled {
            return next.set_block(pos, block);
        }

        let existing = next.block_at(pos);
        let differs = existing != block.normalized();

        if kind::should_place_last(block.id) {
            self.place_final.shift_remove(&pos);
            self.place_last.insert(pos, block);
            return Ok(differs);
        }
        if kind::should_place_final(block.id) {
            self.place_last.shift_remove(&pos);
            self.place_final.insert(pos, block);
            return Ok(differs);
        }

        // A later pass must not overwrite this cell again
        self.place_last.shift_remove(&pos);
        self.place_final.shift_remove(&pos);

        if kind::should_place_last(existing.id) {
            // Knock the attachment off before the new block goes in
            next.set_block(pos, Block::AIR)?;
            if !block.is_air() {
                next.set_block(pos, block)?;
            }
            return Ok(differs);
        }
        next.set_block(pos, block)
    }

    fn flush(&mut self, mut next: Chain<'_>) -> Result<()> {
        if self.pending() > 0 {
            debug!(
                "Placing {} deferred and {} final blocks",
                self.place_last.len(),
                self.place_final.len()
            );
        }
        for (pos, block) in std::mem::take(&mut self.place_last) {
            next.set_block(pos, block)?;
        }
        for (pos, block) in std::mem::take(&mut self.place_final) {
            next.set_block(pos, block)?;
        }
        next.flush()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
