//! Deferred neighbour updates and relighting.

use std::any::Any;

use indexmap::IndexSet;
use log::debug;

use crate::block::Block;
use crate::core::types::{IVec2, IVec3, Result};
use crate::world::chunk_of;

use super::{Chain, Stage};

/// Innermost stage. In fast mode writes skip notification and lighting,
/// and the touched chunks are fixed up once on flush.
#[derive(Debug, Default)]
pub struct FastModeStage {
    enabled: bool,
    dirty_chunks: IndexSet<IVec2>,
}

impl FastModeStage {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            dirty_chunks: IndexSet::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Chunks waiting for a relight.
    pub fn dirty_chunks(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.dirty_chunks.iter().copied()
    }
}

impl Stage for FastModeStage {
    fn name(&self) -> &'static str {
        "fast-mode"
    }

    fn set_block(&mut self, pos: IVec3, block: Block, mut next: Chain<'_>) -> Result<bool> {
        if self.enabled {
            self.dirty_chunks.insert(chunk_of(pos));
        }
        Ok(next.world_mut().set_block(pos, block, !self.enabled))
    }

    fn flush(&mut self, mut next: Chain<'_>) -> Result<()> {
        if !self.dirty_chunks.is_empty() {
            let chunks: Vec<IVec2> = self.dirty_chunks.drain(..).collect();
            debug!("Relighting {} chunks after fast mode", chunks.len());
            next.world_mut().fix_after_fast_mode(&chunks);
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
