//! Write pipeline between the editing API and the world
//!
//! Every single-cell write passes through an ordered list of stages. Each
//! stage sees the write, may veto, defer, record or transform it, and then
//! hands it to the rest of the list through a [`Chain`]. When the list is
//! exhausted the write lands in the [`World`].
//!
//! Bypass levels are suffixes of the same list, see [`WriteLevel`].

pub mod bag;
pub mod buffer;
pub mod chunk;
pub mod fast_mode;
pub mod limiter;
pub mod masking;
pub mod pipeline;
pub mod quirk;
pub mod recorder;
pub mod reorder;
pub mod validator;

pub use bag::{BlockBag, BlockBagStage, MemoryBlockBag};
pub use buffer::ExtentBuffer;
pub use chunk::ChunkLoadingStage;
pub use fast_mode::FastModeStage;
pub use limiter::ChangeLimiter;
pub use masking::MaskingStage;
pub use pipeline::{Pipeline, WriteLevel};
pub use quirk::BlockQuirkStage;
pub use recorder::ChangeSetRecorder;
pub use reorder::ReorderStage;
pub use validator::DataValidator;

use std::any::Any;

use crate::block::Block;
use crate::core::types::{IVec3, Result};
use crate::world::World;

/// One link of the write pipeline.
pub trait Stage: Any {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Intercept a write. Returns whether the write changed the world
    /// (or, for deferred writes, whether it will).
    fn set_block(&mut self, pos: IVec3, block: Block, next: Chain<'_>) -> Result<bool>;

    /// Push out anything held back, then flush the rest of the chain.
    fn flush(&mut self, next: Chain<'_>) -> Result<()> {
        next.flush()
    }

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// The remainder of the pipeline below a stage, ending at the world.
pub struct Chain<'a> {
    stages: &'a mut [Box<dyn Stage>],
    world: &'a mut dyn World,
}

impl<'a> Chain<'a> {
    pub fn new(stages: &'a mut [Box<dyn Stage>], world: &'a mut dyn World) -> Self {
        Self { stages, world }
    }

    /// Send a write to the next stage, or to the world when none is left.
    /// May be called more than once per intercepted write.
    pub fn set_block(&mut self, pos: IVec3, block: Block) -> Result<bool> {
        match self.stages.split_first_mut() {
            Some((stage, rest)) => stage.set_block(pos, block, Chain::new(rest, &mut *self.world)),
            None => Ok(self.world.set_block(pos, block, true)),
        }
    }

    /// Flush every remaining stage, outermost first.
    pub fn flush(self) -> Result<()> {
        match self.stages.split_first_mut() {
            Some((stage, rest)) => stage.flush(Chain::new(rest, self.world)),
            None => Ok(()),
        }
    }

    /// Reads always go straight to the world.
    pub fn block_at(&self, pos: IVec3) -> Block {
        self.world.block_at(pos)
    }

    pub fn world(&self) -> &dyn World {
        &*self.world
    }

    pub fn world_mut(&mut self) -> &mut dyn World {
        &mut *self.world
    }

    /// Shorter-lived copy of this chain, for stages that forward several writes.
    pub fn reborrow(&mut self) -> Chain<'_> {
        Chain::new(&mut *self.stages, &mut *self.world)
    }
}
