//! The fixed stage list of an edit session.

use std::any::type_name;

use log::debug;

use crate::block::Block;
use crate::core::config::EditConfig;
use crate::core::types::{IVec3, Result};
use crate::world::World;

use super::{
    BlockBag, BlockBagStage, BlockQuirkStage, Chain, ChangeLimiter, ChangeSetRecorder,
    ChunkLoadingStage, DataValidator, FastModeStage, MaskingStage, ReorderStage, Stage,
};

/// How many stages a write passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WriteLevel {
    /// Limiter, mask, history and everything below.
    Full,
    /// Skips limiter, mask and history; still reordered. Used by undo/redo.
    BypassHistory,
    /// Skips the reorder stage as well.
    BypassAll,
}

/// Index of the reorder stage; everything before it is history-related.
const REORDER_INDEX: usize = 3;
/// Index of the block bag stage, the first stage after reordering.
const BAG_INDEX: usize = 4;

impl WriteLevel {
    fn first_stage(self) -> usize {
        match self {
            WriteLevel::Full => 0,
            WriteLevel::BypassHistory => REORDER_INDEX,
            WriteLevel::BypassAll => BAG_INDEX,
        }
    }
}

/// Ordered stages from the API side down to the world.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(config: &EditConfig, bag: Option<Box<dyn BlockBag>>) -> Self {
        let stages: Vec<Box<dyn Stage>> = vec![
            Box::new(ChangeLimiter::new(config.limit())),
            Box::new(MaskingStage::default()),
            Box::new(ChangeSetRecorder::new()),
            Box::new(ReorderStage::new(config.queue_enabled)),
            Box::new(BlockBagStage::new(bag)),
            Box::new(DataValidator),
            Box::new(ChunkLoadingStage::default()),
            Box::new(BlockQuirkStage),
            Box::new(FastModeStage::new(config.fast_mode)),
        ];
        let pipeline = Self { stages };
        debug!("Edit pipeline: {}", pipeline.stage_names().join(" -> "));
        pipeline
    }

    pub fn set_block(
        &mut self,
        world: &mut dyn World,
        level: WriteLevel,
        pos: IVec3,
        block: Block,
    ) -> Result<bool> {
        Chain::new(&mut self.stages[level.first_stage()..], world).set_block(pos, block)
    }

    /// Flush every stage, outermost first.
    pub fn flush(&mut self, world: &mut dyn World) -> Result<()> {
        Chain::new(&mut self.stages, world).flush()
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// The stage of type `T`.
    ///
    /// # Panics
    /// If the pipeline has no such stage.
    pub fn stage<T: Stage>(&self) -> &T {
        self.stages
            .iter()
            .find_map(|s| s.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("pipeline has no {} stage", type_name::<T>()))
    }

    /// Mutable access to the stage of type `T`.
    ///
    /// # Panics
    /// If the pipeline has no such stage.
    pub fn stage_mut<T: Stage>(&mut self) -> &mut T {
        self.stages
            .iter_mut()
            .find_map(|s| s.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("pipeline has no {} stage", type_name::<T>()))
    }
}
