//! Edit sessions
//!
//! An [`EditSession`] binds one world to one write pipeline for the length
//! of a batch of edits. Every write made through it is limited, masked,
//! recorded and reordered according to its configuration, and the recorded
//! [`ChangeSet`] can later be undone or redone against another session.
//!
//! The high-level editing operations live in the submodules, grouped by
//! what they touch.

mod fluid;
mod geometry;
mod region_ops;
#[cfg(test)]
mod scenarios;
mod terrain;

use std::collections::HashMap;

use log::debug;

use crate::block::{kind, Block};
use crate::core::config::EditConfig;
use crate::core::error::Error;
use crate::core::types::{IVec3, Result};
use crate::extent::{
    BlockBag, BlockBagStage, ChangeLimiter, ChangeSetRecorder, FastModeStage, MaskingStage,
    Pipeline, ReorderStage, WriteLevel,
};
use crate::history::{BlockChange, ChangeSet};
use crate::mask::{ConstMask, ExistingBlockMask, Mask};
use crate::pattern::Pattern;
use crate::region::Region;
use crate::world::{Entity, World};

/// A batch of edits against one world.
pub struct EditSession<'w> {
    world: &'w mut dyn World,
    pipeline: Pipeline,
    rng: fastrand::Rng,
}

impl<'w> EditSession<'w> {
    /// Bind a world with a validated configuration.
    pub fn new(world: &'w mut dyn World, config: EditConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "New edit session: limit {:?}, queue {}, fast mode {}",
            config.limit(),
            config.queue_enabled,
            config.fast_mode
        );
        Ok(Self {
            world,
            pipeline: Pipeline::new(&config, None),
            rng: fastrand::Rng::with_seed(config.seed),
        })
    }

    /// Draw placed blocks from `bag`; placements it cannot supply are
    /// dropped and reported by [`pop_missing_blocks`](Self::pop_missing_blocks).
    pub fn with_block_bag(mut self, bag: Box<dyn BlockBag>) -> Self {
        self.pipeline.stage_mut::<BlockBagStage>().set_bag(Some(bag));
        self
    }

    // === Configuration ===

    /// Current change limit, -1 when unlimited.
    pub fn change_limit(&self) -> i64 {
        self.pipeline
            .stage::<ChangeLimiter>()
            .limit()
            .map_or(-1, |l| l as i64)
    }

    /// Set the change limit; -1 removes it.
    pub fn set_change_limit(&mut self, limit: i64) -> Result<()> {
        if limit < -1 {
            return Err(Error::invalid(format!("change limit must be >= -1, got {limit}")));
        }
        self.pipeline
            .stage_mut::<ChangeLimiter>()
            .set_limit(usize::try_from(limit).ok());
        Ok(())
    }

    pub fn is_queue_enabled(&self) -> bool {
        self.pipeline.stage::<ReorderStage>().is_enabled()
    }

    pub fn enable_queue(&mut self) {
        self.pipeline.stage_mut::<ReorderStage>().set_enabled(true);
    }

    /// Stop deferring writes, placing everything already deferred.
    pub fn disable_queue(&mut self) -> Result<()> {
        if self.is_queue_enabled() {
            self.flush_queue()?;
        }
        self.pipeline.stage_mut::<ReorderStage>().set_enabled(false);
        Ok(())
    }

    pub fn mask(&self) -> &dyn Mask {
        self.pipeline.stage::<MaskingStage>().mask()
    }

    /// Restrict full-level writes to cells passing `mask`; `None` clears it.
    pub fn set_mask(&mut self, mask: Option<Box<dyn Mask>>) {
        let mask = mask.unwrap_or_else(|| Box::new(ConstMask::ALWAYS));
        self.pipeline.stage_mut::<MaskingStage>().set_mask(mask);
    }

    pub fn has_fast_mode(&self) -> bool {
        self.pipeline.stage::<FastModeStage>().is_enabled()
    }

    pub fn set_fast_mode(&mut self, enabled: bool) {
        self.pipeline.stage_mut::<FastModeStage>().set_enabled(enabled);
    }

    /// Seeded generator behind every random choice of this session.
    pub fn rng(&mut self) -> &mut fastrand::Rng {
        &mut self.rng
    }

    // === Reads ===

    pub fn world(&self) -> &dyn World {
        &*self.world
    }

    /// Reads see the world directly, so deferred writes are not visible
    /// until flushed.
    pub fn block_at(&self, pos: IVec3) -> Block {
        self.world.block_at(pos)
    }

    pub fn min_point(&self) -> IVec3 {
        self.world.min_point()
    }

    pub fn max_point(&self) -> IVec3 {
        self.world.max_point()
    }

    pub fn max_y(&self) -> i32 {
        self.world.max_y()
    }

    /// Y of the topmost solid cell of column (x, z) within
    /// `min_y..=max_y`, or `min_y` when there is none. With `natural_only`
    /// only natural terrain counts as solid.
    pub fn highest_terrain_block(&self, x: i32, z: i32, min_y: i32, max_y: i32, natural_only: bool) -> i32 {
        (min_y..=max_y)
            .rev()
            .find(|&y| {
                let id = self.block_at(IVec3::new(x, y, z)).id;
                if natural_only {
                    kind::is_natural_terrain(id)
                } else {
                    !kind::can_pass_through(id)
                }
            })
            .unwrap_or(min_y)
    }

    pub fn entities(&self, region: Option<&Region>) -> Vec<Entity> {
        self.world.entities(region)
    }

    pub fn create_entity(&mut self, entity: Entity) -> Option<Entity> {
        self.world.create_entity(entity)
    }

    // === Writes ===

    /// Write through the whole pipeline. Returns whether the cell changed.
    pub fn set_block(&mut self, pos: IVec3, block: Block) -> Result<bool> {
        self.set_block_at(WriteLevel::Full, pos, block)
    }

    /// Write through the stages selected by `level`.
    pub fn set_block_at(&mut self, level: WriteLevel, pos: IVec3, block: Block) -> Result<bool> {
        self.pipeline.set_block(&mut *self.world, level, pos, block)
    }

    /// Write without limit, mask or history, still honouring the queue.
    pub fn raw_set_block(&mut self, pos: IVec3, block: Block) -> Result<bool> {
        self.set_block_at(WriteLevel::BypassHistory, pos, block)
    }

    /// Write below the queue as well.
    pub fn smart_set_block(&mut self, pos: IVec3, block: Block) -> Result<bool> {
        self.set_block_at(WriteLevel::BypassAll, pos, block)
    }

    /// Write the pattern's block for `pos`.
    pub fn set_block_pattern<P: Pattern + ?Sized>(&mut self, pos: IVec3, pattern: &P) -> Result<bool> {
        self.set_block(pos, pattern.apply(pos))
    }

    /// Write only into an empty cell.
    pub fn set_block_if_air(&mut self, pos: IVec3, block: Block) -> Result<bool> {
        if !self.block_at(pos).is_air() {
            return Ok(false);
        }
        self.set_block(pos, block)
    }

    /// Write into an empty cell with the given probability.
    pub fn set_chance_block_if_air(&mut self, pos: IVec3, block: Block, probability: f64) -> Result<bool> {
        if self.rng.f64() <= probability {
            return self.set_block_if_air(pos, block);
        }
        Ok(false)
    }

    /// Add a change to the history without writing it.
    pub fn remember_change(&mut self, pos: IVec3, previous: Block, current: Block) {
        self.pipeline
            .stage_mut::<ChangeSetRecorder>()
            .change_set_mut()
            .add(BlockChange::new(pos, previous, current));
    }

    /// Place every deferred write and finish fast-mode relighting.
    pub fn flush_queue(&mut self) -> Result<()> {
        self.pipeline.flush(&mut *self.world)
    }

    // === History ===

    pub fn change_set(&self) -> &ChangeSet {
        self.pipeline.stage::<ChangeSetRecorder>().change_set()
    }

    /// Number of recorded changes.
    pub fn block_change_count(&self) -> usize {
        self.change_set().len()
    }

    /// Same as [`block_change_count`](Self::block_change_count).
    pub fn size(&self) -> usize {
        self.block_change_count()
    }

    /// Undo this session's changes in `target`.
    pub fn undo(&self, target: &mut EditSession<'_>) {
        self.change_set().undo(target);
    }

    /// Redo this session's changes in `target`.
    pub fn redo(&self, target: &mut EditSession<'_>) {
        self.change_set().redo(target);
    }

    /// End the session, keeping its history. Deferred writes that were
    /// never flushed are lost; call [`flush_queue`](Self::flush_queue) first.
    pub fn into_change_set(mut self) -> ChangeSet {
        self.pipeline.stage_mut::<ChangeSetRecorder>().take()
    }

    /// Block types a block bag could not supply, with counts, since the
    /// last call.
    pub fn pop_missing_blocks(&mut self) -> HashMap<u16, usize> {
        self.pipeline.stage_mut::<BlockBagStage>().pop_missing()
    }
}

/// Mask letting every cell through when `copy_air`, else only non-air ones.
fn source_mask(copy_air: bool) -> Box<dyn Mask> {
    if copy_air {
        Box::new(ConstMask::ALWAYS)
    } else {
        Box::new(ExistingBlockMask)
    }
}
