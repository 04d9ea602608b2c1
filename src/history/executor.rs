//! Replays a change set against a session.

use log::{debug, warn};

use crate::core::types::Result;
use crate::extent::WriteLevel;
use crate::operation::{complete_blindly, Operation};
use crate::session::EditSession;

use super::{BlockChange, ChangeSet};

/// Replay direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Replay {
    /// Newest record first, writing each `previous` block.
    Undo,
    /// Oldest record first, writing each `current` block.
    Redo,
}

/// Writes a change set back into a session below the history stages, so
/// the replay is neither limited, masked nor recorded again.
///
/// Failed writes are logged and skipped.
pub struct ChangeSetExecutor<'c> {
    changes: &'c ChangeSet,
    replay: Replay,
    affected: usize,
}

impl<'c> ChangeSetExecutor<'c> {
    pub fn new(changes: &'c ChangeSet, replay: Replay) -> Self {
        Self {
            changes,
            replay,
            affected: 0,
        }
    }

    pub fn undo(changes: &'c ChangeSet) -> Self {
        Self::new(changes, Replay::Undo)
    }

    pub fn redo(changes: &'c ChangeSet) -> Self {
        Self::new(changes, Replay::Redo)
    }

    /// Writes that changed the target.
    pub fn affected(&self) -> usize {
        self.affected
    }

    fn write(&mut self, session: &mut EditSession<'_>, change: &BlockChange) {
        let block = match self.replay {
            Replay::Undo => change.previous,
            Replay::Redo => change.current,
        };
        match session.set_block_at(WriteLevel::BypassHistory, change.position, block) {
            Ok(true) => self.affected += 1,
            Ok(false) => {}
            Err(e) => warn!("Skipping {:?} of {}: {e}", self.replay, change.position),
        }
    }
}

impl Operation for ChangeSetExecutor<'_> {
    fn resume(&mut self, session: &mut EditSession<'_>) -> Result<bool> {
        let changes = self.changes;
        match self.replay {
            Replay::Undo => changes.iter().rev().for_each(|c| self.write(session, c)),
            Replay::Redo => changes.iter().for_each(|c| self.write(session, c)),
        }
        debug!("{:?} replayed {} of {} changes", self.replay, self.affected, changes.len());
        Ok(false)
    }
}

impl ChangeSet {
    /// Restore every recorded cell in `target` to its value before the edit.
    pub fn undo(&self, target: &mut EditSession<'_>) {
        self.replay(target, Replay::Undo);
    }

    /// Re-apply every recorded change to `target`.
    pub fn redo(&self, target: &mut EditSession<'_>) {
        self.replay(target, Replay::Redo);
    }

    fn replay(&self, target: &mut EditSession<'_>, replay: Replay) {
        let mut executor = ChangeSetExecutor::new(self, replay);
        complete_blindly(&mut executor, target);
        if let Err(e) = target.flush_queue() {
            warn!("Flushing after {replay:?} failed: {e}");
        }
    }
}
