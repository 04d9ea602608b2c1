//! Append-only log of block changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::core::types::{IVec3, Result};

/// One recorded write: what was there and what replaced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockChange {
    pub position: IVec3,
    pub previous: Block,
    pub current: Block,
}

impl BlockChange {
    pub fn new(position: IVec3, previous: Block, current: Block) -> Self {
        Self {
            position,
            previous,
            current,
        }
    }
}

/// Ordered history of one edit session.
///
/// Records are never modified once added. Undo walks the list backwards
/// writing `previous`; redo walks it forwards writing `current`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeSet {
    changes: Vec<BlockChange>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, change: BlockChange) {
        self.changes.push(change);
    }

    /// Number of recorded changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &BlockChange> {
        self.changes.iter()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Persist the history so it can be undone in a later process.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl Extend<BlockChange> for ChangeSet {
    fn extend<I: IntoIterator<Item = BlockChange>>(&mut self, iter: I) {
        self.changes.extend(iter);
    }
}
