//! Change budget enforcement.

use std::any::Any;

use log::trace;

use crate::block::Block;
use crate::core::error::Error;
use crate::core::types::{IVec3, Result};

use super::{Chain, Stage};

/// Counts write attempts and fails once the budget is spent.
///
/// Every attempt counts, including writes a later stage masks out or that
/// turn out to change nothing. The failing attempt is not forwarded.
#[derive(Debug, Default)]
pub struct ChangeLimiter {
    limit: Option<usize>,
    count: usize,
}

impl ChangeLimiter {
    /// `None` means unlimited.
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit, count: 0 }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Replace the budget. Attempts already counted still count.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    /// Attempts counted so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Stage for ChangeLimiter {
    fn name(&self) -> &'static str {
        "change-limiter"
    }

    fn set_block(&mut self, pos: IVec3, block: Block, mut next: Chain<'_>) -> Result<bool> {
        if let Some(limit) = self.limit {
            if self.count >= limit {
                trace!("Rejected write at {pos} after {} attempts", self.count);
                return Err(Error::ChangeLimitExceeded { limit });
            }
            self.count += 1;
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
