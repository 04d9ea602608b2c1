//! Translated copy of visited cells.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::types::{IVec3, Result};
use crate::extent::ExtentBuffer;
use crate::session::EditSession;

use super::RegionFunction;

/// Copies each visited cell to `pos + offset`.
///
/// With a buffer attached, destinations inside the buffer's guard are
/// staged there instead of written, so a later pass can lay them down after
/// the source has been cleared.
pub struct ForwardCopy {
    offset: IVec3,
    buffer: Option<Rc<RefCell<ExtentBuffer>>>,
}

impl ForwardCopy {
    pub fn new(offset: IVec3) -> Self {
        Self {
            offset,
            buffer: None,
        }
    }

    pub fn buffered(offset: IVec3, buffer: Rc<RefCell<ExtentBuffer>>) -> Self {
        Self {
            offset,
            buffer: Some(buffer),
        }
    }
}

impl RegionFunction for ForwardCopy {
    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        let block = session.block_at(pos);
        let dest = pos + self.offset;
        if let Some(buffer) = &self.buffer {
            if buffer.borrow_mut().put(dest, block) {
                return Ok(true);
            }
        }
        session.set_block(dest, block)
    }
}
