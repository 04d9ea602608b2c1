//! Sequential composition of operations.

use std::collections::VecDeque;

use crate::core::types::Result;
use crate::session::EditSession;

use super::Operation;

/// Runs operations one after another, each to completion before the next
/// starts.
#[derive(Default)]
pub struct OperationQueue<'a> {
    queue: VecDeque<Box<dyn Operation + 'a>>,
}

impl<'a> OperationQueue<'a> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Append an operation to the end of the queue.
    pub fn offer(&mut self, operation: impl Operation + 'a) {
        self.queue.push_back(Box::new(operation));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Operation for OperationQueue<'_> {
    fn resume(&mut self, session: &mut EditSession<'_>) -> Result<bool> {
        if let Some(current) = self.queue.front_mut() {
            if !current.resume(session)? {
                self.queue.pop_front();
            }
        }
        Ok(!self.queue.is_empty())
    }

    fn cancel(&mut self) {
        for operation in &mut self.queue {
            operation.cancel();
        }
        self.queue.clear();
    }
}
