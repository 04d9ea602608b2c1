//! Resumable units of work and helpers to drive them to completion

pub mod commit;
pub mod queue;

pub use commit::BufferCommit;
pub use queue::OperationQueue;

use log::warn;

use crate::core::types::Result;
use crate::session::EditSession;

/// A unit of editing work that may take several steps.
pub trait Operation {
    /// Advance the operation. Returns true while more work remains.
    fn resume(&mut self, session: &mut EditSession<'_>) -> Result<bool>;

    /// Abandon remaining work.
    fn cancel(&mut self) {}
}

impl<O: Operation + ?Sized> Operation for &mut O {
    fn resume(&mut self, session: &mut EditSession<'_>) -> Result<bool> {
        (**self).resume(session)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}

impl<O: Operation + ?Sized> Operation for Box<O> {
    fn resume(&mut self, session: &mut EditSession<'_>) -> Result<bool> {
        (**self).resume(session)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}

/// Run an operation until it finishes, stopping at the first error.
pub fn complete<O: Operation + ?Sized>(operation: &mut O, session: &mut EditSession<'_>) -> Result<()> {
    while operation.resume(session)? {}
    Ok(())
}

/// Run an operation until it finishes or fails, logging a failure instead
/// of returning it.
pub fn complete_blindly<O: Operation + ?Sized>(operation: &mut O, session: &mut EditSession<'_>) {
    if let Err(e) = complete(operation, session) {
        warn!("Operation stopped early: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EditConfig;
    use crate::core::error::Error;
    use crate::world::MemoryWorld;

    /// Needs `steps` resumes, failing on step `fail_at` if set.
    struct Steps {
        steps: usize,
        done: usize,
        fail_at: Option<usize>,
    }

    impl Operation for Steps {
        fn resume(&mut self, _session: &mut EditSession<'_>) -> Result<bool> {
            self.done += 1;
            if self.fail_at == Some(self.done) {
                return Err(Error::invalid("boom"));
            }
            Ok(self.done < self.steps)
        }
    }

    #[test]
    fn test_complete_runs_all_steps() {
        let mut world = MemoryWorld::new(15);
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        let mut op = Steps { steps: 4, done: 0, fail_at: None };
        complete(&mut op, &mut session).unwrap();
        assert_eq!(op.done, 4);
    }

    #[test]
    fn test_complete_blindly_swallows() {
        let mut world = MemoryWorld::new(15);
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        let mut op = Steps { steps: 4, done: 0, fail_at: Some(2) };
        assert!(complete(&mut op, &mut session).is_err());

        let mut op = Steps { steps: 4, done: 0, fail_at: Some(2) };
        complete_blindly(&mut op, &mut session);
        assert_eq!(op.done, 2);
    }
}
