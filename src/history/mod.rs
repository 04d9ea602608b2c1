//! Undo/redo history

pub mod change_set;
pub mod executor;

pub use change_set::{BlockChange, ChangeSet};
pub use executor::{ChangeSetExecutor, Replay};
