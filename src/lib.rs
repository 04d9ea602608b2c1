//! Rkedit - batch editing for voxel block worlds
//!
//! An [`EditSession`] wraps a [`World`] and routes every write through a
//! pipeline of stages (limit, mask, history, reorder, block bag,
//! validation, chunk loading, fast mode). Shapes, fills, copies and terrain
//! passes are built on visitors that drive per-cell functions over regions.

pub mod core;
pub mod math;
pub mod block;
pub mod world;
pub mod region;
pub mod mask;
pub mod pattern;
pub mod expression;
pub mod extent;
pub mod history;
pub mod function;
pub mod visitor;
pub mod operation;
pub mod shape;
pub mod session;

pub use crate::block::Block;
pub use crate::core::{EditConfig, Error, Result};
pub use crate::history::ChangeSet;
pub use crate::pattern::Pattern;
pub use crate::region::Region;
pub use crate::session::EditSession;
pub use crate::world::{MemoryWorld, World};
