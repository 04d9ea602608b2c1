//! Traversal strategies that drive a function over cells
//!
//! Every visitor is an [`Operation`](crate::operation::Operation) that runs
//! its whole traversal in one `resume` call. A change-limit error from the
//! function stops the traversal and is returned to the caller.

pub mod layer;
pub mod region;
pub mod search;

pub use layer::LayerVisitor;
pub use region::RegionVisitor;
pub use search::{
    BreadthFirstSearch, Downward, DownwardVisitor, NonRising, NonRisingVisitor, Recursive,
    RecursiveVisitor, Traversal,
};
