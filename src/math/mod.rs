//! Mathematical utilities

pub mod direction;
pub mod hash;
pub mod interpolation;

pub use direction::{Direction, RECURSE_DIRECTIONS};
pub use interpolation::{KochanekBartels, Node};
