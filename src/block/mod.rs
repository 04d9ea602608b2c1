//! Block values, legacy block ids and block-kind predicates

pub mod ids;
pub mod kind;
pub mod value;

pub use value::{Block, Countable};
