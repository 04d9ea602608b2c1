//! Core type aliases and re-exports

pub use glam::{
    IVec2, IVec3,
    DVec2, DVec3,
};

/// Standard Result type for edit operations
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
