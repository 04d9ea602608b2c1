//! Minimal entity record passed through to the world.

use serde::{Deserialize, Serialize};

use crate::core::types::DVec3;

/// An entity snapshot: its type name and location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: String,
    pub position: DVec3,
}

impl Entity {
    pub fn new(kind: impl Into<String>, position: DVec3) -> Self {
        Self {
            kind: kind.into(),
            position,
        }
    }
}
