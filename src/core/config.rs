//! Edit session configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

/// Change limit value meaning "no limit".
pub const UNLIMITED: i64 = -1;

/// Configuration for a single edit session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Maximum number of write attempts, or -1 for no limit.
    pub change_limit: i64,
    /// Skip neighbour notification and relight dirty chunks once on flush.
    pub fast_mode: bool,
    /// Defer attachable blocks to a second placement pass.
    pub queue_enabled: bool,
    /// Seed for every random decision made by the session.
    pub seed: u64,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            change_limit: UNLIMITED,
            fast_mode: false,
            queue_enabled: false,
            seed: 12345,
        }
    }
}

impl EditConfig {
    /// Config with the given change limit and defaults elsewhere.
    pub fn with_limit(change_limit: i64) -> Self {
        Self {
            change_limit,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EditConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write this config as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Check field domains.
    pub fn validate(&self) -> Result<()> {
        if self.change_limit < UNLIMITED {
            return Err(Error::invalid(format!(
                "change_limit must be >= -1, got {}",
                self.change_limit
            )));
        }
        Ok(())
    }

    /// The change limit as a count, `None` when unlimited.
    pub fn limit(&self) -> Option<usize> {
        usize::try_from(self.change_limit).ok()
    }
}
