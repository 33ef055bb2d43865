// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engagement configuration.
//!
//! Loaded from an optional TOML file; every field has a default, so an
//! absent file or an empty table yields the production values.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Length of one engagement window.
pub const WINDOW_UNIT: Duration = Duration::from_secs(24 * 60 * 60);

/// Fire time of the engagement notification, measured from first use.
///
/// Lands at the close of window 2: only users who never came back during
/// it are nudged.
pub const TARGET_OFFSET: Duration = Duration::from_secs(48 * 60 * 60);

pub const DEFAULT_TITLE: &str = "Pick up where you left off";
pub const DEFAULT_BODY: &str = "There's more to explore. Come back and see what's new.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngagementConfig {
    pub window_unit_secs: u64,
    pub target_offset_secs: u64,
    pub title: String,
    pub body: String,
    /// Upper bound on the permission query; unset waits indefinitely.
    pub permission_timeout_ms: Option<u64>,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            window_unit_secs: WINDOW_UNIT.as_secs(),
            target_offset_secs: TARGET_OFFSET.as_secs(),
            title: DEFAULT_TITLE.to_string(),
            body: DEFAULT_BODY.to_string(),
            permission_timeout_ms: None,
        }
    }
}

impl EngagementConfig {
    pub fn window_unit(&self) -> Duration {
        Duration::from_secs(self.window_unit_secs)
    }

    pub fn target_offset(&self) -> Duration {
        Duration::from_secs(self.target_offset_secs)
    }

    pub fn permission_timeout(&self) -> Option<Duration> {
        self.permission_timeout_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_unit_secs == 0 {
            return Err(ConfigError::Invalid(
                "window_unit_secs must be greater than zero".to_string(),
            ));
        }
        if self.target_offset_secs == 0 {
            return Err(ConfigError::Invalid(
                "target_offset_secs must be greater than zero".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("title must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
