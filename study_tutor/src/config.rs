//! Front-end configuration.
//!
//! Loaded from a TOML file; every key is optional and falls back to its default.
//!
//! ```toml
//! dialogue_pace_ms = 500
//! timestamp_format = "%H:%M:%S"
//! show_timestamps = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{Result, TutorError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorConfig {
    /// Pause after each dialogue line during playback.
    #[serde(default = "default_dialogue_pace_ms")]
    pub dialogue_pace_ms: u64,

    /// `chrono` format string for chat timestamps.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    #[serde(default = "default_show_timestamps")]
    pub show_timestamps: bool,
}

fn default_dialogue_pace_ms() -> u64 {
    500
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_show_timestamps() -> bool {
    true
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            dialogue_pace_ms: default_dialogue_pace_ms(),
            timestamp_format: default_timestamp_format(),
            show_timestamps: default_show_timestamps(),
        }
    }
}

impl TutorConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TutorError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Loaded tutor config");
        Ok(config)
    }

    /// Load from `path` if given and present, otherwise use defaults.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => Self::load(p),
            Some(p) => {
                warn!(path = %p.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Pause between dialogue lines.
    pub fn dialogue_pace(&self) -> Duration {
        Duration::from_millis(self.dialogue_pace_ms)
    }
}
