//! File-based configuration for a level switch.
//!
//! ## Usage
//!
//! Load a TOML file with [`LevelSwitchConfig::load`] and turn it into
//! [`LevelSwitchArgs`] with [`LevelSwitchConfig::to_args`]. Every key is
//! optional:
//!
//! ```toml
//! segment_height = 72.0
//! segment_width = 112.0
//! levels = 4
//! level = 0
//! translucent = true
//! off_stop = false
//! origin = [0.0, 0.0]
//! ```
//!
//! Level counts and levels are clamped when the switch is built, so any
//! integer is accepted here. Dimensions must be positive.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    LevelSwitchArgs,
    dp::{Dp, DpPosition},
    level_switch::{DEFAULT_LEVELS, DEFAULT_SEGMENT_HEIGHT, DEFAULT_SEGMENT_WIDTH},
};

/// Errors produced while loading a [`LevelSwitchConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse level switch config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize level switch config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("`{field}` must be a positive, finite number (got {value})")]
    InvalidDimension { field: &'static str, value: f64 },
}

/// Serializable construction surface of a level switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelSwitchConfig {
    /// Height of one segment.
    pub segment_height: f64,
    /// Width of the stack.
    pub segment_width: f64,
    /// Requested number of segments.
    pub levels: i32,
    /// Initial raw level.
    pub level: i32,
    /// Presentation hint for hosts.
    pub translucent: bool,
    /// Adds a level 0 row beneath the segments.
    pub off_stop: bool,
    /// Container position in host-view coordinates.
    pub origin: [f64; 2],
}

impl Default for LevelSwitchConfig {
    fn default() -> Self {
        Self {
            segment_height: DEFAULT_SEGMENT_HEIGHT.0,
            segment_width: DEFAULT_SEGMENT_WIDTH.0,
            levels: DEFAULT_LEVELS,
            level: 0,
            translucent: true,
            off_stop: false,
            origin: [0.0, 0.0],
        }
    }
}

impl LevelSwitchConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Rejects dimensions that cannot describe a stack.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("segment_height", self.segment_height),
            ("segment_width", self.segment_width),
        ] {
            if !Dp(value).is_positive() {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }
        Ok(())
    }

    /// Builds switch arguments with default feedback and canvas.
    pub fn to_args(&self) -> LevelSwitchArgs {
        LevelSwitchArgs::default()
            .segment_height(self.segment_height)
            .segment_width(self.segment_width)
            .levels(self.levels)
            .level(self.level)
            .translucent(self.translucent)
            .off_stop(self.off_stop)
            .origin(DpPosition::from(self.origin))
    }
}
