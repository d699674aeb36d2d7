//! AI settings loaded from TOML.
//!
//! ```toml
//! enabled = true
//! depth = 3
//! move_time_ms = 2000
//! ```
//!
//! Every key is optional. `depth` must be an integer from 0 to 255 (a
//! quoted number is accepted too); anything else is rejected rather than
//! clamped.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time_control::TimeControl;

pub const DEFAULT_DEPTH: u8 = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid search depth {value:?} (expected an integer from 0 to 255)")]
    InvalidDepth { value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAiConfig")]
pub struct AiConfig {
    pub enabled: bool,
    /// Plies searched from the root
    pub depth: u8,
    /// Optional per-move time limit
    pub move_time_ms: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            depth: DEFAULT_DEPTH,
            move_time_ms: None,
        }
    }
}

impl AiConfig {
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let raw: RawAiConfig = toml::from_str(text)?;
        Self::try_from(raw)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }

    /// A fresh time control carrying this config's move time.
    pub fn time_control(&self) -> TimeControl {
        TimeControl::new(self.move_time())
    }
}

/// Parses a search depth given as text. Negative, fractional, oversized and
/// non-numeric input is an error.
pub fn parse_depth(text: &str) -> ConfigResult<u8> {
    text.trim().parse::<u8>().map_err(|_| ConfigError::InvalidDepth {
        value: text.to_string(),
    })
}

/// File shape before the depth is validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawAiConfig {
    enabled: Option<bool>,
    depth: Option<toml::Value>,
    move_time_ms: Option<u64>,
}

impl TryFrom<RawAiConfig> for AiConfig {
    type Error = ConfigError;

    fn try_from(raw: RawAiConfig) -> ConfigResult<Self> {
        let depth = match raw.depth {
            None => DEFAULT_DEPTH,
            Some(toml::Value::Integer(n)) => {
                u8::try_from(n).map_err(|_| ConfigError::InvalidDepth {
                    value: n.to_string(),
                })?
            }
            Some(toml::Value::String(s)) => parse_depth(&s)?,
            Some(other) => {
                return Err(ConfigError::InvalidDepth {
                    value: other.to_string(),
                });
            }
        };
        Ok(Self {
            enabled: raw.enabled.unwrap_or(true),
            depth,
            move_time_ms: raw.move_time_ms,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
