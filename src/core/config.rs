//! # Configuration
//!
//! Optional file-based settings for a `Pilot`. Override hierarchy:
//! defaults → config file → whatever the caller sets on `PilotOptions`.
//!
//! ```toml
//! [general]
//! debug = true                # route NavEvents to the `log` facade
//! match_policy = "farthest"   # "farthest" (default) or "nearest"
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::stack::MatchPolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WaypointConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub debug: Option<bool>,
    pub match_policy: Option<MatchPolicy>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub debug: bool,
    pub match_policy: MatchPolicy,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

pub fn parse_config(contents: &str) -> Result<WaypointConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Load config from `path`.
///
/// A missing file is not an error: it yields `WaypointConfig::default()`.
/// A malformed one returns `ConfigError::Parse`.
pub fn load_config(path: &Path) -> Result<WaypointConfig, ConfigError> {
    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(WaypointConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

pub fn resolve(config: &WaypointConfig) -> ResolvedConfig {
    ResolvedConfig {
        debug: config.general.debug.unwrap_or(false),
        match_policy: config.general.match_policy.unwrap_or_default(),
    }
}
