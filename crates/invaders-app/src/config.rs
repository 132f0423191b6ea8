//! Host configuration, optionally loaded from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use invaders_core::constants::TICK_RATE;
use invaders_sim::config::SimConfig;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the host needs to run a session. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulation tuning.
    pub sim: SimConfig,
    /// Ticks per second.
    pub tick_rate: u32,
    /// Stop after this many ticks. `None` runs until input closes.
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to hold `tick_rate`. Off runs as fast as possible.
    pub paced: bool,
    /// Feed measured frame time to the engine instead of a fixed step.
    pub wall_clock: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_rate: TICK_RATE,
            max_ticks: None,
            paced: true,
            wall_clock: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config =
            AppConfig::from_json(r#"{"tick_rate": 30, "sim": {"player_speed": 8.0}}"#).unwrap();
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.sim.player_speed, 8.0);
        assert_eq!(config.sim.player_x_bound, 4.0);
        assert_eq!(config.sim.score_per_target, 100);
        assert!(config.paced);
        assert_eq!(config.max_ticks, None);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = AppConfig::from_json("{tick_rate: 30").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::load_from_file(Path::new("/nonexistent/invaders.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
