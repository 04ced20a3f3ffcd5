//! Configuration System
//!
//! Loads tuning parameters from tuning.toml for easy adjustment without
//! recompiling. CLI flags override anything loaded here.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::systems::activation::Activation;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub model: ModelConfig,
}

/// Run-length and output cadence parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    pub default_ticks: u64,
    pub snapshot_interval: u64,
}

/// Model shape parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub num_agents: usize,
    pub grid_width: u32,
    pub grid_height: u32,
    pub torus: bool,
    #[serde(default)]
    pub activation: Activation,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.model.validate()?;
        Ok(config)
    }

    /// Load configuration from the default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load tuning.toml: {}. Using defaults.", e);
            Self::default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                default_ticks: 200,
                snapshot_interval: 50,
            },
            model: ModelConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            num_agents: 100,
            grid_width: 10,
            grid_height: 10,
            torus: true,
            activation: Activation::Shuffled,
        }
    }
}

impl ModelConfig {
    /// Reject shapes the model cannot run on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_agents == 0 {
            return Err(ConfigError::Invalid("num_agents must be at least 1".into()));
        }
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::Invalid(
                "grid dimensions must be at least 1x1".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.simulation.default_ticks, 200);
        assert_eq!(config.model.num_agents, 100);
        assert!(config.model.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_population() {
        let config = ModelConfig {
            num_agents: 0,
            ..ModelConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validation_rejects_degenerate_grid() {
        let config = ModelConfig {
            grid_width: 0,
            ..ModelConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_tuning_toml() {
        let toml_text = r#"
            [simulation]
            default_ticks = 50
            snapshot_interval = 10

            [model]
            num_agents = 7
            grid_width = 4
            grid_height = 3
            torus = false
            activation = "sequential"
        "#;

        let config: Config = toml::from_str(toml_text).unwrap();
        assert_eq!(config.simulation.default_ticks, 50);
        assert_eq!(config.model.num_agents, 7);
        assert!(!config.model.torus);
        assert_eq!(config.model.activation, Activation::Sequential);
    }

    #[test]
    fn test_activation_defaults_to_shuffled() {
        let toml_text = r#"
            [simulation]
            default_ticks = 50
            snapshot_interval = 10

            [model]
            num_agents = 7
            grid_width = 4
            grid_height = 3
            torus = true
        "#;

        let config: Config = toml::from_str(toml_text).unwrap();
        assert_eq!(config.model.activation, Activation::Shuffled);
    }
}
