//! Configuration System
//!
//! Loads run parameters from `hexsim.toml`. Every section and field is
//! optional; anything left out takes its default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::components::agent::Food;
use crate::error::ConfigError;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "hexsim.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub world: WorldConfig,
    pub population: PopulationConfig,
    pub emission: EmissionConfig,
    pub run: RunConfig,
}

/// Grid size and random seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub size: i32,
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { size: 12, seed: 42 }
    }
}

/// Starting head counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub predators: usize,
    pub prey: usize,
    pub food: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            predators: 2,
            prey: 6,
            food: 8,
        }
    }
}

/// Emission rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionConfig {
    /// Food emits a scent with probability 1 / `scent_rate` per tick
    pub scent_rate: u32,
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            scent_rate: Food::DEFAULT_SCENT_RATE,
        }
    }
}

/// Length and pacing of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub ticks: u64,
    /// Pause between frames, in milliseconds
    pub delay_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 500,
            delay_ms: 0,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from `path`, or use defaults if it does not exist.
    /// A file that exists but is malformed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world.size <= 0 {
            return Err(ConfigError::Invalid {
                field: "world.size",
                reason: format!("must be positive, got {}", self.world.size),
            });
        }
        if self.emission.scent_rate == 0 {
            return Err(ConfigError::Invalid {
                field: "emission.scent_rate",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.world.size, 12);
        assert_eq!(config.run.ticks, 500);
        assert_eq!(config.emission.scent_rate, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::from_toml_str(
            r#"
            [world]
            size = 20

            [population]
            prey = 11
            "#,
        )
        .unwrap();
        assert_eq!(config.world.size, 20);
        assert_eq!(config.world.seed, 42);
        assert_eq!(config.population.prey, 11);
        assert_eq!(config.population.predators, 2);
        assert_eq!(config.emission.scent_rate, 5);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Config::from_toml_str("[world]\nsize = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "world.size", .. }));

        let err = Config::from_toml_str("[emission]\nscent_rate = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "emission.scent_rate",
                ..
            }
        ));

        let err = Config::from_toml_str("[world]\nsize = \"big\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let written = Config {
            run: RunConfig {
                ticks: 77,
                delay_ms: 10,
            },
            ..Config::default()
        };
        write!(file, "{}", toml::to_string(&written).unwrap()).unwrap();

        let loaded = Config::load(file.path()).unwrap();
        assert_eq!(loaded, written);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }
}
