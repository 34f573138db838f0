//! Error types

use std::path::PathBuf;
use thiserror::Error;

use crate::components::hex::Hex;

/// Errors raised while building an ecosystem
#[derive(Debug, Error)]
pub enum EcosystemError {
    #[error("world size must be positive, got {size}")]
    InvalidSize { size: i32 },

    #[error("{at} lies outside the world")]
    OutOfBounds { at: Hex },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
