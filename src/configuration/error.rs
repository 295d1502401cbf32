//! Errors raised while loading or validating a rope scenario

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Scenario file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid YAML for a `ScenarioConfig`.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A rope needs two anchored ends.
    #[error("rope needs at least 2 particles, got {0}")]
    TooFewParticles(usize),

    #[error("rope allows at most {max} particles, got {count}")]
    TooManyParticles { count: usize, max: usize },

    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
