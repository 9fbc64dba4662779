//! Runtime configuration
//!
//! Loaded from YAML; every field has a default so a partial file is enough.
//!
//! ```yaml
//! log_level: debug
//! default_weight: 1
//! floyd_warshall:
//!   parallel_threshold: 128
//!   max_vertices: 2048
//! ```

use graphcore_algorithms::{FloydWarshallConfig, Weight};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),
}

/// Dense all-pairs settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DenseConfig {
    /// Vertex count at or above which rows are relaxed in parallel
    pub parallel_threshold: usize,
    /// Largest vertex count accepted for an O(n²) matrix
    pub max_vertices: usize,
}

impl Default for DenseConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: FloydWarshallConfig::default().parallel_threshold,
            max_vertices: 4096,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphcoreConfig {
    /// One of trace, debug, info, warn, error
    pub log_level: String,
    /// Weight for document edges declared without one
    pub default_weight: Weight,
    pub floyd_warshall: DenseConfig,
}

impl Default for GraphcoreConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            default_weight: 1,
            floyd_warshall: DenseConfig::default(),
        }
    }
}

impl GraphcoreConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: GraphcoreConfig = serde_yaml::from_str(yaml)?;
        config.log_level()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn log_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn floyd_warshall_config(&self) -> FloydWarshallConfig {
        FloydWarshallConfig {
            parallel_threshold: self.floyd_warshall.parallel_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GraphcoreConfig::default();
        assert_eq!(config.log_level().unwrap(), Level::INFO);
        assert_eq!(config.default_weight, 1);
        assert_eq!(config.floyd_warshall.parallel_threshold, 256);
        assert_eq!(config.floyd_warshall.max_vertices, 4096);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = GraphcoreConfig::from_yaml_str("floyd_warshall:\n  max_vertices: 10\n").unwrap();
        assert_eq!(config.floyd_warshall.max_vertices, 10);
        assert_eq!(config.floyd_warshall.parallel_threshold, 256);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_log_level() {
        let err = GraphcoreConfig::from_yaml_str("log_level: loud\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "loud"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level: debug\ndefault_weight: 3").unwrap();

        let config = GraphcoreConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);
        assert_eq!(config.default_weight, 3);
        assert_eq!(config.floyd_warshall_config().parallel_threshold, 256);
    }

    #[test]
    fn test_missing_file() {
        let err = GraphcoreConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
