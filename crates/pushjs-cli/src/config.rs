//! Configuration for the pushjs command line tool
//!
//! Loads configuration from:
//! 1. a YAML file - column schema, compile options, logging
//! 2. a .env file / the environment - overrides
//!
//! Environment variables always override values from the YAML file.

use pushjs_ir::{ColumnDef, SchemaError, SchemaResolver};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid column schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("Invalid value for {var}: {value}")]
    InvalidEnvVar { var: &'static str, value: String },
}

/// Compilation options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompileConfig {
    /// Allow functions over more than one input column
    #[serde(default)]
    pub allow_multiple_inputs: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or module-specific
    pub level: String,

    /// Output format: pretty, json, compact
    pub format: String,

    /// Output destination: stderr, file, both
    pub output: String,

    /// Directory for log files
    pub directory: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            output: "stderr".to_string(),
            directory: "./logs".to_string(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub compile: CompileConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var("PUSHJS_ALLOW_MULTIPLE_INPUTS") {
            self.compile.allow_multiple_inputs = match value.as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        var: "PUSHJS_ALLOW_MULTIPLE_INPUTS",
                        value,
                    })
                }
            };
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(output) = std::env::var("LOG_OUTPUT") {
            self.logging.output = output;
        }
        if let Ok(dir) = std::env::var("LOG_DIR") {
            self.logging.directory = dir;
        }

        Ok(())
    }

    /// Build the column resolver described by `columns`
    pub fn resolver(&self) -> Result<SchemaResolver, ConfigError> {
        Ok(SchemaResolver::from_defs(self.columns.iter().cloned())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushjs_ir::{ColumnResolver, ColumnRole, DataType};

    const SAMPLE: &str = r#"
columns:
  - name: l_shipmode
    role: dimension
    data_type: String
  - name: l_shipdate
    canonical_name: __time
    role: time_dimension
    data_type: Timestamp
  - name: l_quantity
    role: measure
    data_type: Long
compile:
  allow_multiple_inputs: true
logging:
  level: "debug"
  format: "json"
  output: "stderr"
  directory: "./logs"
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.columns.is_empty());
        assert!(!config.compile.allow_multiple_inputs);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "compact");
        assert_eq!(config.logging.output, "stderr");
    }

    #[test]
    fn test_parse_columns_and_options() {
        let config = Config::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.columns.len(), 3);
        assert!(config.compile.allow_multiple_inputs);
        assert_eq!(config.logging.format, "json");

        let resolver = config.resolver().unwrap();
        let time = resolver.lookup("l_shipdate").unwrap();
        assert_eq!(time.canonical_name, "__time");
        assert_eq!(time.role, ColumnRole::TimeDimension);
        assert_eq!(resolver.lookup("l_quantity").unwrap().data_type, DataType::Long);
    }

    #[test]
    fn test_sections_are_optional() {
        let config = Config::from_yaml("columns: []\n").unwrap();
        assert!(!config.compile.allow_multiple_inputs);
        assert_eq!(config.logging.output, "stderr");
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let yaml = r#"
columns:
  - { name: a, role: dimension, data_type: String }
  - { name: a, role: dimension, data_type: Long }
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert!(matches!(config.resolver(), Err(ConfigError::Schema(_))));
    }

    #[test]
    fn test_env_var_override() {
        std::env::set_var("PUSHJS_ALLOW_MULTIPLE_INPUTS", "false");
        std::env::set_var("LOG_OUTPUT", "both");

        let temp_file = std::env::temp_dir().join("pushjs_test_config.yaml");
        std::fs::write(&temp_file, SAMPLE).unwrap();

        let config = Config::load(&temp_file).unwrap();
        assert!(!config.compile.allow_multiple_inputs); // Overridden
        assert_eq!(config.logging.output, "both"); // Overridden

        std::env::set_var("PUSHJS_ALLOW_MULTIPLE_INPUTS", "maybe");
        assert!(matches!(
            Config::load(&temp_file),
            Err(ConfigError::InvalidEnvVar { .. })
        ));

        std::env::remove_var("PUSHJS_ALLOW_MULTIPLE_INPUTS");
        std::env::remove_var("LOG_OUTPUT");
        std::fs::remove_file(temp_file).ok();
    }
}
