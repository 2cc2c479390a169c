use crate::conf::validation::ValidationErrors;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    //-------------------------------------------------------------------------
    // Top-level
    //-------------------------------------------------------------------------
    #[error("config validation failed: {validation_errors:?}")]
    Validation { validation_errors: ValidationErrors },

    //-------------------------------------------------------------------------
    // Processors
    //-------------------------------------------------------------------------
    #[error("processor '{processor}' has invalid config: {reason}")]
    InvalidProcessorConfig { processor: String, reason: String },

    #[error("processor '{processor}' property '{property}' must be \"true\" or \"false\", got '{value}'")]
    InvalidBoolProperty {
        processor: String,
        property: String,
        value: String,
    },

    #[error("processor '{processor}' property '{property}' is not a valid data size: {reason}")]
    InvalidSizeProperty {
        processor: String,
        property: String,
        reason: String,
    },

    #[error("processor '{processor}' property '{property}' has a malformed expression: {reason}")]
    MalformedExpressionProperty {
        processor: String,
        property: String,
        reason: String,
    },

    #[error("duplicate processor definition: {name}")]
    DuplicateProcessor { name: String },

    //-------------------------------------------------------------------------
    // Services
    //-------------------------------------------------------------------------
    #[error("key provider must declare a non-empty key field")]
    EmptyKeyField,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
