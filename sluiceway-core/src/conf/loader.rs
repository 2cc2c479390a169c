use crate::conf::parse::parse_pipeline;
use crate::conf::validation::validate;
use crate::conf::{ConfigError, PipelineConfig};
use std::path::Path;

/// Parse and validate a pipeline config file.
///
/// Validation is fail-fast: a config that does not pass admission is rejected
/// here, before any flow file is processed.
pub fn load_pipeline(path: &Path) -> Result<PipelineConfig, ConfigError> {
    let cfg = parse_pipeline(path)?;

    validate(&cfg).map_err(|validation_errors| ConfigError::Validation { validation_errors })?;

    Ok(cfg)
}
