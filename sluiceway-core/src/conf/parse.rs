use crate::conf::ConfigError;
use crate::conf::types::PipelineConfig;
use std::fs;
use std::path::Path;

pub fn parse_pipeline(path: &Path) -> Result<PipelineConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let parsed: PipelineConfig = toml::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;
    Ok(parsed)
}
