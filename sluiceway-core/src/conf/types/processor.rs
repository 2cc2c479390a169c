use crate::conf::types::KeyProviderConfig;
use serde::Deserialize;

/// Top-level pipeline configuration: an ordered list of processors plus any
/// controller services they rely on.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PipelineConfig {
    #[serde(default)]
    pub processors: Vec<ProcessorConfig>,

    pub key_provider: Option<KeyProviderConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorConfig {
    pub name: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(rename = "type")]
    pub kind: BuiltinProcessorKind,

    /// Processor-specific configuration blob
    #[serde(default = "empty_config")]
    pub config: toml::Value,
}

fn default_enabled() -> bool {
    true
}

fn empty_config() -> toml::Value {
    toml::Value::Table(toml::map::Map::new())
}

#[derive(Debug, Deserialize, Eq, Hash, PartialEq, Clone)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinProcessorKind {
    TrimBytes,
}

/// Raw properties of the trim_bytes processor, before admission.
///
/// Offsets and the remove_all flag stay strings here: an offset may be a
/// literal or a `${attribute}` expression, and size/boolean admission runs
/// during validation, not during deserialization.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TrimBytesConfig {
    /// Bytes to drop from the front, e.g. "12 B" or "${numBytes}"
    #[serde(default = "default_offset")]
    pub start_offset: String,

    /// Bytes to drop from the back
    #[serde(default = "default_offset")]
    pub end_offset: String,

    /// When "true", output is unconditionally empty, overriding both offsets
    #[serde(default = "default_remove_all")]
    pub remove_all: String,
}

fn default_offset() -> String {
    "0 B".to_owned()
}

fn default_remove_all() -> String {
    "false".to_owned()
}
