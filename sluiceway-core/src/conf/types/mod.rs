mod processor;
mod service;

pub use processor::{BuiltinProcessorKind, PipelineConfig, ProcessorConfig, TrimBytesConfig};
pub use service::KeyProviderConfig;
