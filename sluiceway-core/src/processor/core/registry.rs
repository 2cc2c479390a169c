use crate::conf::PipelineConfig;
use crate::conf::types::BuiltinProcessorKind;
use crate::processor::builtin::trim_bytes::TrimBytesProcessor;
use crate::processor::core::Processor;
use anyhow::{Context, Result, anyhow};
use std::collections::HashMap;
use std::sync::Arc;

type BuiltinBuilder = fn(&toml::Value) -> Result<Arc<dyn Processor>>;

fn build_trim_bytes(cfg: &toml::Value) -> anyhow::Result<Arc<dyn Processor>> {
    Ok(Arc::new(TrimBytesProcessor::from_config(
        cfg.clone().try_into()?,
    )?))
}

fn builtin_builders() -> HashMap<BuiltinProcessorKind, BuiltinBuilder> {
    let mut map = HashMap::new();

    map.insert(
        BuiltinProcessorKind::TrimBytes,
        build_trim_bytes as BuiltinBuilder,
    );

    map
}

pub struct ProcessorRegistry {
    processors: Vec<Arc<dyn Processor>>,
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    pub fn load_from_config(&mut self, cfg: &PipelineConfig) -> Result<()> {
        let builders = builtin_builders();

        for processor_cfg in &cfg.processors {
            if !processor_cfg.enabled {
                continue;
            }

            let builder = builders.get(&processor_cfg.kind).ok_or_else(|| {
                anyhow!("unknown builtin processor '{}'", processor_cfg.name)
            })?;

            let processor = builder(&processor_cfg.config).with_context(|| {
                format!("failed to build processor '{}'", processor_cfg.name)
            })?;

            self.processors.push(processor);
        }

        Ok(())
    }

    pub fn all(&self) -> &[Arc<dyn Processor>] {
        &self.processors
    }
}
