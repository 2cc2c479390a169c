use anyhow::{Context, bail};
use sluiceway_core::conf::load_pipeline;
use sluiceway_core::flow::FlowFile;
use sluiceway_core::processor::core::pipeline::ProcessorPipeline;
use sluiceway_core::processor::core::registry::ProcessorRegistry;
use sluiceway_core::processor::core::result::ProcessorResult;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Push one unit of input through the configured pipeline.
pub fn run(config: &Path, input: Option<&Path>, output: Option<&Path>) -> anyhow::Result<()> {
    let cfg = load_pipeline(config)
        .with_context(|| format!("failed to load pipeline config {}", config.display()))?;

    let mut registry = ProcessorRegistry::new();
    registry.load_from_config(&cfg)?;

    let content = read_input(input)?;
    let mut flow = FlowFile::new(content);

    info!(flow_id = %flow.id.0, size = flow.size(), "flow file enqueued");

    match ProcessorPipeline::run(registry.all(), &mut flow) {
        ProcessorResult::Continue => {
            info!(flow_id = %flow.id.0, size = flow.size(), "flow file transferred");
            write_output(output, &flow.content)
        }
        ProcessorResult::Remove => {
            info!(flow_id = %flow.id.0, "flow file removed by pipeline");
            Ok(())
        }
        ProcessorResult::Error(err) => bail!("pipeline failed: {err}"),
    }
}

fn read_input(input: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match input {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read input {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(output: Option<&Path>, content: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("failed to write output {}", path.display())),
        None => {
            std::io::stdout().write_all(content)?;
            Ok(())
        }
    }
}
