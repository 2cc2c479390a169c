use sluiceway_core::conf::types::{BuiltinProcessorKind, PipelineConfig, ProcessorConfig};
use sluiceway_core::conf::validation::validate;
use sluiceway_core::flow::{Attributes, FlowFile, FlowFileId};
use sluiceway_core::processor::core::pipeline::ProcessorPipeline;
use sluiceway_core::processor::core::registry::ProcessorRegistry;
use sluiceway_core::processor::core::result::ProcessorResult;
use std::collections::BTreeMap;

/// Flow-level test runner for a single builtin processor.
///
/// Mirrors production wiring end to end: properties go through config
/// validation and the processor registry, flow files go through the pipeline.
/// Outcomes land in `transferred` / `failed` so tests can assert on either
/// path.
pub struct TestRunner {
    kind: BuiltinProcessorKind,
    properties: BTreeMap<String, String>,
    enqueued: Vec<FlowFile>,
    transferred: Vec<FlowFile>,
    failed: Vec<(FlowFile, String)>,
    removed: usize,
}

impl TestRunner {
    pub fn new(kind: BuiltinProcessorKind) -> Self {
        Self {
            kind,
            properties: BTreeMap::new(),
            enqueued: Vec::new(),
            transferred: Vec::new(),
            failed: Vec::new(),
            removed: 0,
        }
    }

    pub fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_owned(), value.to_owned());
    }

    pub fn enqueue(&mut self, content: impl Into<Vec<u8>>) {
        self.enqueued.push(FlowFile::new(content.into()));
    }

    pub fn enqueue_with_attributes(
        &mut self,
        content: impl Into<Vec<u8>>,
        attributes: &[(&str, &str)],
    ) {
        let attrs: Attributes = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.enqueued
            .push(FlowFile::with_attributes(content.into(), attrs));
    }

    fn pipeline_config(&self) -> PipelineConfig {
        let mut table = toml::map::Map::new();
        for (name, value) in &self.properties {
            table.insert(name.clone(), toml::Value::String(value.clone()));
        }

        PipelineConfig {
            processors: vec![ProcessorConfig {
                name: "under-test".to_owned(),
                enabled: true,
                kind: self.kind.clone(),
                config: toml::Value::Table(table),
            }],
            key_provider: None,
        }
    }

    pub fn assert_valid(&self) {
        if let Err(errors) = validate(&self.pipeline_config()) {
            panic!("expected valid config, got: {:?}", errors.0);
        }
    }

    pub fn assert_not_valid(&self) {
        assert!(
            validate(&self.pipeline_config()).is_err(),
            "expected invalid config, but it passed validation"
        );
    }

    /// Validate, build, and trigger the processor for every enqueued flow file.
    ///
    /// Panics on configuration problems (tests for those use assert_not_valid
    /// instead); per-flow-file failures are recorded, not panicked, since a
    /// deferred expression can legitimately fail for one flow file and
    /// succeed for the next.
    pub fn run(&mut self) {
        let cfg = self.pipeline_config();

        if let Err(errors) = validate(&cfg) {
            panic!("config rejected before processing: {:?}", errors.0);
        }

        let mut registry = ProcessorRegistry::new();
        registry
            .load_from_config(&cfg)
            .expect("failed to build processor under test");

        for mut flow in self.enqueued.drain(..) {
            match ProcessorPipeline::run(registry.all(), &mut flow) {
                ProcessorResult::Continue => self.transferred.push(flow),
                ProcessorResult::Remove => self.removed += 1,
                ProcessorResult::Error(err) => self.failed.push((flow, err.to_string())),
            }
        }
    }

    pub fn transferred(&self) -> &[FlowFile] {
        &self.transferred
    }

    pub fn failed(&self) -> &[(FlowFile, String)] {
        &self.failed
    }

    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Ids of flow files still waiting to run; the queue drains on `run`.
    pub fn enqueued_ids(&self) -> Vec<FlowFileId> {
        self.enqueued.iter().map(|f| f.id.clone()).collect()
    }

    pub fn assert_all_transferred(&self, count: usize) {
        assert_eq!(
            self.transferred.len(),
            count,
            "expected {count} transferred flow files (failed: {:?})",
            self.failed
        );
        assert!(self.failed.is_empty(), "failures: {:?}", self.failed);
    }

    pub fn single_output(&self) -> &FlowFile {
        assert_eq!(self.transferred.len(), 1, "expected exactly one output");
        &self.transferred[0]
    }
}
