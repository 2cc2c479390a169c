use crate::flow::FlowFile;
use crate::processor::core::errors::ProcessorError;
use crate::processor::core::pipeline::ProcessorPipeline;
use crate::processor::core::{Processor, ProcessorResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Appends one byte per trigger, so ordering is observable in the content.
struct AppendByte(u8);

impl Processor for AppendByte {
    fn on_trigger(&self, flow: &mut FlowFile) -> ProcessorResult {
        let mut content = flow.content.to_vec();
        content.push(self.0);
        flow.replace_content(content);
        ProcessorResult::Continue
    }
}

struct RemoveFlow;

impl Processor for RemoveFlow {
    fn on_trigger(&self, _flow: &mut FlowFile) -> ProcessorResult {
        ProcessorResult::Remove
    }
}

struct FailFlow {
    error_seen: AtomicUsize,
}

impl Processor for FailFlow {
    fn on_trigger(&self, _flow: &mut FlowFile) -> ProcessorResult {
        ProcessorResult::Error(ProcessorError::fatal("boom"))
    }

    fn on_error(&self, _err: &ProcessorError) {
        self.error_seen.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn processors_run_in_declaration_order() {
    // Arrange
    let processors: Vec<Arc<dyn Processor>> =
        vec![Arc::new(AppendByte(1)), Arc::new(AppendByte(2))];
    let mut flow = FlowFile::new(Vec::new());

    // Act
    let result = ProcessorPipeline::run(&processors, &mut flow);

    // Assert
    assert!(matches!(result, ProcessorResult::Continue));
    assert_eq!(flow.content.as_ref(), &[1, 2]);
}

#[test]
fn remove_short_circuits_the_pipeline() {
    // Arrange
    let processors: Vec<Arc<dyn Processor>> = vec![
        Arc::new(AppendByte(1)),
        Arc::new(RemoveFlow),
        Arc::new(AppendByte(2)),
    ];
    let mut flow = FlowFile::new(Vec::new());

    // Act
    let result = ProcessorPipeline::run(&processors, &mut flow);

    // Assert
    assert!(matches!(result, ProcessorResult::Remove));
    assert_eq!(flow.content.as_ref(), &[1]);
}

#[test]
fn error_invokes_on_error_and_stops() {
    // Arrange
    let failing = Arc::new(FailFlow {
        error_seen: AtomicUsize::new(0),
    });
    let processors: Vec<Arc<dyn Processor>> = vec![failing.clone(), Arc::new(AppendByte(1))];
    let mut flow = FlowFile::new(Vec::new());

    // Act
    let result = ProcessorPipeline::run(&processors, &mut flow);

    // Assert
    assert!(matches!(result, ProcessorResult::Error(_)));
    assert_eq!(failing.error_seen.load(Ordering::SeqCst), 1);
    assert!(flow.content.is_empty());
}
