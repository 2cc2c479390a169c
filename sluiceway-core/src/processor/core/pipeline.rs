use super::{Processor, ProcessorResult};
use crate::flow::FlowFile;
use std::sync::Arc;

pub struct ProcessorPipeline;

impl ProcessorPipeline {
    /// Run every processor over the flow file in declaration order.
    ///
    /// `Remove` and `Error` short-circuit; `Error` additionally invokes the
    /// failing processor's on_error handler before returning.
    pub fn run(processors: &[Arc<dyn Processor>], flow: &mut FlowFile) -> ProcessorResult {
        for proc in processors {
            match proc.on_trigger(flow) {
                ProcessorResult::Continue => continue,
                r @ ProcessorResult::Remove => return r,
                ProcessorResult::Error(err) => {
                    proc.on_error(&err);
                    return ProcessorResult::Error(err);
                }
            }
        }
        ProcessorResult::Continue
    }
}
