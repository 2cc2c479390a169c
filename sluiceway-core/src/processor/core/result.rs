use crate::processor::core::errors::ProcessorError;

#[derive(Debug)]
pub enum ProcessorResult {
    /// Continue to the next processor in the pipeline
    Continue,

    /// Stop the pipeline and discard the flow file
    Remove,

    /// Error that should invoke on_error handlers
    Error(ProcessorError),
}
