pub mod errors;
pub mod pipeline;
pub mod registry;
pub mod result;
#[cfg(test)]
mod tests;

use self::errors::ProcessorError;
pub use self::result::ProcessorResult;
use crate::flow::FlowFile;

/// A trait representing a processing unit in the flow-file pipeline.
///
/// Processors receive one flow file per trigger and may replace its content
/// or attributes in place. Each processor must be both Send and Sync so a
/// single instance can be triggered concurrently for different flow files
/// without coordination.
pub trait Processor: Send + Sync {
    /// Called once per flow file passing through the pipeline.
    ///
    /// One flow file in, the same flow file out: implementations mutate the
    /// given flow file rather than producing a new one, so identity is
    /// preserved across the pipeline.
    fn on_trigger(&self, flow: &mut FlowFile) -> ProcessorResult;

    /// Called when an error occurs during flow file processing.
    ///
    /// Provides an opportunity to handle or log errors in the pipeline.
    fn on_error(&self, _err: &ProcessorError) {}
}
