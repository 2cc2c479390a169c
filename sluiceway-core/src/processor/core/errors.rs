use std::fmt::{Display, Formatter};

/// Represents an error that occurred while a processor handled a flow file.
///
/// This error type encapsulates a string message describing what went wrong,
/// typically a per-invocation property resolution failure surfaced as a
/// configuration-level problem.
#[derive(Debug)]
pub struct ProcessorError {
    /// A descriptive message explaining the error that occurred
    pub message: String,
    /// Whether the error is considered fatal and should stop the pipeline
    pub fatal: bool,
}

impl ProcessorError {
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fatal: true,
        }
    }
}

impl Display for ProcessorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fatal = if self.fatal { "(fatal) " } else { "" };
        write!(f, "{}{}", fatal, self.message)
    }
}
