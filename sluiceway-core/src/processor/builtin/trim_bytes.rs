use crate::conf::types::TrimBytesConfig;
use crate::flow::FlowFile;
use crate::processor::core::errors::ProcessorError;
use crate::processor::core::{Processor, ProcessorResult};
use crate::property::{AttributeExpression, PropertyError, parse_bool_token, parse_data_size};
use bytes::Bytes;
use tracing::debug;

/// TrimBytes removes a configurable number of bytes from the front and back
/// of flow file content.
///
/// Content is opaque binary throughout: nothing is ever split by line or
/// re-encoded, and untouched bytes are forwarded exactly as received. Both
/// offsets may be deferred `${attribute}` expressions resolved per flow file;
/// `remove_all` is a static boolean that, when true, wins over any offsets
/// and empties the content unconditionally.
#[derive(Debug)]
pub struct TrimBytesProcessor {
    start_offset: AttributeExpression,
    end_offset: AttributeExpression,
    remove_all: bool,
}

impl TrimBytesProcessor {
    pub fn from_config(cfg: TrimBytesConfig) -> anyhow::Result<Self> {
        Ok(Self {
            start_offset: AttributeExpression::parse(&cfg.start_offset)?,
            end_offset: AttributeExpression::parse(&cfg.end_offset)?,
            remove_all: parse_bool_token(&cfg.remove_all)?,
        })
    }

    fn resolve_offset(
        expr: &AttributeExpression,
        flow: &FlowFile,
    ) -> Result<u64, PropertyError> {
        let raw = expr.resolve(&flow.attributes)?;
        parse_data_size(&raw)
    }
}

/// Compute `input` with the leading `start_offset` and the trailing
/// `end_offset` bytes removed.
///
/// Each offset is clamped against the full input length independently before
/// the cuts are applied (clamp-then-subtract). Offsets that meet or overlap
/// degrade to an empty result rather than an error, so the function is total:
/// any length, any offsets, any flag. A zero-length result is a normal
/// outcome, not an absence of output.
pub fn extract_range(input: &Bytes, start_offset: u64, end_offset: u64, remove_all: bool) -> Bytes {
    // The override wins unconditionally, offsets included.
    if remove_all {
        return Bytes::new();
    }

    let n = input.len() as u64;
    let tail_cut = end_offset.min(n);
    let effective_start = start_offset.min(n);
    let end = n - tail_cut;

    if end <= effective_start {
        return Bytes::new();
    }

    input.slice(effective_start as usize..end as usize)
}

impl Processor for TrimBytesProcessor {
    fn on_trigger(&self, flow: &mut FlowFile) -> ProcessorResult {
        // Resolution happens once per flow file, before the transform runs.
        // A failure here is a configuration-level problem and must not be
        // coerced to a default offset.
        let start = match Self::resolve_offset(&self.start_offset, flow) {
            Ok(v) => v,
            Err(e) => {
                return ProcessorResult::Error(ProcessorError::fatal(format!("start_offset: {e}")));
            }
        };
        let end = match Self::resolve_offset(&self.end_offset, flow) {
            Ok(v) => v,
            Err(e) => {
                return ProcessorResult::Error(ProcessorError::fatal(format!("end_offset: {e}")));
            }
        };

        let trimmed = extract_range(&flow.content, start, end, self.remove_all);

        debug!(
            flow_id = %flow.id.0,
            before = flow.size(),
            after = trimmed.len(),
            start,
            end,
            remove_all = self.remove_all,
            "trimmed flow file content"
        );

        flow.replace_content(trimmed);
        ProcessorResult::Continue
    }
}
