use crate::flow::FlowFileId;
use bytes::Bytes;
use std::collections::HashMap;

/// Attribute map carried alongside flow file content.
pub type Attributes = HashMap<String, String>;

/// Byte count of the current content, maintained by [`FlowFile::replace_content`].
pub const ATTR_FLOW_SIZE: &str = "flow.size";

/// Canonical unit of work passed through the sluiceway pipeline.
///
/// A flow file pairs opaque binary content with a string attribute map.
/// Processors replace content and update attributes, but the identity of the
/// flow file is stable: one flow file in, the same flow file out.
#[derive(Debug, Clone)]
pub struct FlowFile {
    /// Stable identity, assigned at creation.
    pub id: FlowFileId,

    /// Per-flow-file attributes; expression resolution reads these.
    pub attributes: Attributes,

    /// Opaque binary content. Never interpreted as text by the pipeline.
    pub content: Bytes,
}

impl FlowFile {
    pub fn new(content: impl Into<Bytes>) -> Self {
        Self::with_attributes(content, Attributes::new())
    }

    pub fn with_attributes(content: impl Into<Bytes>, attributes: Attributes) -> Self {
        let content = content.into();
        let mut flow = Self {
            id: FlowFileId::default(),
            attributes,
            content: Bytes::new(),
        };
        flow.replace_content(content);
        flow
    }

    /// Swap in new content and keep the size attribute in sync.
    pub fn replace_content(&mut self, content: impl Into<Bytes>) {
        self.content = content.into();
        self.attributes
            .insert(ATTR_FLOW_SIZE.to_owned(), self.content.len().to_string());
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
