mod flow_file;
mod flow_file_id;
#[cfg(test)]
mod tests;

pub use flow_file::{ATTR_FLOW_SIZE, Attributes, FlowFile};
pub use flow_file_id::FlowFileId;
