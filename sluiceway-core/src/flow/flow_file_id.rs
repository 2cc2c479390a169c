use uuid::Uuid;

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct FlowFileId(pub String);

impl Default for FlowFileId {
    fn default() -> Self {
        FlowFileId(Uuid::new_v4().to_string())
    }
}

impl From<String> for FlowFileId {
    fn from(s: String) -> Self {
        FlowFileId(s)
    }
}

impl From<&str> for FlowFileId {
    fn from(s: &str) -> Self {
        FlowFileId(s.to_owned())
    }
}
