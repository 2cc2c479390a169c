use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropertyError {
    //-------------------------------------------------------------------------
    // Size expressions
    //-------------------------------------------------------------------------
    #[error("invalid data size '{value}': {reason}")]
    InvalidDataSize { value: String, reason: String },

    //-------------------------------------------------------------------------
    // Boolean tokens
    //-------------------------------------------------------------------------
    #[error("invalid boolean '{value}': expected \"true\" or \"false\"")]
    InvalidBoolToken { value: String },

    //-------------------------------------------------------------------------
    // Attribute expressions
    //-------------------------------------------------------------------------
    #[error("expression '{expr}' references missing attribute '{attribute}'")]
    MissingAttribute { expr: String, attribute: String },

    #[error("malformed expression '{expr}': {reason}")]
    MalformedExpression { expr: String, reason: String },
}

impl PropertyError {
    pub fn invalid_data_size(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDataSize {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed_expression(expr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedExpression {
            expr: expr.into(),
            reason: reason.into(),
        }
    }
}
