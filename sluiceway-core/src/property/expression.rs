use crate::flow::Attributes;
use crate::property::PropertyError;
use serde::Deserialize;

/// A property value that is either a literal or a deferred `${attribute}`
/// reference resolved per flow file.
///
/// Resolution happens once per invocation, before the processor's transform
/// runs. A reference to an attribute the flow file does not carry is an
/// error, never a silent default.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum AttributeExpression {
    Literal(String),
    Attribute(String),
}

impl AttributeExpression {
    pub fn parse(raw: &str) -> Result<Self, PropertyError> {
        if let Some(inner) = raw.strip_prefix("${") {
            let Some(name) = inner.strip_suffix('}') else {
                return Err(PropertyError::malformed_expression(
                    raw,
                    "unterminated '${'",
                ));
            };
            if name.is_empty() {
                return Err(PropertyError::malformed_expression(
                    raw,
                    "empty attribute name",
                ));
            }
            return Ok(Self::Attribute(name.to_owned()));
        }
        Ok(Self::Literal(raw.to_owned()))
    }

    /// Literal values can be admitted at configuration time; attribute
    /// references are only checkable per flow file.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Attribute(_) => None,
        }
    }

    pub fn resolve(&self, attributes: &Attributes) -> Result<String, PropertyError> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::Attribute(name) => {
                attributes
                    .get(name)
                    .cloned()
                    .ok_or_else(|| PropertyError::MissingAttribute {
                        expr: format!("${{{name}}}"),
                        attribute: name.clone(),
                    })
            }
        }
    }
}

impl TryFrom<String> for AttributeExpression {
    type Error = PropertyError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

/// Strict boolean admission check: exactly `"true"` or `"false"`,
/// case-sensitive. Near-miss tokens are rejected.
pub fn parse_bool_token(raw: &str) -> Result<bool, PropertyError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(PropertyError::InvalidBoolToken {
            value: other.to_owned(),
        }),
    }
}
