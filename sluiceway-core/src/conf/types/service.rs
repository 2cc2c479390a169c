use serde::Deserialize;

/// Configuration for the key-provider controller service.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyProviderConfig {
    /// Attribute or field name whose value keys isolation decisions
    pub key_field: String,
}
