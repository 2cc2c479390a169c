use crate::conf::types::KeyProviderConfig;
use anyhow::ensure;

/// Capability exposed by a key-provider controller service: name the field
/// whose value keys isolation decisions for a flow file.
pub trait KeyProvider: Send + Sync {
    fn key_field(&self) -> &str;
}

/// Configuration-backed key provider. Pure property holder, no logic.
#[derive(Debug, Clone)]
pub struct StaticKeyProvider {
    key_field: String,
}

impl StaticKeyProvider {
    pub fn from_config(cfg: KeyProviderConfig) -> anyhow::Result<Self> {
        ensure!(
            !cfg.key_field.trim().is_empty(),
            "key provider requires a non-empty key field"
        );
        Ok(Self {
            key_field: cfg.key_field,
        })
    }
}

impl KeyProvider for StaticKeyProvider {
    fn key_field(&self) -> &str {
        &self.key_field
    }
}
