use crate::conf::types::KeyProviderConfig;
use crate::service::{KeyProvider, StaticKeyProvider};

#[test]
fn provider_returns_its_configured_field() {
    // Arrange
    let cfg = KeyProviderConfig {
        key_field: "tenant".to_owned(),
    };

    // Act
    let provider = StaticKeyProvider::from_config(cfg).unwrap();

    // Assert
    assert_eq!(provider.key_field(), "tenant");
}

#[test]
fn empty_key_field_is_rejected() {
    let cfg = KeyProviderConfig {
        key_field: "   ".to_owned(),
    };

    assert!(StaticKeyProvider::from_config(cfg).is_err());
}
