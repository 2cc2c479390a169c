use crate::conf::parse_pipeline;
use crate::conf::types::BuiltinProcessorKind;
use std::fs;
use tempfile::tempdir;

#[test]
fn parse_trim_bytes_pipeline_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("pipeline.toml");

    fs::write(
        &path,
        r#"
[[processors]]
name = "strip-header"
type = "trim_bytes"

[processors.config]
start_offset = "12 B"
end_offset = "0 B"
remove_all = "false"
"#,
    )
    .unwrap();

    // Act
    let cfg = parse_pipeline(&path).unwrap();

    // Assert
    assert_eq!(cfg.processors.len(), 1);
    assert_eq!(cfg.processors[0].name, "strip-header");
    assert_eq!(cfg.processors[0].kind, BuiltinProcessorKind::TrimBytes);
    assert!(cfg.processors[0].enabled);
}

#[test]
fn parse_pipeline_with_key_provider() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("pipeline.toml");

    fs::write(
        &path,
        r#"
[key_provider]
key_field = "tenant"

[[processors]]
name = "trim"
type = "trim_bytes"
"#,
    )
    .unwrap();

    // Act
    let cfg = parse_pipeline(&path).unwrap();

    // Assert
    assert_eq!(cfg.key_provider.unwrap().key_field, "tenant");
}

#[test]
fn processor_config_blob_defaults_to_empty_table() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("pipeline.toml");

    fs::write(
        &path,
        r#"
[[processors]]
name = "trim"
type = "trim_bytes"
"#,
    )
    .unwrap();

    // Act
    let cfg = parse_pipeline(&path).unwrap();

    // Assert
    assert!(cfg.processors[0].config.as_table().unwrap().is_empty());
}

#[test]
fn disabled_processor_is_parsed_as_disabled() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("pipeline.toml");

    fs::write(
        &path,
        r#"
[[processors]]
name = "trim"
type = "trim_bytes"
enabled = false
"#,
    )
    .unwrap();

    // Act
    let cfg = parse_pipeline(&path).unwrap();

    // Assert
    assert!(!cfg.processors[0].enabled);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let err = parse_pipeline(&path).unwrap_err();

    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn unknown_processor_type_is_a_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("pipeline.toml");

    fs::write(
        &path,
        r#"
[[processors]]
name = "trim"
type = "reverse_bytes"
"#,
    )
    .unwrap();

    // Act
    let err = parse_pipeline(&path).unwrap_err();

    // Assert
    assert!(err.to_string().contains("failed to parse TOML"));
}
