//! Tests for `error` module

use super::error::*;

#[test]
fn test_error_codes_are_unique() {
    // Arrange
    let errors = vec![
        Error::grammar("pk=1", 0, "test"),
        Error::exclusivity("uuid", "test"),
        Error::type_mismatch("uuid", "String", "Int32"),
        Error::struct_shape("Person", "test"),
        Error::exclusivity("uuid", "test").in_field("Person", "uuid"),
        Error::Config("test".into()),
    ];

    // Act
    let codes: Vec<&str> = errors.iter().map(Error::code).collect();

    // Assert
    let mut unique_codes = codes.clone();
    unique_codes.sort_unstable();
    unique_codes.dedup();
    assert_eq!(codes.len(), unique_codes.len(), "Error codes must be unique");

    for code in &codes {
        assert!(code.starts_with("OGM-"), "Code {code} should start with OGM-");
    }
}

#[test]
fn test_grammar_display_includes_position() {
    // Arrange
    let err = Error::grammar("pk;bogus", 3, "unknown keyword 'bogus'");

    // Act
    let display = format!("{err}");

    // Assert
    assert!(display.contains("OGM-001"));
    assert!(display.contains("pk;bogus"));
    assert!(display.contains("position 3"));
}

#[test]
fn test_field_wrapper_keeps_inner_kind_and_context() {
    // Arrange
    let inner = Error::type_mismatch("uuid", "String or Int64", "Optional<String>");

    // Act
    let err = inner.clone().in_field("Person", "uuid");

    // Assert
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.code(), "OGM-005");
    let display = format!("{err}");
    assert!(display.contains("Person"));
    assert!(display.contains("OGM-003"));
    assert_eq!(std::error::Error::source(&err).map(ToString::to_string), Some(inner.to_string()));
}

#[test]
fn test_config_error_conversion() {
    // Arrange
    let config_err = crate::config::ConfigError::ParseError("bad toml".into());

    // Act
    let err: Error = config_err.into();

    // Assert
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("bad toml"));
}
