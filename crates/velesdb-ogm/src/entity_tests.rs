//! Tests for `entity` module

use super::entity::*;
use super::error::ErrorKind;
use super::types::FieldType;

fn names(fields: &[FieldDef]) -> Vec<&str> {
    fields.iter().map(FieldDef::name).collect()
}

// =============================================================================
// FieldDef builders
// =============================================================================

#[test]
fn test_field_def_defaults() {
    // Arrange & Act
    let def = FieldDef::new("age", FieldType::Int64);

    // Assert
    assert_eq!(def.name(), "age");
    assert_eq!(def.tag(), None);
    assert_eq!(def.relationship(), None);
    assert_eq!(def.field_type(), &FieldType::Int64);
    assert!(def.embedded_fields().is_none());
}

#[test]
fn test_field_def_builders() {
    let def = FieldDef::new("friends", FieldType::list(FieldType::Any))
        .with_tag("direction=outgoing")
        .with_relationship("KNOWS");

    assert_eq!(def.tag(), Some("direction=outgoing"));
    assert_eq!(def.relationship(), Some("KNOWS"));
}

#[test]
fn test_embedded_field_def() {
    let def = FieldDef::embedded("Base", vec![FieldDef::new("id", FieldType::Int64)]);

    assert_eq!(def.field_type(), &FieldType::structure("Base"));
    assert_eq!(def.embedded_fields().map(<[FieldDef]>::len), Some(1));
}

#[test]
fn test_entity_kind_default_and_serde() {
    assert_eq!(EntityKind::default(), EntityKind::Vertex);
    assert_eq!(
        serde_json::to_string(&EntityKind::Edge).expect("serialize"),
        "\"edge\""
    );
}

// =============================================================================
// Flattening
// =============================================================================

#[test]
fn test_flatten_plain_fields_keeps_order() {
    let fields = vec![
        FieldDef::new("b", FieldType::String),
        FieldDef::new("a", FieldType::String),
    ];

    assert_eq!(names(&FieldDef::flatten("Test", fields).expect("flatten")), vec!["b", "a"]);
}

#[test]
fn test_flatten_nested_embedded_depth_first() {
    // Arrange
    let inner = FieldDef::embedded(
        "Inner",
        vec![
            FieldDef::new("x", FieldType::Int32),
            FieldDef::new("y", FieldType::Int32),
        ],
    );
    let outer = FieldDef::embedded("Outer", vec![FieldDef::new("id", FieldType::Int64), inner]);
    let fields = vec![outer, FieldDef::new("name", FieldType::String)];

    // Act
    let flat = FieldDef::flatten("Test", fields).expect("flatten");

    // Assert
    assert_eq!(names(&flat), vec!["id", "x", "y", "name"]);
    assert!(flat.iter().all(|def| def.embedded_fields().is_none()));
}

#[test]
fn test_flatten_drops_ignored_embedded() {
    let fields = vec![
        FieldDef::embedded("Audit", vec![FieldDef::new("created", FieldType::Int64)])
            .with_tag("-"),
        FieldDef::embedded("Meta", vec![FieldDef::new("version", FieldType::Int64)])
            .with_tag(""),
        FieldDef::new("name", FieldType::String),
    ];

    assert_eq!(names(&FieldDef::flatten("Test", fields).expect("flatten")), vec!["name"]);
}

#[test]
fn test_flatten_keeps_ignored_plain_field() {
    let fields = vec![FieldDef::new("skip", FieldType::Bool).with_tag("-")];

    let flat = FieldDef::flatten("Test", fields).expect("flatten");

    assert_eq!(names(&flat), vec!["skip"]);
    assert_eq!(flat[0].tag(), Some("-"));
}

#[test]
fn test_flatten_rejects_tagged_embedded() {
    // Arrange
    let fields = vec![
        FieldDef::embedded("base", vec![FieldDef::new("id", FieldType::Int64)])
            .with_tag("pk;name=base_id"),
        FieldDef::new("uuid", FieldType::String).with_tag("pk"),
    ];

    // Act
    let err = FieldDef::flatten("Holder", fields).expect_err("tag would be lost");

    // Assert
    assert_eq!(err.kind(), ErrorKind::StructShape);
    assert!(err.to_string().contains("'base'"));
    assert!(err.to_string().contains("pk;name=base_id"));
}

#[test]
fn test_flatten_rejects_embedded_relationship() {
    let inner = FieldDef::embedded("inner", vec![FieldDef::new("x", FieldType::Int32)])
        .with_relationship("KNOWS");
    let fields = vec![FieldDef::embedded("outer", vec![inner])];

    let err = FieldDef::flatten("Holder", fields).expect_err("relationship would be lost");

    assert_eq!(err.kind(), ErrorKind::StructShape);
    assert!(err.to_string().contains("'inner'"));
}
