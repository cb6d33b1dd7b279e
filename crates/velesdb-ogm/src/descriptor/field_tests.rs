//! Tests for the tag-driven field descriptor builder.

use super::*;
use crate::error::ErrorKind;
use crate::tag::Direction;
use crate::types::FieldType;
use proptest::prelude::*;

fn build(tag: &str, field_type: FieldType) -> crate::Result<FieldDescriptor> {
    FieldDescriptor::from_tag("Field", tag, None, field_type)
}

fn assert_grammar_error(tag: &str) {
    let err = build(tag, FieldType::String).expect_err(tag);
    assert_eq!(err.kind(), ErrorKind::Grammar, "tag {tag:?} gave {err}");
}

// =============================================================================
// Keywords
// =============================================================================

#[test]
fn test_name_only() {
    // Arrange & Act
    let descriptor = build("name=id", FieldType::Int64).expect("valid tag");

    // Assert
    assert_eq!(descriptor, FieldDescriptor::new("id", FieldType::Int64));
    assert_eq!(descriptor.role(), FieldRole::Property);
}

#[test]
fn test_primary_key_with_name() {
    // Arrange & Act
    let descriptor = build("pk;name=uuid", FieldType::String).expect("valid tag");

    // Assert
    assert_eq!(
        descriptor,
        FieldDescriptor::new("uuid", FieldType::String).primary_key()
    );
    assert!(descriptor.validate().is_ok());
}

#[test]
fn test_index_and_unique() {
    let index = build("index;name=index_field", FieldType::String).expect("valid tag");
    let unique = build("unique;name=unique_name", FieldType::String).expect("valid tag");

    assert_eq!(
        index,
        FieldDescriptor::new("index_field", FieldType::String).indexed()
    );
    assert_eq!(
        unique,
        FieldDescriptor::new("unique_name", FieldType::String).unique()
    );
}

#[test]
fn test_relationship_with_direction() {
    // Arrange
    let self_ref = FieldType::optional(FieldType::structure("ValidStruct"));

    // Act
    let descriptor = build(
        "relationship=one2one;direction=incoming;name=o2o",
        self_ref.clone(),
    )
    .expect("valid tag");

    // Assert
    assert_eq!(descriptor.relationship(), Some("one2one"));
    assert_eq!(descriptor.direction(), Some(Direction::Incoming));
    assert_eq!(descriptor.name(), "o2o");
    assert_eq!(descriptor.field_type(), &self_ref);
    assert_eq!(descriptor.role(), FieldRole::Relationship);
    assert!(descriptor.validate().is_ok());
}

#[test]
fn test_properties() {
    let props = FieldType::map(FieldType::String, FieldType::Any);

    let descriptor = build("properties;name=test", props.clone()).expect("valid tag");

    assert_eq!(descriptor, FieldDescriptor::new("test", props).properties());
}

#[test]
fn test_ignore_uses_field_name() {
    // Arrange & Act
    let descriptor =
        FieldDescriptor::from_tag("IgnoreMe", "-", None, FieldType::Int64).expect("valid tag");

    // Assert
    assert!(descriptor.is_ignored());
    assert_eq!(descriptor.name(), "IgnoreMe");
    assert_eq!(descriptor.role(), FieldRole::Ignored);
    assert!(descriptor.validate().is_ok());
}

#[test]
fn test_empty_tag_is_ignore() {
    let descriptor = build("", FieldType::Bool).expect("valid tag");

    assert!(descriptor.is_ignored());
    assert_eq!(descriptor.name(), "Field");
}

#[test]
fn test_name_defaults_to_field_name() {
    let descriptor = build("index", FieldType::String).expect("valid tag");

    assert_eq!(descriptor.name(), "Field");
}

#[test]
fn test_name_value_may_contain_separator() {
    let descriptor = build("name=a=b", FieldType::String).expect("valid tag");

    assert_eq!(descriptor.name(), "a=b");
}

// =============================================================================
// Relationship override
// =============================================================================

#[test]
fn test_relationship_override_sets_relationship() {
    let descriptor = FieldDescriptor::from_tag(
        "friends",
        "direction=outgoing",
        Some("KNOWS"),
        FieldType::list(FieldType::structure("Person")),
    )
    .expect("valid tag");

    assert_eq!(descriptor.relationship(), Some("KNOWS"));
    assert!(descriptor.validate().is_ok());
}

#[test]
fn test_relationship_override_wins_over_tag() {
    let descriptor = FieldDescriptor::from_tag(
        "friends",
        "relationship=LIKES",
        Some("KNOWS"),
        FieldType::list(FieldType::Any),
    )
    .expect("valid tag");

    assert_eq!(descriptor.relationship(), Some("KNOWS"));
}

#[test]
fn test_relationship_override_dropped_for_ignored_field() {
    let descriptor =
        FieldDescriptor::from_tag("friends", "-", Some("KNOWS"), FieldType::Any).expect("valid");

    assert!(descriptor.is_ignored());
    assert_eq!(descriptor.relationship(), None);
}

// =============================================================================
// Grammar errors
// =============================================================================

#[test]
fn test_unknown_keyword_is_rejected() {
    assert_grammar_error("sdfasdfasdfa");
    assert_grammar_error("pk;primary");
    assert_grammar_error("PK");
}

#[test]
fn test_missing_or_empty_values_are_rejected() {
    assert_grammar_error("name");
    assert_grammar_error("name=");
    assert_grammar_error("relationship");
    assert_grammar_error("direction=");
}

#[test]
fn test_flag_with_value_is_rejected() {
    assert_grammar_error("pk=true");
    assert_grammar_error("properties=yes");
}

#[test]
fn test_invalid_direction_is_rejected() {
    assert_grammar_error("relationship=r;direction=both");
    assert_grammar_error("relationship=r;direction=INCOMING");
}

#[test]
fn test_empty_tokens_are_rejected() {
    assert_grammar_error("pk;;index");
    assert_grammar_error("pk;");
    assert_grammar_error(";pk");
}

#[test]
fn test_duplicate_keyword_is_rejected() {
    assert_grammar_error("name=a;name=b");
    assert_grammar_error("pk;pk");
}

#[test]
fn test_ignore_marker_cannot_be_combined() {
    assert_grammar_error("-;pk");
    assert_grammar_error("name=x;-");
}

#[test]
fn test_whitespace_is_not_trimmed() {
    assert_grammar_error(" pk");
    assert_grammar_error("pk; index");
}

#[test]
fn test_grammar_error_reports_token_position() {
    let err = build("pk;name=uuid;bogus", FieldType::String).expect_err("unknown keyword");

    match err {
        crate::Error::Grammar { position, tag, .. } => {
            assert_eq!(position, 13);
            assert_eq!(tag, "pk;name=uuid;bogus");
        }
        other => panic!("expected grammar error, got {other:?}"),
    }
}

// =============================================================================
// Serialization back to tags
// =============================================================================

#[test]
fn test_to_tag_canonical_order() {
    let descriptor = build(
        "direction=outgoing;name=m2o;relationship=many2one",
        FieldType::list(FieldType::Any),
    )
    .expect("valid tag");

    assert_eq!(
        descriptor.to_tag(),
        "name=m2o;relationship=many2one;direction=outgoing"
    );
    assert_eq!(descriptor.to_string(), descriptor.to_tag());
}

#[test]
fn test_to_tag_ignored() {
    let descriptor = build("-", FieldType::Int64).expect("valid tag");

    assert_eq!(descriptor.to_tag(), "-");
}

#[test]
fn test_descriptor_serde_skips_unset_flags() {
    let descriptor = FieldDescriptor::new("uuid", FieldType::String).primary_key();

    let json = serde_json::to_value(&descriptor).expect("serialize");

    assert_eq!(
        json,
        serde_json::json!({"name": "uuid", "primary_key": true, "field_type": "string"})
    );
    let back: FieldDescriptor = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, descriptor);
}

// =============================================================================
// Property-based tests
// =============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_=]{0,15}"
}

fn tag_strategy() -> impl Strategy<Value = String> {
    (
        proptest::option::of(name_strategy()),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of("[A-Z_]{1,12}"),
        proptest::option::of(prop_oneof![Just("incoming"), Just("outgoing")]),
    )
        .prop_map(|(name, pk, index, unique, properties, relationship, direction)| {
            let mut tokens = Vec::new();
            if let Some(name) = name {
                tokens.push(format!("name={name}"));
            }
            for (set, keyword) in [
                (pk, "pk"),
                (index, "index"),
                (unique, "unique"),
                (properties, "properties"),
            ] {
                if set {
                    tokens.push(keyword.to_string());
                }
            }
            if let Some(relationship) = relationship {
                tokens.push(format!("relationship={relationship}"));
            }
            if let Some(direction) = direction {
                tokens.push(format!("direction={direction}"));
            }
            if tokens.is_empty() {
                "-".to_string()
            } else {
                tokens.join(";")
            }
        })
        .prop_flat_map(|tag| {
            let tokens: Vec<String> = tag.split(';').map(str::to_string).collect();
            Just(tokens).prop_shuffle().prop_map(|tokens| tokens.join(";"))
        })
}

proptest! {
    /// Property: building, serializing and rebuilding yields the same descriptor.
    #[test]
    fn prop_to_tag_round_trip_is_idempotent(
        field in "[a-z_]{1,12}",
        tag in tag_strategy(),
    ) {
        let first = FieldDescriptor::from_tag(&field, &tag, None, FieldType::Any)
            .expect("generated tags are grammatical");
        let second = FieldDescriptor::from_tag("other", &first.to_tag(), None, FieldType::Any);

        if first.is_ignored() {
            // the ignore marker carries no name, the field name is reapplied
            prop_assert!(second.expect("ignore marker").is_ignored());
        } else {
            prop_assert_eq!(second.expect("serialized tags are grammatical"), first);
        }
    }

    /// Property: arbitrary input never panics the builder.
    #[test]
    fn prop_builder_never_panics(tag in ".{0,48}") {
        let _ = FieldDescriptor::from_tag("field", &tag, None, FieldType::String);
    }
}
