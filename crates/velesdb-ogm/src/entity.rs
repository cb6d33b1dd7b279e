//! Mapping capabilities implemented by vertex and edge types.
//!
//! A mapped type implements [`GraphLabels`] (its graph labels and whether it
//! is a vertex or an edge) and [`GraphFields`] (a declarative list of its
//! fields). Both are usually derived:
//!
//! ```rust
//! use velesdb_ogm::{GraphFields, GraphLabels, StructDescriptor};
//!
//! #[derive(GraphFields, GraphLabels)]
//! #[ogm(label = "Person")]
//! struct Person {
//!     #[ogm(tag = "pk;name=uuid")]
//!     uuid: String,
//!     age: i64,
//! }
//!
//! let descriptor = StructDescriptor::describe::<Person>().unwrap();
//! assert_eq!(descriptor.label(), "Person");
//! ```
//!
//! or written by hand:
//!
//! ```rust
//! use velesdb_ogm::{EntityKind, FieldDef, FieldType, GraphFields, GraphLabels};
//!
//! struct Knows;
//!
//! impl GraphLabels for Knows {
//!     fn labels() -> Vec<String> {
//!         vec!["KNOWS".to_string()]
//!     }
//!
//!     fn kind() -> EntityKind {
//!         EntityKind::Edge
//!     }
//! }
//!
//! impl GraphFields for Knows {
//!     fn graph_fields() -> Vec<FieldDef> {
//!         vec![FieldDef::new("since", FieldType::Int64).with_tag("index")]
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tag::Tag;
use crate::types::FieldType;

/// Whether a mapped type is a graph node or a graph relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Graph node.
    #[default]
    Vertex,
    /// Graph relationship.
    Edge,
}

/// Labels capability of a mapped type.
pub trait GraphLabels {
    /// Returns the graph labels of the type. The first one is the primary label.
    fn labels() -> Vec<String>;

    /// Returns whether the type is a vertex or an edge.
    fn kind() -> EntityKind {
        EntityKind::Vertex
    }
}

/// Declarative field list of a mapped or embedded type.
pub trait GraphFields {
    /// Returns the field definitions, in declaration order.
    fn graph_fields() -> Vec<FieldDef>;
}

/// A type that can be described as a vertex or edge.
pub trait GraphEntity: GraphLabels + GraphFields {}

impl<T: GraphLabels + GraphFields> GraphEntity for T {}

/// Declaration of one structural field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    name: String,
    tag: Option<String>,
    relationship: Option<String>,
    field_type: FieldType,
    embedded: Option<Vec<FieldDef>>,
}

impl FieldDef {
    /// Declares a field with no tag (a plain property named after the field).
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            tag: None,
            relationship: None,
            field_type,
            embedded: None,
        }
    }

    /// Declares an embedded structure whose fields are flattened into the parent.
    #[must_use]
    pub fn embedded(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        let name = name.into();
        Self {
            field_type: FieldType::structure(name.clone()),
            name,
            tag: None,
            relationship: None,
            embedded: Some(fields),
        }
    }

    /// Sets the tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets an explicit relationship type (builder pattern).
    #[must_use]
    pub fn with_relationship(mut self, relationship: impl Into<String>) -> Self {
        self.relationship = Some(relationship.into());
        self
    }

    /// Returns the structural field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tag, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns the explicit relationship type, if any.
    #[must_use]
    pub fn relationship(&self) -> Option<&str> {
        self.relationship.as_deref()
    }

    /// Returns the field type.
    #[must_use]
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// Returns the embedded fields, for embedded structures.
    #[must_use]
    pub fn embedded_fields(&self) -> Option<&[FieldDef]> {
        self.embedded.as_deref()
    }

    /// Flattens embedded structures depth-first into plain field definitions.
    ///
    /// Embedded structures tagged `-` (or with an empty tag) are dropped with
    /// all their fields.
    ///
    /// # Errors
    ///
    /// Returns a structure error when an embedded structure carries any other
    /// tag or a relationship, since nothing would receive them.
    pub fn flatten(type_name: &str, fields: Vec<FieldDef>) -> Result<Vec<FieldDef>> {
        let mut flat = Vec::with_capacity(fields.len());
        flatten_into(type_name, fields, &mut flat)?;
        Ok(flat)
    }
}

fn flatten_into(
    type_name: &str,
    fields: Vec<FieldDef>,
    out: &mut Vec<FieldDef>,
) -> Result<()> {
    for field in fields {
        let Some(children) = field.embedded else {
            out.push(field);
            continue;
        };

        match field.tag.as_deref() {
            Some(tag) if Tag::parse(tag).is_ignore() => continue,
            Some(tag) => {
                return Err(Error::struct_shape(
                    type_name,
                    format!(
                        "embedded field '{}' cannot carry tag '{tag}', only '-' is allowed",
                        field.name
                    ),
                ));
            }
            None => {}
        }
        if let Some(relationship) = field.relationship.as_deref() {
            return Err(Error::struct_shape(
                type_name,
                format!(
                    "embedded field '{}' cannot declare relationship '{relationship}'",
                    field.name
                ),
            ));
        }

        flatten_into(type_name, children, out)?;
    }
    Ok(())
}
