//! Struct descriptors: the full mapping of one vertex or edge type.

use serde::Serialize;
use std::collections::BTreeMap;

use super::field::FieldDescriptor;
use crate::config::MappingConfig;
use crate::entity::{EntityKind, FieldDef, GraphEntity};
use crate::error::{Error, Result};
use crate::index::FieldIndex;

/// Describes how one Rust type maps to a graph vertex or edge.
///
/// Built once per type and immutable afterwards. Callers that describe the
/// same type repeatedly can cache descriptors keyed by `TypeId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructDescriptor {
    type_name: String,
    kind: EntityKind,
    labels: Vec<String>,
    fields: BTreeMap<String, FieldDescriptor>,
    #[serde(skip)]
    index: FieldIndex,
}

impl StructDescriptor {
    /// Describes `T` with the default mapping rules.
    ///
    /// # Errors
    ///
    /// Returns the first field error (wrapped with the field name), or a
    /// structure error for missing labels, no fields, duplicate primary keys,
    /// relationships on an edge type, or clashing graph names.
    pub fn describe<T: GraphEntity>() -> Result<Self> {
        Self::describe_with::<T>(&MappingConfig::default())
    }

    /// Describes `T` with explicit mapping rules.
    ///
    /// # Errors
    ///
    /// See [`StructDescriptor::describe`].
    pub fn describe_with<T: GraphEntity>(rules: &MappingConfig) -> Result<Self> {
        let type_name = std::any::type_name::<T>();
        let fields = describe_fields(type_name, T::graph_fields(), rules)?;
        let descriptor = Self::assemble(type_name, T::kind(), T::labels(), fields, rules)?;

        tracing::debug!(
            type_name,
            label = descriptor.label(),
            kind = ?descriptor.kind,
            fields = descriptor.fields.len(),
            "described graph type"
        );
        Ok(descriptor)
    }

    /// Assembles a descriptor from already built field descriptors.
    ///
    /// Field descriptors are not re-validated; the structure checks are.
    ///
    /// # Errors
    ///
    /// Returns a structure error for missing labels or any violated
    /// structure invariant.
    pub fn from_parts(
        type_name: impl Into<String>,
        kind: EntityKind,
        labels: Vec<String>,
        fields: BTreeMap<String, FieldDescriptor>,
    ) -> Result<Self> {
        let type_name = type_name.into();
        Self::assemble(&type_name, kind, labels, fields, &MappingConfig::default())
    }

    fn assemble(
        type_name: &str,
        kind: EntityKind,
        labels: Vec<String>,
        fields: BTreeMap<String, FieldDescriptor>,
        rules: &MappingConfig,
    ) -> Result<Self> {
        validate_labels(type_name, &labels)?;

        let mut descriptor = Self {
            type_name: type_name.to_string(),
            kind,
            labels,
            fields,
            index: FieldIndex::default(),
        };
        descriptor.index = descriptor.check(rules)?;

        Ok(descriptor)
    }

    /// Returns the Rust type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns whether the type is a vertex or an edge.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns true for vertex types.
    #[must_use]
    pub fn is_vertex(&self) -> bool {
        self.kind == EntityKind::Vertex
    }

    /// Returns the primary graph label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.labels.first().map_or("", String::as_str)
    }

    /// Returns every label, primary label first.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the field descriptors keyed by structural field name.
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, FieldDescriptor> {
        &self.fields
    }

    /// Returns the descriptor of a structural field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// Returns the primary key as `(structural name, descriptor)`, if any.
    #[must_use]
    pub fn primary_key(&self) -> Option<(&str, &FieldDescriptor)> {
        self.fields
            .iter()
            .find(|(_, descriptor)| descriptor.is_primary_key())
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Iterates the relationship fields as `(structural name, descriptor)`.
    pub fn relationships(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields
            .iter()
            .filter(|(_, descriptor)| descriptor.relationship().is_some())
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Returns the reverse lookup from graph names to structural names.
    #[must_use]
    pub fn index(&self) -> &FieldIndex {
        &self.index
    }
}

// Flattens, builds and validates every field; the first error aborts.
fn describe_fields(
    type_name: &str,
    defs: Vec<FieldDef>,
    rules: &MappingConfig,
) -> Result<BTreeMap<String, FieldDescriptor>> {
    let mut fields = BTreeMap::new();

    for def in FieldDef::flatten(type_name, defs)? {
        let descriptor = match def.tag() {
            Some(tag) => FieldDescriptor::from_tag(
                def.name(),
                tag,
                def.relationship(),
                def.field_type().clone(),
            )
            .map_err(|e| e.in_field(type_name, def.name()))?,
            None => {
                let descriptor = FieldDescriptor::new(def.name(), def.field_type().clone());
                match def.relationship() {
                    Some(relationship) => descriptor.with_relationship(relationship),
                    None => descriptor,
                }
            }
        };

        descriptor
            .validate_with(rules)
            .map_err(|e| e.in_field(type_name, def.name()))?;

        if fields.insert(def.name().to_string(), descriptor).is_some() {
            return Err(Error::struct_shape(
                type_name,
                format!("field '{}' is declared more than once", def.name()),
            ));
        }
    }

    Ok(fields)
}

fn validate_labels(type_name: &str, labels: &[String]) -> Result<()> {
    if labels.is_empty() {
        return Err(Error::struct_shape(type_name, "no labels returned"));
    }
    if labels.iter().any(String::is_empty) {
        return Err(Error::struct_shape(type_name, "labels must not be empty"));
    }
    if labels.len() > 1 {
        tracing::debug!(
            type_name,
            primary = %labels[0],
            extra = labels.len() - 1,
            "multiple labels, the first one is primary"
        );
    }
    Ok(())
}
