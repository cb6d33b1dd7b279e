//! Reverse lookup between graph-side names and structural field names.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::descriptor::FieldDescriptor;

/// Maps external (graph) names of mapped fields to structural field names.
///
/// Ignored fields are not indexed. Built once per [`StructDescriptor`].
///
/// [`StructDescriptor`]: crate::StructDescriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldIndex {
    by_graph_name: BTreeMap<String, String>,
}

impl FieldIndex {
    /// Builds the index from structural name → descriptor pairs.
    ///
    /// Returns the conflicting `(graph name, first field, second field)` if
    /// two mapped fields share an external name.
    pub(crate) fn build<'a, I>(fields: I) -> Result<Self, (String, String, String)>
    where
        I: IntoIterator<Item = (&'a String, &'a FieldDescriptor)>,
    {
        let mut by_graph_name = BTreeMap::new();
        for (field, descriptor) in fields {
            if descriptor.is_ignored() {
                continue;
            }
            if let Some(previous) =
                by_graph_name.insert(descriptor.name().to_string(), field.clone())
            {
                return Err((descriptor.name().to_string(), previous, field.clone()));
            }
        }
        Ok(Self { by_graph_name })
    }

    /// Returns the structural field name mapped to `graph_name`.
    #[must_use]
    pub fn field_for(&self, graph_name: &str) -> Option<&str> {
        self.by_graph_name.get(graph_name).map(String::as_str)
    }

    /// Returns the graph name of a structural field.
    #[must_use]
    pub fn graph_name_for(&self, field: &str) -> Option<&str> {
        self.by_graph_name
            .iter()
            .find(|(_, f)| f.as_str() == field)
            .map(|(graph_name, _)| graph_name.as_str())
    }

    /// Returns the number of indexed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_graph_name.len()
    }

    /// Returns true if no field is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_graph_name.is_empty()
    }

    /// Iterates `(graph name, structural field name)` pairs in graph-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_graph_name
            .iter()
            .map(|(graph_name, field)| (graph_name.as_str(), field.as_str()))
    }
}
