//! Cross-field validation of a struct descriptor.

use super::structure::StructDescriptor;
use crate::config::MappingConfig;
use crate::error::{Error, Result};
use crate::index::FieldIndex;

impl StructDescriptor {
    /// Validates the structure invariants with the default mapping rules.
    ///
    /// # Errors
    ///
    /// Returns the first structure error found.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&MappingConfig::default())
    }

    /// Validates the structure invariants with explicit mapping rules.
    ///
    /// Checks, in order: at least one field, at most one primary key, no
    /// relationships on edge types, unique graph names, and (when required)
    /// a primary key.
    ///
    /// # Errors
    ///
    /// Returns the first structure error found.
    pub fn validate_with(&self, rules: &MappingConfig) -> Result<()> {
        self.check(rules).map(|_| ())
    }

    // Runs every structure check and returns the reverse index built on the way.
    pub(super) fn check(&self, rules: &MappingConfig) -> Result<FieldIndex> {
        // Ignored fields count here: a type whose fields are all `-` maps to an
        // element without properties and an empty index.
        if self.fields().is_empty() {
            return Err(Error::struct_shape(self.type_name(), "no fields defined"));
        }

        let primary_keys: Vec<&str> = self
            .fields()
            .iter()
            .filter(|(_, descriptor)| descriptor.is_primary_key())
            .map(|(name, _)| name.as_str())
            .collect();
        if primary_keys.len() > 1 {
            return Err(Error::struct_shape(
                self.type_name(),
                format!(
                    "only one primary key allowed, found '{}' and '{}'",
                    primary_keys[0], primary_keys[1]
                ),
            ));
        }

        if !self.is_vertex() {
            if let Some((field, descriptor)) = self.relationships().next() {
                return Err(Error::struct_shape(
                    self.type_name(),
                    format!(
                        "edge types cannot declare relationships, field '{field}' has relationship '{}'",
                        descriptor.relationship().unwrap_or_default()
                    ),
                ));
            }
        }

        let index = self.build_index()?;

        if rules.require_primary_key && primary_keys.is_empty() {
            return Err(Error::struct_shape(
                self.type_name(),
                "a primary key field is required",
            ));
        }

        Ok(index)
    }

    fn build_index(&self) -> Result<FieldIndex> {
        FieldIndex::build(self.fields()).map_err(|(graph_name, first, second)| {
            Error::struct_shape(
                self.type_name(),
                format!("fields '{first}' and '{second}' both map to '{graph_name}'"),
            )
        })
    }
}
