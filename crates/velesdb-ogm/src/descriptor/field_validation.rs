//! Validation of a single field descriptor against its type.
//!
//! Checks run in a fixed order and the first violation is returned:
//!
//! 1. ignored fields carry nothing else
//! 2. `properties` is exclusive, and its type is `Map(String, Any)`
//! 3. `direction` requires `relationship`
//! 4. relationships exclude key flags and need a reference or list type
//! 5. `pk` excludes `index`/`unique`; `index` and `unique` exclude each other
//! 6. primary keys are a non-optional `String` or `Int64`
//! 7. name length, then the untagged map rule, from [`MappingConfig`]

use super::field::FieldDescriptor;
use crate::config::MappingConfig;
use crate::error::{Error, Result};
use crate::types::FieldType;

impl FieldDescriptor {
    /// Validates the descriptor with the default mapping rules.
    ///
    /// # Errors
    ///
    /// Returns the first exclusivity, type mismatch or name violation found.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&MappingConfig::default())
    }

    /// Validates the descriptor with explicit mapping rules.
    ///
    /// # Errors
    ///
    /// Returns the first exclusivity, type mismatch or name violation found.
    pub fn validate_with(&self, rules: &MappingConfig) -> Result<()> {
        if self.is_ignored() {
            return self.validate_ignored();
        }

        if self.is_properties() {
            self.validate_properties()?;
        }

        if self.direction().is_some() && self.relationship().is_none() {
            return Err(Error::exclusivity(
                self.name(),
                "direction requires a relationship",
            ));
        }

        if self.relationship().is_some() {
            self.validate_relationship()?;
        }

        self.validate_key_flags()?;

        if self.is_primary_key() && !self.field_type().is_primary_key_candidate() {
            return Err(Error::type_mismatch(
                self.name(),
                "String or Int64 for a primary key",
                self.field_type(),
            ));
        }

        validate_name(self.name(), rules)?;

        if rules.reject_untagged_maps && self.is_plain() && self.field_type().is_map() {
            return Err(Error::type_mismatch(
                self.name(),
                "the properties decorator for map fields",
                self.field_type(),
            ));
        }

        Ok(())
    }

    fn is_plain(&self) -> bool {
        !(self.is_primary_key()
            || self.is_indexed()
            || self.is_unique()
            || self.is_properties()
            || self.relationship().is_some())
    }

    fn validate_ignored(&self) -> Result<()> {
        let combined = self.is_primary_key()
            || self.is_indexed()
            || self.is_unique()
            || self.is_properties()
            || self.relationship().is_some()
            || self.direction().is_some();
        if combined {
            return Err(Error::exclusivity(
                self.name(),
                "ignored fields cannot carry other decorators",
            ));
        }
        Ok(())
    }

    fn validate_properties(&self) -> Result<()> {
        let conflicts: Vec<&str> = [
            (self.is_primary_key(), "pk"),
            (self.is_indexed(), "index"),
            (self.is_unique(), "unique"),
            (self.relationship().is_some(), "relationship"),
            (self.direction().is_some(), "direction"),
        ]
        .into_iter()
        .filter_map(|(set, keyword)| set.then_some(keyword))
        .collect();

        if !conflicts.is_empty() {
            return Err(Error::exclusivity(
                self.name(),
                format!("properties cannot be combined with {}", conflicts.join(", ")),
            ));
        }

        if !self.field_type().is_property_map() {
            return Err(Error::type_mismatch(
                self.name(),
                FieldType::map(FieldType::String, FieldType::Any).to_string(),
                self.field_type(),
            ));
        }

        Ok(())
    }

    fn validate_relationship(&self) -> Result<()> {
        if self.is_primary_key() || self.is_indexed() || self.is_unique() {
            return Err(Error::exclusivity(
                self.name(),
                "relationship cannot be combined with pk, index or unique",
            ));
        }

        if !self.field_type().is_relationship_target() {
            return Err(Error::type_mismatch(
                self.name(),
                "a structure, optional structure, or an optional list of them for a relationship",
                self.field_type(),
            ));
        }

        Ok(())
    }

    fn validate_key_flags(&self) -> Result<()> {
        if self.is_primary_key() && (self.is_indexed() || self.is_unique()) {
            return Err(Error::exclusivity(
                self.name(),
                "pk is already unique and indexed",
            ));
        }
        if self.is_indexed() && self.is_unique() {
            return Err(Error::exclusivity(
                self.name(),
                "unique already implies an index",
            ));
        }
        Ok(())
    }
}

fn validate_name(name: &str, rules: &MappingConfig) -> Result<()> {
    if name.is_empty() {
        return Err(Error::grammar(name, 0, "name is empty"));
    }
    if rules.max_name_length > 0 && name.len() > rules.max_name_length {
        return Err(Error::grammar(
            name,
            rules.max_name_length,
            format!("name exceeds max length {}", rules.max_name_length),
        ));
    }
    Ok(())
}
