//! Field and struct descriptors.
//!
//! A [`FieldDescriptor`] is built from a field's tag and type, then validated
//! on its own. A [`StructDescriptor`] collects the field descriptors of one
//! type and validates the invariants that span fields.

mod field;
mod field_validation;
mod structure;
mod structure_validation;

#[cfg(test)]
mod field_tests;

pub use field::{FieldDescriptor, FieldRole};
pub use structure::StructDescriptor;
