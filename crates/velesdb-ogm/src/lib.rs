//! # `VelesDB` OGM
//!
//! Object-graph mapping descriptors for `VelesDB` graph collections.
//!
//! Rust structs are mapped onto vertices and edges through a small tag
//! language attached to each field. This crate parses and validates those
//! tags and assembles them into a [`StructDescriptor`] per type, which the
//! query layer uses to read and write graph elements.
//!
//! ## Features
//!
//! - **Tag grammar**: `pk;name=uuid`, `relationship=KNOWS;direction=outgoing`, `-`
//! - **Strict validation**: flag exclusivity and type compatibility per field
//! - **Struct checks**: single primary key, no relationships on edge types
//! - **Derive macros**: `#[derive(GraphFields, GraphLabels)]` (feature `derive`)
//!
//! ## Quick Start
//!
//! ```rust
//! use velesdb_ogm::{FieldDescriptor, FieldType};
//!
//! let field = FieldDescriptor::from_tag("uuid", "pk;name=uuid", None, FieldType::String)?;
//! field.validate()?;
//!
//! assert!(field.is_primary_key());
//! assert_eq!(field.name(), "uuid");
//! # Ok::<(), velesdb_ogm::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod descriptor;
pub mod entity;
#[cfg(test)]
mod entity_tests;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod index;
pub mod tag;
pub mod types;

pub use config::{ConfigError, MappingConfig, OgmConfig};
pub use descriptor::{FieldDescriptor, FieldRole, StructDescriptor};
pub use entity::{EntityKind, FieldDef, GraphEntity, GraphFields, GraphLabels};
pub use error::{Error, ErrorKind, Result};
pub use index::FieldIndex;
pub use tag::{Direction, Keyword, Tag};
pub use types::{FieldType, HasFieldType};

#[cfg(feature = "derive")]
pub use velesdb_ogm_derive::{GraphFields, GraphLabels};
