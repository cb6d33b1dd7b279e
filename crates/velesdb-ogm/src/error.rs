//! Error types for `VelesDB` object-graph mapping.
//!
//! Every failure in this crate is a deterministic validation failure of the
//! mapping input: retrying with the same type or tag yields the same error.
//! Error codes follow the pattern `OGM-XXX`.

use thiserror::Error;

/// Result type alias for mapping operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of a mapping error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed tag: unknown keyword, missing value, bad token.
    Grammar,
    /// Conflicting flags on one field descriptor.
    Exclusivity,
    /// A flag conflicts with the declared field type.
    TypeMismatch,
    /// Structure-level violation.
    StructShape,
    /// Configuration could not be loaded or is invalid.
    Config,
}

/// Errors that can occur while building or validating mapping descriptors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed tag (OGM-001).
    #[error("[OGM-001] Invalid tag '{tag}' at position {position}: {message}")]
    Grammar {
        /// The offending tag (or name) text.
        tag: String,
        /// Byte offset inside the tag.
        position: usize,
        /// Human-readable message.
        message: String,
    },

    /// Conflicting decorators on one field (OGM-002).
    #[error("[OGM-002] Conflicting decorators on field '{field}': {message}")]
    Exclusivity {
        /// External name of the field.
        field: String,
        /// Human-readable message.
        message: String,
    },

    /// Decorator incompatible with the field type (OGM-003).
    #[error("[OGM-003] Type mismatch on field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// External name of the field.
        field: String,
        /// What the decorator requires.
        expected: String,
        /// The declared field type.
        actual: String,
    },

    /// Invalid structure mapping (OGM-004).
    #[error("[OGM-004] Invalid mapping for '{type_name}': {message}")]
    StructShape {
        /// Rust type name of the structure.
        type_name: String,
        /// Human-readable message.
        message: String,
    },

    /// A field-level error raised while describing a structure (OGM-005).
    #[error("[OGM-005] Field '{field}' of '{type_name}': {source}")]
    Field {
        /// Rust type name of the structure.
        type_name: String,
        /// Structural name of the field.
        field: String,
        /// The underlying field error.
        #[source]
        source: Box<Error>,
    },

    /// Configuration error (OGM-006).
    #[error("[OGM-006] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a grammar error.
    pub(crate) fn grammar(tag: &str, position: usize, message: impl Into<String>) -> Self {
        Self::Grammar {
            tag: tag.to_string(),
            position,
            message: message.into(),
        }
    }

    /// Creates an exclusivity error.
    pub(crate) fn exclusivity(field: &str, message: impl Into<String>) -> Self {
        Self::Exclusivity {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Creates a type mismatch error.
    pub(crate) fn type_mismatch(
        field: &str,
        expected: impl Into<String>,
        actual: impl ToString,
    ) -> Self {
        Self::TypeMismatch {
            field: field.to_string(),
            expected: expected.into(),
            actual: actual.to_string(),
        }
    }

    /// Creates a structure shape error.
    pub(crate) fn struct_shape(type_name: &str, message: impl Into<String>) -> Self {
        Self::StructShape {
            type_name: type_name.to_string(),
            message: message.into(),
        }
    }

    /// Wraps this error with the structure and field it was raised for.
    #[must_use]
    pub(crate) fn in_field(self, type_name: &str, field: &str) -> Self {
        Self::Field {
            type_name: type_name.to_string(),
            field: field.to_string(),
            source: Box::new(self),
        }
    }

    /// Returns the error code (e.g., "OGM-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Grammar { .. } => "OGM-001",
            Self::Exclusivity { .. } => "OGM-002",
            Self::TypeMismatch { .. } => "OGM-003",
            Self::StructShape { .. } => "OGM-004",
            Self::Field { .. } => "OGM-005",
            Self::Config(_) => "OGM-006",
        }
    }

    /// Returns the category of this error.
    ///
    /// Field wrappers report the category of the wrapped error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Grammar { .. } => ErrorKind::Grammar,
            Self::Exclusivity { .. } => ErrorKind::Exclusivity,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::StructShape { .. } => ErrorKind::StructShape,
            Self::Field { source, .. } => source.kind(),
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
