//! Field type descriptions.
//!
//! Rust has no runtime reflection, so each mapped field carries a small
//! [`FieldType`] describing the shape the validator cares about: scalars,
//! nullable wrappers, ordered collections, maps, and nested structures.
//! [`HasFieldType`] derives that description from the Rust type itself.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Shape of a mapped field's type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Boolean value.
    Bool,
    /// 32-bit (or narrower) integer.
    Int32,
    /// 64-bit integer.
    Int64,
    /// Integer outside the signed 64-bit range (`u64`, `usize`, `i128`, `u128`).
    Int128,
    /// Floating-point value.
    Float64,
    /// Text value.
    String,
    /// Unconstrained value (`serde_json::Value`).
    Any,
    /// A nested structure, identified by its type name.
    Struct(String),
    /// A nullable wrapper (`Option<T>`).
    Optional(Box<FieldType>),
    /// An ordered collection (`Vec<T>`).
    List(Box<FieldType>),
    /// A key/value mapping.
    Map(Box<FieldType>, Box<FieldType>),
}

impl FieldType {
    /// Creates an optional type wrapping `inner`.
    #[must_use]
    pub fn optional(inner: FieldType) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Creates a list type of `element`.
    #[must_use]
    pub fn list(element: FieldType) -> Self {
        Self::List(Box::new(element))
    }

    /// Creates a map type from `key` to `value`.
    #[must_use]
    pub fn map(key: FieldType, value: FieldType) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Creates a structure type.
    #[must_use]
    pub fn structure(name: impl Into<String>) -> Self {
        Self::Struct(name.into())
    }

    /// Returns true for `Optional` wrappers.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Returns true for map types of any key/value shape.
    #[must_use]
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(..))
    }

    /// Returns true for the free-form property map shape `Map(String, Any)`.
    #[must_use]
    pub fn is_property_map(&self) -> bool {
        matches!(self, Self::Map(k, v) if **k == Self::String && **v == Self::Any)
    }

    /// Returns true if a value of this type can point at another graph element.
    ///
    /// Structures, unconstrained values and nullable wrappers of either qualify.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        match self {
            Self::Struct(_) | Self::Any => true,
            Self::Optional(inner) => inner.is_reference(),
            _ => false,
        }
    }

    /// Returns true if this type can hold a relationship: one related element,
    /// or an ordered collection of them that may itself be optional.
    #[must_use]
    pub fn is_relationship_target(&self) -> bool {
        match self {
            Self::List(element) => element.is_reference(),
            Self::Optional(inner) if matches!(**inner, Self::List(_)) => {
                inner.is_relationship_target()
            }
            other => other.is_reference(),
        }
    }

    /// Returns true for the types accepted as primary keys.
    #[must_use]
    pub fn is_primary_key_candidate(&self) -> bool {
        matches!(self, Self::String | Self::Int64)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("Bool"),
            Self::Int32 => f.write_str("Int32"),
            Self::Int64 => f.write_str("Int64"),
            Self::Int128 => f.write_str("Int128"),
            Self::Float64 => f.write_str("Float64"),
            Self::String => f.write_str("String"),
            Self::Any => f.write_str("Any"),
            Self::Struct(name) => f.write_str(name),
            Self::Optional(inner) => write!(f, "Optional<{inner}>"),
            Self::List(element) => write!(f, "List<{element}>"),
            Self::Map(key, value) => write!(f, "Map<{key}, {value}>"),
        }
    }
}

/// Types that can describe their own [`FieldType`].
///
/// Implemented for the standard scalar and container types; the
/// `GraphFields` derive implements it for mapped structures.
pub trait HasFieldType {
    /// Returns the field type description.
    fn field_type() -> FieldType;
}

macro_rules! impl_scalar_field_type {
    ($variant:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl HasFieldType for $ty {
                fn field_type() -> FieldType {
                    FieldType::$variant
                }
            }
        )+
    };
}

impl_scalar_field_type!(Bool => bool);
impl_scalar_field_type!(Int32 => i8, i16, i32, u8, u16);
impl_scalar_field_type!(Int64 => i64, isize, u32);
impl_scalar_field_type!(Int128 => u64, usize, i128, u128);
impl_scalar_field_type!(Float64 => f32, f64);
impl_scalar_field_type!(String => String, &str, char);
impl_scalar_field_type!(Any => serde_json::Value);

impl HasFieldType for serde_json::Map<String, serde_json::Value> {
    fn field_type() -> FieldType {
        FieldType::map(FieldType::String, FieldType::Any)
    }
}

impl<T: HasFieldType> HasFieldType for Option<T> {
    fn field_type() -> FieldType {
        FieldType::optional(T::field_type())
    }
}

impl<T: HasFieldType> HasFieldType for Box<T> {
    fn field_type() -> FieldType {
        T::field_type()
    }
}

impl<T: HasFieldType> HasFieldType for Vec<T> {
    fn field_type() -> FieldType {
        FieldType::list(T::field_type())
    }
}

impl<K: HasFieldType, V: HasFieldType, S> HasFieldType for HashMap<K, V, S> {
    fn field_type() -> FieldType {
        FieldType::map(K::field_type(), V::field_type())
    }
}

impl<K: HasFieldType, V: HasFieldType> HasFieldType for BTreeMap<K, V> {
    fn field_type() -> FieldType {
        FieldType::map(K::field_type(), V::field_type())
    }
}
