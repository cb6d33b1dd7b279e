//! Field descriptors and the tag-driven builder.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::tag::{Direction, Keyword, RawToken, Tag, IGNORE_MARKER, TOKEN_SEPARATOR};
use crate::types::FieldType;

/// The single mapping role a valid field descriptor plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// Plain property.
    Property,
    /// Primary key property.
    PrimaryKey,
    /// Indexed property.
    Indexed,
    /// Property with a uniqueness constraint.
    Unique,
    /// Bulk free-form property map.
    Properties,
    /// Reference to other vertices through a relationship.
    Relationship,
    /// Excluded from the mapping.
    Ignored,
}

/// Describes how one structural field maps to a graph property or relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    primary_key: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    indexed: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    unique: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    properties: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    ignored: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    direction: Option<Direction>,
    field_type: FieldType,
}

impl FieldDescriptor {
    /// Creates a plain property descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            primary_key: false,
            indexed: false,
            unique: false,
            properties: false,
            ignored: false,
            relationship: None,
            direction: None,
            field_type,
        }
    }

    /// Builds a descriptor from a tag.
    ///
    /// # Arguments
    ///
    /// * `field` - Structural name of the field, used when the tag sets no `name`.
    /// * `tag` - The annotation string.
    /// * `relationship` - Explicit relationship type, overriding `relationship=`.
    /// * `field_type` - Type of the field.
    ///
    /// # Errors
    ///
    /// Returns a grammar error for unknown keywords, missing or unexpected
    /// values, duplicate keywords, and `-` mixed with other tokens.
    pub fn from_tag(
        field: &str,
        tag: &str,
        relationship: Option<&str>,
        field_type: FieldType,
    ) -> Result<Self> {
        let tokens = match Tag::parse(tag) {
            Tag::Ignore => return Ok(Self::new(field, field_type).ignored()),
            Tag::Tokens(tokens) => tokens,
        };

        let mut descriptor = Self::new(field, field_type);
        let mut seen: Vec<Keyword> = Vec::with_capacity(tokens.len());

        for token in &tokens {
            let keyword = resolve_keyword(tag, token)?;
            if seen.contains(&keyword) {
                return Err(Error::grammar(
                    tag,
                    token.position,
                    format!("duplicate keyword '{keyword}'"),
                ));
            }
            seen.push(keyword);

            let value = token.value.unwrap_or_default();
            match keyword {
                Keyword::Name => descriptor.name = value.to_string(),
                Keyword::Relationship => descriptor.relationship = Some(value.to_string()),
                Keyword::Direction => {
                    let direction = value
                        .parse::<Direction>()
                        .map_err(|message| Error::grammar(tag, token.position, message))?;
                    descriptor.direction = Some(direction);
                }
                Keyword::PrimaryKey => descriptor.primary_key = true,
                Keyword::Index => descriptor.indexed = true,
                Keyword::Unique => descriptor.unique = true,
                Keyword::Properties => descriptor.properties = true,
            }
        }

        if let Some(relationship) = relationship {
            descriptor.relationship = Some(relationship.to_string());
        }

        tracing::trace!(field, tag, name = %descriptor.name, "built field descriptor");
        Ok(descriptor)
    }

    /// Marks the field as the primary key (builder pattern).
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks the field as indexed (builder pattern).
    #[must_use]
    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Marks the field as unique (builder pattern).
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks the field as a bulk property map (builder pattern).
    #[must_use]
    pub fn properties(mut self) -> Self {
        self.properties = true;
        self
    }

    /// Marks the field as ignored (builder pattern).
    #[must_use]
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Sets the relationship type (builder pattern).
    #[must_use]
    pub fn with_relationship(mut self, relationship: impl Into<String>) -> Self {
        self.relationship = Some(relationship.into());
        self
    }

    /// Sets the relationship direction (builder pattern).
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Returns the external (graph-side) name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true for the primary key.
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// Returns true for indexed properties.
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    /// Returns true for unique properties.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Returns true for bulk property maps.
    #[must_use]
    pub fn is_properties(&self) -> bool {
        self.properties
    }

    /// Returns true for ignored fields.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Returns the relationship type, if the field references other vertices.
    #[must_use]
    pub fn relationship(&self) -> Option<&str> {
        self.relationship.as_deref()
    }

    /// Returns the relationship direction, if set.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the field type.
    #[must_use]
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// Returns the mapping role of this descriptor.
    ///
    /// Only meaningful once the descriptor has been validated; for conflicting
    /// flags the first role in declaration order wins.
    #[must_use]
    pub fn role(&self) -> FieldRole {
        if self.ignored {
            FieldRole::Ignored
        } else if self.properties {
            FieldRole::Properties
        } else if self.relationship.is_some() {
            FieldRole::Relationship
        } else if self.primary_key {
            FieldRole::PrimaryKey
        } else if self.unique {
            FieldRole::Unique
        } else if self.indexed {
            FieldRole::Indexed
        } else {
            FieldRole::Property
        }
    }

    /// Serializes the descriptor back into the tag grammar.
    ///
    /// The external name is always written, so the tag reproduces this
    /// descriptor regardless of the structural field name.
    #[must_use]
    pub fn to_tag(&self) -> String {
        if self.ignored {
            return IGNORE_MARKER.to_string();
        }

        let mut tokens: Vec<String> = Vec::with_capacity(Keyword::ALL.len());
        for keyword in Keyword::ALL {
            match keyword {
                Keyword::Name => tokens.push(format!("{keyword}={}", self.name)),
                Keyword::PrimaryKey if self.primary_key => tokens.push(keyword.to_string()),
                Keyword::Index if self.indexed => tokens.push(keyword.to_string()),
                Keyword::Unique if self.unique => tokens.push(keyword.to_string()),
                Keyword::Properties if self.properties => tokens.push(keyword.to_string()),
                Keyword::Relationship => {
                    if let Some(relationship) = &self.relationship {
                        tokens.push(format!("{keyword}={relationship}"));
                    }
                }
                Keyword::Direction => {
                    if let Some(direction) = self.direction {
                        tokens.push(format!("{keyword}={direction}"));
                    }
                }
                _ => {}
            }
        }

        tokens.join(&TOKEN_SEPARATOR.to_string())
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tag())
    }
}

// Resolves a token to a keyword and checks its value presence.
fn resolve_keyword(tag: &str, token: &RawToken<'_>) -> Result<Keyword> {
    if token.key == IGNORE_MARKER {
        return Err(Error::grammar(
            tag,
            token.position,
            "'-' cannot be combined with other keywords",
        ));
    }
    if token.key.is_empty() {
        return Err(Error::grammar(tag, token.position, "empty token"));
    }

    let keyword = Keyword::from_key(token.key).ok_or_else(|| {
        Error::grammar(
            tag,
            token.position,
            format!("unknown keyword '{}'", token.key),
        )
    })?;

    match (keyword.takes_value(), token.value) {
        (true, None) => Err(Error::grammar(
            tag,
            token.position,
            format!("keyword '{keyword}' requires a value"),
        )),
        (true, Some("")) => Err(Error::grammar(
            tag,
            token.position,
            format!("keyword '{keyword}' has an empty value"),
        )),
        (false, Some(_)) => Err(Error::grammar(
            tag,
            token.position,
            format!("keyword '{keyword}' does not take a value"),
        )),
        _ => Ok(keyword),
    }
}
