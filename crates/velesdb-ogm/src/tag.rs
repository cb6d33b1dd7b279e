//! Tag grammar parser.
//!
//! A tag is the annotation string attached to a mapped field:
//!
//! ```text
//! tag        := "" | "-" | token (";" token)*
//! token      := keyword | keyword "=" value
//! keyword    := "name" | "pk" | "index" | "unique" | "properties"
//!             | "relationship" | "direction"
//! value      := any-characters-except-";"
//! direction  := "incoming" | "outgoing"
//! ```
//!
//! The parser only splits; it never rejects a key. Deciding whether a key is
//! known, and whether it carries the right kind of value, is the job of the
//! field descriptor builder.
//!
//! # Example
//!
//! ```rust
//! use velesdb_ogm::tag::{Tag, RawToken};
//!
//! let tag = Tag::parse("pk;name=uuid");
//! assert_eq!(
//!     tag.tokens(),
//!     &[
//!         RawToken { key: "pk", value: None, position: 0 },
//!         RawToken { key: "name", value: Some("uuid"), position: 3 },
//!     ]
//! );
//! assert!(Tag::parse("-").is_ignore());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker tag that excludes a field from the mapping.
pub const IGNORE_MARKER: &str = "-";

/// Separator between tokens.
pub const TOKEN_SEPARATOR: char = ';';

/// Separator between a key and its value.
pub const VALUE_SEPARATOR: char = '=';

/// One `key` or `key=value` token of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    /// Text before the first `=` (or the whole token).
    pub key: &'a str,
    /// Text after the first `=`, if any. May be empty.
    pub value: Option<&'a str>,
    /// Byte offset of the token inside the tag.
    pub position: usize,
}

/// A parsed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag<'a> {
    /// The field is excluded from the mapping (`""` or `"-"`).
    Ignore,
    /// The field is mapped according to these tokens, in order.
    Tokens(Vec<RawToken<'a>>),
}

impl<'a> Tag<'a> {
    /// Splits a tag into tokens.
    ///
    /// Never fails: unknown keys and empty tokens are passed through for the
    /// builder to reject with position information.
    #[must_use]
    pub fn parse(input: &'a str) -> Self {
        if input.is_empty() || input == IGNORE_MARKER {
            return Self::Ignore;
        }

        let mut tokens = Vec::new();
        let mut position = 0;
        for raw in input.split(TOKEN_SEPARATOR) {
            let token = match raw.split_once(VALUE_SEPARATOR) {
                Some((key, value)) => RawToken {
                    key,
                    value: Some(value),
                    position,
                },
                None => RawToken {
                    key: raw,
                    value: None,
                    position,
                },
            };
            tokens.push(token);
            position += raw.len() + TOKEN_SEPARATOR.len_utf8();
        }

        Self::Tokens(tokens)
    }

    /// Returns true for the ignore marker.
    #[must_use]
    pub fn is_ignore(&self) -> bool {
        matches!(self, Self::Ignore)
    }

    /// Returns the tokens (empty for the ignore marker).
    #[must_use]
    pub fn tokens(&self) -> &[RawToken<'a>] {
        match self {
            Self::Ignore => &[],
            Self::Tokens(tokens) => tokens,
        }
    }
}

/// Keywords recognized in a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `name=<x>`
    Name,
    /// `pk`
    PrimaryKey,
    /// `index`
    Index,
    /// `unique`
    Unique,
    /// `properties`
    Properties,
    /// `relationship=<r>`
    Relationship,
    /// `direction=<incoming|outgoing>`
    Direction,
}

impl Keyword {
    /// All keywords, in canonical serialization order.
    pub const ALL: [Keyword; 7] = [
        Keyword::Name,
        Keyword::PrimaryKey,
        Keyword::Index,
        Keyword::Unique,
        Keyword::Properties,
        Keyword::Relationship,
        Keyword::Direction,
    ];

    /// Resolves a token key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "pk" => Some(Self::PrimaryKey),
            "index" => Some(Self::Index),
            "unique" => Some(Self::Unique),
            "properties" => Some(Self::Properties),
            "relationship" => Some(Self::Relationship),
            "direction" => Some(Self::Direction),
            _ => None,
        }
    }

    /// Returns the key as written in a tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PrimaryKey => "pk",
            Self::Index => "index",
            Self::Unique => "unique",
            Self::Properties => "properties",
            Self::Relationship => "relationship",
            Self::Direction => "direction",
        }
    }

    /// Returns true for `key=value` keywords, false for bare flags.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        matches!(self, Self::Name | Self::Relationship | Self::Direction)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a relationship field, seen from the declaring vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The edge points at the declaring vertex.
    Incoming,
    /// The edge starts at the declaring vertex.
    Outgoing,
}

impl Direction {
    /// Returns the direction as written in a tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incoming => "incoming",
            Self::Outgoing => "outgoing",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incoming" => Ok(Self::Incoming),
            "outgoing" => Ok(Self::Outgoing),
            other => Err(format!(
                "invalid direction '{other}', expected 'incoming' or 'outgoing'"
            )),
        }
    }
}
