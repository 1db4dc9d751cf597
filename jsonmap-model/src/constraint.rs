//! Declared type restrictions on constructor parameters, properties and
//! setter parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ModelError, ModelResult};

/// A single named type inside a constraint.
///
/// The primitive kinds (`Bool`, `Int`, `Float`) are checked by value kind,
/// `True`/`False` by literal, and everything else by comparing the value's
/// runtime type name against [`NamedType::name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedType {
    Bool,
    Int,
    Float,
    String,
    True,
    False,
    Null,
    Array,
    Object,
    /// Any other declared name, matched structurally.
    Class(String),
}

impl NamedType {
    /// Parses a single type name. Unknown names become [`NamedType::Class`].
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "bool" | "boolean" => Self::Bool,
            "int" | "integer" => Self::Int,
            "float" | "double" => Self::Float,
            "string" => Self::String,
            "true" => Self::True,
            "false" => Self::False,
            "null" => Self::Null,
            "array" => Self::Array,
            "object" => Self::Object,
            other => Self::Class(other.to_string()),
        }
    }

    /// The canonical name, as it appears in messages and in runtime type
    /// name comparisons.
    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
            Self::Class(name) => name,
        }
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A declared type restriction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeConstraint {
    /// No declared type; every value is accepted.
    #[default]
    Any,
    /// One named type, optionally accepting `null`.
    Named { ty: NamedType, nullable: bool },
    /// Any member may match.
    Union(Vec<NamedType>),
    /// All members must match. Not supported by the mapper: encountering one
    /// is a modelling error, not a data error.
    Intersection(Vec<NamedType>),
}

impl TypeConstraint {
    /// Non-nullable single named type.
    pub fn named(ty: NamedType) -> Self {
        Self::Named { ty, nullable: false }
    }

    /// Nullable single named type (`?ty`).
    pub fn nullable(ty: NamedType) -> Self {
        Self::Named { ty, nullable: true }
    }

    /// Union of the given members.
    pub fn union(members: impl IntoIterator<Item = NamedType>) -> Self {
        Self::Union(members.into_iter().collect())
    }

    /// Whether `null` is accepted without consulting the members.
    pub fn allows_null(&self) -> bool {
        match self {
            Self::Any => true,
            Self::Named { ty, nullable } => *nullable || *ty == NamedType::Null,
            Self::Union(members) => members.contains(&NamedType::Null),
            Self::Intersection(_) => false,
        }
    }

    /// Parses the textual form: `""`/`mixed`, `int`, `?int`, `int|string`,
    /// `A&B`. A two-member union with `null` collapses to a nullable named
    /// type. Anything containing `&` is an intersection. Grouped forms such
    /// as `(A&B)|null` are rejected.
    pub fn parse(text: &str) -> ModelResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "mixed" {
            return Ok(Self::Any);
        }

        if trimmed.contains(['(', ')']) || (trimmed.contains('&') && trimmed.contains('|')) {
            return Err(invalid(text, "grouped constraints are not supported"));
        }

        if trimmed.contains('&') {
            let members = split_members(trimmed, &['&'], text)?;
            return Ok(Self::Intersection(members));
        }

        if let Some(rest) = trimmed.strip_prefix('?') {
            if rest.contains('|') {
                return Err(invalid(text, "'?' cannot prefix a union"));
            }
            let name = rest.trim();
            if name.is_empty() {
                return Err(invalid(text, "missing type after '?'"));
            }
            return Ok(Self::nullable(NamedType::parse(name)));
        }

        if trimmed.contains('|') {
            let members = split_members(trimmed, &['|'], text)?;
            let non_null: Vec<&NamedType> =
                members.iter().filter(|m| **m != NamedType::Null).collect();
            if members.len() == 2 && non_null.len() == 1 {
                return Ok(Self::nullable(non_null[0].clone()));
            }
            return Ok(Self::Union(members));
        }

        Ok(Self::named(NamedType::parse(trimmed)))
    }
}

fn invalid(text: &str, reason: &str) -> ModelError {
    ModelError::InvalidConstraint {
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

fn split_members(trimmed: &str, separators: &[char], text: &str) -> ModelResult<Vec<NamedType>> {
    let pieces: Vec<&str> = trimmed
        .split(|c: char| separators.contains(&c))
        .map(str::trim)
        .collect();
    let mut members = Vec::with_capacity(pieces.len());
    for (i, piece) in pieces.iter().enumerate() {
        if piece.is_empty() {
            return Err(invalid(text, &format!("empty member at position {i}")));
        }
        members.push(NamedType::parse(piece));
    }
    if members.is_empty() {
        return Err(invalid(text, "no members"));
    }
    Ok(members)
}

impl FromStr for TypeConstraint {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NamedType> for TypeConstraint {
    fn from(ty: NamedType) -> Self {
        Self::named(ty)
    }
}

impl fmt::Display for TypeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("mixed"),
            Self::Named { ty, nullable: true } => write!(f, "?{ty}"),
            Self::Named { ty, nullable: false } => write!(f, "{ty}"),
            Self::Union(members) => write_joined(f, members, "|"),
            Self::Intersection(members) => write_joined(f, members, "&"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, members: &[NamedType], sep: &str) -> fmt::Result {
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{member}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nullable_union_as_named() {
        assert_eq!(
            TypeConstraint::parse("null|string").unwrap(),
            TypeConstraint::nullable(NamedType::String)
        );
    }

    #[test]
    fn rejects_dangling_pipe() {
        assert!(TypeConstraint::parse("int|").is_err());
    }

    #[test]
    fn rejects_grouped_forms() {
        for text in ["(A&B)|null", "A&B|C", "(A&B)", "(int)"] {
            let err = TypeConstraint::parse(text).unwrap_err();
            assert!(
                matches!(err, ModelError::InvalidConstraint { ref reason, .. } if reason.contains("grouped")),
                "{text}: {err}"
            );
        }
    }

    #[test]
    fn rejects_dangling_ampersand() {
        assert!(TypeConstraint::parse("A&").is_err());
    }
}
