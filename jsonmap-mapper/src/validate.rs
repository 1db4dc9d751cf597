//! Type validation of field values against declared constraints.
//!
//! Kind checks are strict: a decoded `89.0` is a float and never satisfies
//! `int`, even though it is a whole number. No coercion or widening happens.

use jsonmap_model::{NamedType, TypeConstraint};
use serde_json::Value;
use thiserror::Error;

/// The constraint is of a form the mapper does not check (intersections).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported type constraint '{constraint}'")]
pub struct UnsupportedConstraint {
    pub constraint: String,
}

/// Runtime type name of a value, as compared against declared names.
pub fn runtime_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Checks `value` against `constraint`.
///
/// Returns `Ok(false)` on an ordinary mismatch and `Err` when the constraint
/// itself cannot be checked, regardless of the value.
pub fn validate(constraint: &TypeConstraint, value: &Value) -> Result<bool, UnsupportedConstraint> {
    match constraint {
        TypeConstraint::Intersection(_) => Err(UnsupportedConstraint {
            constraint: constraint.to_string(),
        }),
        TypeConstraint::Any => Ok(true),
        _ if value.is_null() && constraint.allows_null() => Ok(true),
        TypeConstraint::Named { ty, .. } => Ok(matches_named(ty, value)),
        TypeConstraint::Union(members) => Ok(members.iter().any(|m| matches_named(m, value))),
    }
}

fn matches_named(ty: &NamedType, value: &Value) -> bool {
    match ty {
        NamedType::Bool => value.is_boolean(),
        NamedType::Int => value.is_i64() || value.is_u64(),
        NamedType::Float => value.is_f64(),
        NamedType::True => *value == Value::Bool(true),
        NamedType::False => *value == Value::Bool(false),
        other => runtime_type_name(value) == other.name(),
    }
}
