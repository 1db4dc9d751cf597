use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::TypeConstraint;

/// Prefix of the conventional setter name.
pub const SETTER_PREFIX: &str = "set";

/// Conventional setter for a declared property: `"set"` followed by the
/// property name with its first character uppercased (`valueType` →
/// `setValueType`).
///
/// This is the only place the convention is spelled out; descriptors and the
/// setter stage both go through it.
pub fn setter_name(property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        Some(first) => {
            let mut name = String::with_capacity(SETTER_PREFIX.len() + property.len());
            name.push_str(SETTER_PREFIX);
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
            name
        }
        None => SETTER_PREFIX.to_string(),
    }
}

/// Alternate input key for a parameter or property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldAlias(String);

impl FieldAlias {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldAlias {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldAlias {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for FieldAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keeps an explicit `null` default distinct from "no default".
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// One constructor parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(default)]
    pub constraint: TypeConstraint,
    /// Declared default. The parameter is optional iff this is `Some`;
    /// `Some(Value::Null)` is a real default.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Only consulted for ordinary parameters. Property-backed parameters
    /// take their alias from the property of the same name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<FieldAlias>,
    /// The parameter declares (and initializes) a property of the same name.
    #[serde(default)]
    pub promoted: bool,
}

impl ParameterDescriptor {
    /// A parameter with no default.
    pub fn required(name: impl Into<String>, constraint: impl Into<TypeConstraint>) -> Self {
        Self {
            name: name.into(),
            constraint: constraint.into(),
            default: None,
            alias: None,
            promoted: false,
        }
    }

    /// A parameter with a declared default.
    pub fn optional(
        name: impl Into<String>,
        constraint: impl Into<TypeConstraint>,
        default: impl Into<Value>,
    ) -> Self {
        Self {
            default: Some(default.into()),
            ..Self::required(name, constraint)
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<FieldAlias>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Marks the parameter as backed by a same-named property.
    #[must_use]
    pub fn promoted(mut self) -> Self {
        self.promoted = true;
        self
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

/// One declared instance property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(default)]
    pub constraint: TypeConstraint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<FieldAlias>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, constraint: impl Into<TypeConstraint>) -> Self {
        Self {
            name: name.into(),
            constraint: constraint.into(),
            alias: None,
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<FieldAlias>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Input key for this property: the alias if one is attached, else the
    /// declared name.
    pub fn resolution_name(&self) -> &str {
        self.alias.as_ref().map_or(self.name.as_str(), FieldAlias::as_str)
    }
}

/// One declared method. Only arity and the first parameter's constraint
/// matter to the mapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<TypeConstraint>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, parameters: Vec<TypeConstraint>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn first_parameter(&self) -> Option<&TypeConstraint> {
        self.parameters.first()
    }
}

/// Reflected shape of a mapping target.
///
/// `constructor` is `None` when the type declares no initializer; such types
/// are built with zero arguments and leave their properties unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructor: Option<Vec<ParameterDescriptor>>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    /// A descriptor with no initializer, properties or methods.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            constructor: None,
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Appends a constructor parameter, declaring an initializer if there
    /// was none.
    #[must_use]
    pub fn param(mut self, parameter: ParameterDescriptor) -> Self {
        self.constructor.get_or_insert_with(Vec::new).push(parameter);
        self
    }

    /// Declares an initializer that takes no parameters.
    #[must_use]
    pub fn empty_constructor(mut self) -> Self {
        if self.constructor.is_none() {
            self.constructor = Some(Vec::new());
        }
        self
    }

    #[must_use]
    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Declares the conventional single-argument setter for `property`.
    #[must_use]
    pub fn setter(self, property: &str, constraint: impl Into<TypeConstraint>) -> Self {
        let name = setter_name(property);
        self.method(MethodDescriptor::new(name, vec![constraint.into()]))
    }

    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Constructor parameters in declaration order; empty without an
    /// initializer.
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        self.constructor.as_deref().unwrap_or(&[])
    }

    pub fn find_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn find_method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// The conventional setter declared for `property`, if any.
    pub fn setter_for(&self, property: &str) -> Option<&MethodDescriptor> {
        self.find_method(&setter_name(property))
    }
}
