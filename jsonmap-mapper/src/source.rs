//! Source normalization: every accepted input shape becomes a [`FieldBag`].

use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

use crate::validate::runtime_type_name;
use crate::{DecodeError, DecodeFlags, Decoder};

/// Which entry point produced a field bag. Carried into error messages as
/// `JSON`, `object` or `mapping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Decoded from JSON text (`map_from_text*`).
    Json,
    /// A generic keyed object supplied directly, the anonymous-record input
    /// (`map_from_object`, `map_from_value`).
    Object,
    /// A plain key/value mapping supplied directly, the associative-array
    /// input (`map_from_mapping`).
    Mapping,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Object => "object",
            Self::Mapping => "mapping",
        })
    }
}

/// Canonical string-keyed view of one mapping call's input.
///
/// Keys are exactly the field names present in the input; later duplicates
/// in a mapping replace earlier ones. No presence or type checks happen
/// here.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBag {
    fields: Map<String, Value>,
    source: SourceKind,
}

impl FieldBag {
    /// Decodes `text` and requires the result to be an object.
    pub fn from_text(
        text: &str,
        depth: usize,
        flags: DecodeFlags,
        decoder: &dyn Decoder,
    ) -> Result<Self, DecodeError> {
        match decoder.decode(text, depth, flags)? {
            Value::Object(fields) => Ok(Self::normalized(fields, SourceKind::Json)),
            other => Err(DecodeError::wrong_shape(runtime_type_name(&other))),
        }
    }

    /// Uses a generic keyed object as-is.
    pub fn from_object(fields: Map<String, Value>) -> Self {
        Self::normalized(fields, SourceKind::Object)
    }

    /// Uses a generic value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(fields) => Ok(Self::from_object(fields)),
            other => Err(DecodeError::wrong_shape(runtime_type_name(&other))),
        }
    }

    /// Collects a key/value mapping.
    pub fn from_mapping<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let fields = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::normalized(fields, SourceKind::Mapping)
    }

    fn normalized(fields: Map<String, Value>, source: SourceKind) -> Self {
        debug!(source = %source, fields = fields.len(), "Normalized input");
        Self { fields, source }
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
