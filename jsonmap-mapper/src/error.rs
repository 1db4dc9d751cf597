//! Error types for the mapping pipeline.

use jsonmap_model::ModelError;
use std::fmt;
use thiserror::Error;

use crate::SourceKind;

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;

/// Why a text input failed to normalize into a field bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorCode {
    /// Malformed text.
    Syntax,
    /// Input ended inside a value.
    UnexpectedEof,
    /// Well-formed text the decoder could not represent.
    Data,
    /// Nesting exceeded the configured depth.
    Depth,
    /// Decoding succeeded but produced something other than an object.
    WrongShape,
}

impl DecodeErrorCode {
    /// Stable numeric code, suitable for logs and foreign callers.
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Depth => 1,
            Self::Syntax => 2,
            Self::Data => 3,
            Self::WrongShape => 4,
            Self::UnexpectedEof => 5,
        }
    }
}

/// A text input that could not be turned into a field bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub code: DecodeErrorCode,
    /// The decoder's own diagnostic when it produced one.
    pub message: String,
}

impl DecodeError {
    pub fn new(code: DecodeErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn wrong_shape(found: &str) -> Self {
        Self::new(
            DecodeErrorCode::WrongShape,
            format!("expected a JSON object, decoded {found}"),
        )
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decode error {}: {}", self.code.as_i32(), self.message)
    }
}

impl std::error::Error for DecodeError {}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let code = match err.classify() {
            Category::Syntax => DecodeErrorCode::Syntax,
            Category::Eof => DecodeErrorCode::UnexpectedEof,
            Category::Data | Category::Io => DecodeErrorCode::Data,
        };
        Self::new(code, err.to_string())
    }
}

/// Every way a mapping call can fail. All variants are terminal: no partial
/// instance is ever returned alongside one.
#[derive(Debug, Error)]
pub enum MapError {
    /// The target type could not be resolved.
    #[error("unknown target type: {0}")]
    UnknownType(String),

    /// Text input was malformed or not an object.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A property-backed constructor parameter has no matching property.
    #[error("{type_name}: constructor parameter '{parameter}' has no matching property")]
    MissingProperty { type_name: String, parameter: String },

    /// A required constructor parameter is absent from the input.
    #[error("{type_name}: required field '{field}' is missing from {source_kind} input")]
    MissingRequired {
        type_name: String,
        field: String,
        source_kind: SourceKind,
    },

    /// A present field does not satisfy the constructor parameter's type.
    #[error(
        "{type_name}: field '{field}' from {source_kind} input must be {expected}, got {actual}"
    )]
    TypeMismatch {
        type_name: String,
        field: String,
        source_kind: SourceKind,
        expected: String,
        actual: String,
    },

    /// A present field does not satisfy the setter's parameter type.
    #[error("{type_name}: {setter}() cannot accept field '{field}': expected {expected}, got {actual}")]
    SetterTypeMismatch {
        type_name: String,
        setter: String,
        field: String,
        expected: String,
        actual: String,
    },

    /// The descriptor declares a constraint the mapper cannot check.
    #[error("{type_name}: unsupported type constraint '{constraint}' on '{member}'")]
    UnsupportedConstraint {
        type_name: String,
        member: String,
        constraint: String,
    },

    /// The type's initializer or a setter rejected its input.
    #[error("{type_name}: {source}")]
    Construct {
        type_name: String,
        #[source]
        source: ModelError,
    },
}

impl MapError {
    /// True for errors caused by how a type is described rather than by the
    /// input data.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedConstraint { .. } | Self::MissingProperty { .. } | Self::UnknownType(_)
        )
    }

    /// The input field the error is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingRequired { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::SetterTypeMismatch { field, .. } => Some(field),
            _ => None,
        }
    }
}
