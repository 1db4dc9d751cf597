//! Error types for the metadata model.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while building descriptors or while a [`crate::Mappable`]
/// type consumes its arguments.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A textual type constraint could not be parsed.
    #[error("invalid type constraint '{text}': {reason}")]
    InvalidConstraint { text: String, reason: String },

    /// The initializer asked for more arguments than were bound.
    #[error("missing constructor argument '{0}'")]
    MissingArgument(String),

    /// A bound argument could not be converted into the requested Rust type.
    #[error("argument '{name}' could not be converted: {source}")]
    Argument {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A setter was invoked that the type does not implement.
    #[error("{type_name} has no method '{method}'")]
    UnknownMethod { type_name: String, method: String },

    /// A property was read before anything initialized it.
    #[error("property '{0}' is not initialized")]
    Uninitialized(String),

    /// Domain validation performed by the type itself rejected a value.
    #[error("invalid value: {0}")]
    Invalid(String),
}
