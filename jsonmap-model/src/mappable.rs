use serde_json::Value;

use crate::{BoundArguments, ModelError, ModelResult, TypeDescriptor};

/// A type that can be built from a field bag.
///
/// Implementations expose their shape through [`Mappable::describe`] and
/// receive already-validated values: the mapper checks every argument and
/// setter value against the declared [`crate::TypeConstraint`] before calling
/// in, so the conversions in `construct` only fail when the descriptor and
/// the Rust field types disagree.
pub trait Mappable: Sized {
    /// The descriptor driving name resolution and validation.
    fn describe() -> TypeDescriptor;

    /// Invokes the initializer. Types without one receive empty arguments
    /// and must leave their properties unset.
    fn construct(args: BoundArguments) -> ModelResult<Self>;

    /// Invokes the single-argument method `setter` with `value`.
    ///
    /// Only called for methods the descriptor declares. The default rejects
    /// every name, which suits types that declare no setters.
    fn call_setter(&mut self, setter: &str, value: Value) -> ModelResult<()> {
        let _ = value;
        Err(ModelError::UnknownMethod {
            type_name: Self::describe().type_name,
            method: setter.to_string(),
        })
    }
}
