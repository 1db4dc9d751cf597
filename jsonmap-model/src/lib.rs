//! Metadata model for jsonmap.
//!
//! Defines the pure-data view of a mapping target that the mapper crate
//! reads but never mutates:
//! - [`TypeDescriptor`] — constructor parameters, declared properties and methods
//! - [`TypeConstraint`] / [`NamedType`] — declared type restrictions used for validation
//! - [`FieldAlias`] — alternate input key attached to a parameter or property
//! - [`Mappable`] — the capability a target type implements to be constructed
//!   from [`BoundArguments`] and populated through its setters
//! - [`Slot`] — the observable "not yet initialized" state of a property
//!
//! Descriptors are built once per type (by hand, or by code generation) and
//! carry all alias metadata up front, so no annotation lookup happens while
//! mapping.

mod arguments;
mod constraint;
mod descriptor;
mod error;
mod mappable;
mod slot;

pub use arguments::BoundArguments;
pub use constraint::{NamedType, TypeConstraint};
pub use descriptor::{
    FieldAlias, MethodDescriptor, ParameterDescriptor, PropertyDescriptor, SETTER_PREFIX,
    TypeDescriptor, setter_name,
};
pub use error::{ModelError, ModelResult};
pub use mappable::Mappable;
pub use slot::Slot;
