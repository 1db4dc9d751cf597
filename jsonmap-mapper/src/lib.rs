//! Maps semi-structured input onto strongly typed values.
//!
//! Three input shapes are accepted (JSON text, a generic keyed object, a
//! key/value mapping) and all run through one pipeline:
//!
//! 1. **normalize** into a [`FieldBag`];
//! 2. **bind** each constructor parameter of the target's
//!    [`TypeDescriptor`](jsonmap_model::TypeDescriptor) to a field (honoring
//!    aliases and defaults), validate it, and construct the instance;
//! 3. **apply setters** for declared properties the constructor did not
//!    consume.
//!
//! Every stage fails fast with a [`MapError`]; no partially populated
//! instance is ever returned.

mod binder;
mod config;
mod decode;
mod error;
mod mapper;
mod registry;
mod setter;
mod source;
mod validate;

pub use binder::{ConsumedParameters, bind, bind_arguments, resolution_name};
pub use config::MapperConfig;
pub use decode::{DEFAULT_DEPTH, DecodeFlags, Decoder, SerdeJsonDecoder};
pub use error::{DecodeError, DecodeErrorCode, MapError, MapResult};
pub use mapper::Mapper;
pub use registry::{Target, TypeRegistry};
pub use setter::apply_setters;
pub use source::{FieldBag, SourceKind};
pub use validate::{UnsupportedConstraint, runtime_type_name, validate};

pub use jsonmap_model as model;
