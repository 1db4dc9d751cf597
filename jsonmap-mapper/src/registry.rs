//! Name- and instance-addressed targets.
//!
//! The typed [`Mapper`] entry points know their target statically. When the
//! target is only known at runtime, as a type name or as an existing value,
//! types are registered here first. Descriptors are captured once at
//! registration; mapping output still depends only on the call's inputs.

use jsonmap_model::{Mappable, TypeDescriptor};
use serde_json::{Map, Value};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use tracing::debug;

use crate::{DecodeFlags, FieldBag, MapError, MapResult, Mapper};

/// What to map onto: a registered type name, or an instance whose concrete
/// type is registered.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    Name(&'a str),
    Instance(&'a dyn Any),
}

type ErasedMap = fn(&Mapper, &TypeDescriptor, &FieldBag) -> MapResult<Box<dyn Any>>;

struct Registration {
    descriptor: TypeDescriptor,
    map: ErasedMap,
}

fn erased_map<T: Mappable + 'static>(
    mapper: &Mapper,
    descriptor: &TypeDescriptor,
    bag: &FieldBag,
) -> MapResult<Box<dyn Any>> {
    mapper
        .map_described::<T>(descriptor, bag)
        .map(|instance| Box::new(instance) as Box<dyn Any>)
}

/// Registry of mappable types, addressed by descriptor type name or by
/// `TypeId`.
#[derive(Default)]
pub struct TypeRegistry {
    mapper: Mapper,
    by_name: HashMap<String, Registration>,
    by_type: HashMap<TypeId, String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapper(mapper: Mapper) -> Self {
        Self {
            mapper,
            ..Self::default()
        }
    }

    /// Registers `T` under its descriptor's type name. Registering a second
    /// type with the same name replaces the first.
    pub fn register<T: Mappable + 'static>(&mut self) -> &mut Self {
        let descriptor = T::describe();
        let name = descriptor.type_name.clone();
        debug!(type_name = %name, "Registered mappable type");
        self.by_type.retain(|_, registered| *registered != name);
        self.by_type.insert(TypeId::of::<T>(), name.clone());
        self.by_name.insert(
            name,
            Registration {
                descriptor,
                map: erased_map::<T>,
            },
        );
        self
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.by_name.contains_key(type_name)
    }

    /// Cached descriptor of a registered type.
    pub fn descriptor(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.by_name.get(type_name).map(|r| &r.descriptor)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// Resolves a target to its registered type name.
    pub fn resolve(&self, target: Target<'_>) -> MapResult<&str> {
        self.registration(target).map(|r| r.descriptor.type_name.as_str())
    }

    fn registration(&self, target: Target<'_>) -> MapResult<&Registration> {
        match target {
            Target::Name(name) => self
                .by_name
                .get(name)
                .ok_or_else(|| MapError::UnknownType(name.to_string())),
            Target::Instance(instance) => {
                let id = (*instance).type_id();
                self.by_type
                    .get(&id)
                    .and_then(|name| self.by_name.get(name))
                    .ok_or_else(|| MapError::UnknownType(format!("{id:?}")))
            }
        }
    }

    /// Maps JSON text using the registry mapper's configured depth and flags.
    pub fn map_from_text(&self, target: Target<'_>, text: &str) -> MapResult<Box<dyn Any>> {
        let config = *self.mapper.config();
        self.map_from_text_with(target, text, config.depth, config.flags)
    }

    pub fn map_from_text_with(
        &self,
        target: Target<'_>,
        text: &str,
        depth: usize,
        flags: DecodeFlags,
    ) -> MapResult<Box<dyn Any>> {
        let registration = self.registration(target)?;
        let bag = self.mapper.normalize_text(text, depth, flags)?;
        (registration.map)(&self.mapper, &registration.descriptor, &bag)
    }

    pub fn map_from_object(
        &self,
        target: Target<'_>,
        object: Map<String, Value>,
    ) -> MapResult<Box<dyn Any>> {
        let registration = self.registration(target)?;
        let bag = FieldBag::from_object(object);
        (registration.map)(&self.mapper, &registration.descriptor, &bag)
    }

    pub fn map_from_mapping<I, K, V>(&self, target: Target<'_>, mapping: I) -> MapResult<Box<dyn Any>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let registration = self.registration(target)?;
        let bag = FieldBag::from_mapping(mapping);
        (registration.map)(&self.mapper, &registration.descriptor, &bag)
    }
}
