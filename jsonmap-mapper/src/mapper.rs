//! The mapping entry points.

use jsonmap_model::{Mappable, TypeDescriptor};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::binder::bind;
use crate::setter::apply_setters;
use crate::{DecodeFlags, Decoder, FieldBag, MapResult, MapperConfig, SerdeJsonDecoder};

/// Maps input data onto [`Mappable`] types.
///
/// Every call runs the same pipeline: normalize the input into a
/// [`FieldBag`], bind and construct through the initializer, then apply
/// setters for the remaining properties. Calls share no mutable state, and a
/// failure at any stage drops the instance under construction.
#[derive(Clone)]
pub struct Mapper {
    config: MapperConfig,
    decoder: Arc<dyn Decoder>,
}

impl Mapper {
    /// A mapper with default configuration and the `serde_json` decoder.
    pub fn new() -> Self {
        Self::with_config(MapperConfig::default())
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            config,
            decoder: Arc::new(SerdeJsonDecoder),
        }
    }

    /// Replaces the text decoder.
    #[must_use]
    pub fn with_decoder(mut self, decoder: Arc<dyn Decoder>) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Maps JSON text using the configured depth and flags.
    pub fn map_from_text<T: Mappable>(&self, text: &str) -> MapResult<T> {
        self.map_from_text_with(text, self.config.depth, self.config.flags)
    }

    /// Maps JSON text with explicit decoder depth and flags.
    pub fn map_from_text_with<T: Mappable>(
        &self,
        text: &str,
        depth: usize,
        flags: DecodeFlags,
    ) -> MapResult<T> {
        let bag = self.normalize_text(text, depth, flags)?;
        self.map_bag(&bag)
    }

    /// Maps JSON text onto the type of an existing instance. The instance is
    /// only used to pick the target type.
    pub fn map_from_text_like<T: Mappable>(&self, _like: &T, text: &str) -> MapResult<T> {
        self.map_from_text(text)
    }

    /// Maps a generic keyed object.
    pub fn map_from_object<T: Mappable>(&self, object: Map<String, Value>) -> MapResult<T> {
        self.map_bag(&FieldBag::from_object(object))
    }

    /// Maps a generic value, which must be an object.
    pub fn map_from_value<T: Mappable>(&self, value: Value) -> MapResult<T> {
        self.map_bag(&FieldBag::from_value(value)?)
    }

    /// Maps a key/value mapping.
    pub fn map_from_mapping<T, I, K, V>(&self, mapping: I) -> MapResult<T>
    where
        T: Mappable,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.map_bag(&FieldBag::from_mapping(mapping))
    }

    /// Runs the binder and setter stages against an already normalized bag.
    pub fn map_bag<T: Mappable>(&self, bag: &FieldBag) -> MapResult<T> {
        let descriptor = T::describe();
        self.map_described(&descriptor, bag)
    }

    /// Like [`Mapper::map_bag`], with a descriptor the caller already holds.
    pub fn map_described<T: Mappable>(
        &self,
        descriptor: &TypeDescriptor,
        bag: &FieldBag,
    ) -> MapResult<T> {
        debug!(type_name = %descriptor.type_name, source = %bag.source(), "Mapping");
        let (mut instance, consumed) = bind::<T>(descriptor, bag)?;
        apply_setters(&mut instance, descriptor, bag, &consumed)?;
        Ok(instance)
    }

    pub(crate) fn normalize_text(
        &self,
        text: &str,
        depth: usize,
        flags: DecodeFlags,
    ) -> MapResult<FieldBag> {
        Ok(FieldBag::from_text(text, depth, flags, self.decoder.as_ref())?)
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
