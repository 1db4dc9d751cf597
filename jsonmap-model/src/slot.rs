//! Property storage with an observable "not yet initialized" state.
//!
//! Types without an initializer are constructed with nothing bound, so their
//! properties must be distinguishable from properties that were set to a
//! zero value. `Slot::Unset` is that state.

use crate::{ModelError, ModelResult};

/// A property value that may not have been initialized yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    Unset,
    Set(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Slot<T> {
    #[must_use]
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the value if it has been initialized.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }

    /// Returns the value, or [`ModelError::Uninitialized`] naming `property`.
    pub fn require(&self, property: &str) -> ModelResult<&T> {
        self.get()
            .ok_or_else(|| ModelError::Uninitialized(property.to_string()))
    }

    pub fn set(&mut self, value: T) {
        *self = Self::Set(value);
    }

    /// Moves the value out, leaving the slot unset.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::replace(self, Self::Unset) {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}
