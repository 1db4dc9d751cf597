//! Constructor arguments chosen by the binder.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::VecDeque;

use crate::{ModelError, ModelResult};

/// Positional constructor arguments, one per declared parameter, in
/// declaration order. Each carries the declared parameter name for
/// diagnostics and by-name extraction.
///
/// Handed by value to [`crate::Mappable::construct`], so it is consumed
/// exactly once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArguments {
    args: VecDeque<(String, Value)>,
    /// Arguments already handed out; the position of the next one.
    taken: usize,
}

impl BoundArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the argument for the next parameter.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.args.push_back((name.into(), value));
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Remaining parameter names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|(name, _)| name.as_str())
    }

    /// Raw value of the next positional argument.
    pub fn next_value(&mut self) -> ModelResult<Value> {
        self.pop_front().map(|(_, value)| value)
    }

    /// Next positional argument, converted into `T`.
    pub fn next<T: DeserializeOwned>(&mut self) -> ModelResult<T> {
        let (name, value) = self.pop_front()?;
        convert(name, value)
    }

    /// Removes the argument bound to parameter `name` and converts it into `T`.
    pub fn take<T: DeserializeOwned>(&mut self, name: &str) -> ModelResult<T> {
        let index = self
            .args
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| ModelError::MissingArgument(name.to_string()))?;
        let (name, value) = self
            .args
            .remove(index)
            .ok_or_else(|| ModelError::MissingArgument(name.to_string()))?;
        self.taken += 1;
        convert(name, value)
    }

    /// Missing positions are reported zero-based as `#<n>`.
    fn pop_front(&mut self) -> ModelResult<(String, Value)> {
        let position = self.taken;
        let next = self
            .args
            .pop_front()
            .ok_or_else(|| ModelError::MissingArgument(format!("#{position}")))?;
        self.taken += 1;
        Ok(next)
    }
}

fn convert<T: DeserializeOwned>(name: String, value: Value) -> ModelResult<T> {
    serde_json::from_value(value).map_err(|source| ModelError::Argument { name, source })
}
