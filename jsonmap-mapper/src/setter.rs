//! Setter application: populate declared properties the constructor did not
//! consume, through their conventional `set<Name>` methods.

use jsonmap_model::{Mappable, TypeDescriptor, setter_name};
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::binder::{ConsumedParameters, check};
use crate::validate::runtime_type_name;
use crate::{FieldBag, MapError, MapResult};

/// Applies setters to `instance` for every declared property present in the
/// bag and not already bound by the constructor. Returns how many setters
/// were invoked.
///
/// A property without a setter (or whose setter takes no parameters) is
/// skipped silently. On error the caller must discard `instance`.
pub fn apply_setters<T: Mappable>(
    instance: &mut T,
    descriptor: &TypeDescriptor,
    bag: &FieldBag,
    consumed: &ConsumedParameters,
) -> MapResult<usize> {
    let mut invoked: HashSet<String> = HashSet::new();

    for property in &descriptor.properties {
        let field = property.resolution_name();
        let Some(value) = bag.get(field) else {
            continue;
        };
        if consumed.contains(&property.name) {
            trace!(property = %property.name, "Already bound by constructor");
            continue;
        }

        let setter = setter_name(&property.name);
        let Some(method) = descriptor.find_method(&setter) else {
            trace!(property = %property.name, setter = %setter, "No setter, field left inert");
            continue;
        };
        let Some(constraint) = method.first_parameter() else {
            continue;
        };
        if invoked.contains(&setter) {
            continue;
        }

        if !check(descriptor, &setter, constraint, value)? {
            return Err(MapError::SetterTypeMismatch {
                type_name: descriptor.type_name.clone(),
                setter,
                field: field.to_string(),
                expected: constraint.to_string(),
                actual: runtime_type_name(value).to_string(),
            });
        }

        instance
            .call_setter(&setter, value.clone())
            .map_err(|source| MapError::Construct {
                type_name: descriptor.type_name.clone(),
                source,
            })?;
        trace!(property = %property.name, setter = %setter, field, "Setter applied");
        invoked.insert(setter);
    }

    debug!(type_name = %descriptor.type_name, setters = invoked.len(), "Setters applied");
    Ok(invoked.len())
}
