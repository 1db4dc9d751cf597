//! Constructor binding: resolve, validate and default every initializer
//! parameter, then construct the instance.

use jsonmap_model::{
    BoundArguments, FieldAlias, Mappable, ParameterDescriptor, TypeConstraint, TypeDescriptor,
};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

use crate::validate::{runtime_type_name, validate};
use crate::{FieldBag, MapError, MapResult};

/// Declared names of the constructor parameters that were bound from input
/// (not from defaults). The setter stage never re-applies these.
pub type ConsumedParameters = BTreeSet<String>;

/// Input key for a constructor parameter.
///
/// Property-backed parameters take the alias of the same-named property and
/// fail with [`MapError::MissingProperty`] when no such property exists.
/// Ordinary parameters use their own alias. Either falls back to the
/// declared name.
pub fn resolution_name<'a>(
    descriptor: &'a TypeDescriptor,
    parameter: &'a ParameterDescriptor,
) -> MapResult<&'a str> {
    let alias = if parameter.promoted {
        let property = descriptor.find_property(&parameter.name).ok_or_else(|| {
            MapError::MissingProperty {
                type_name: descriptor.type_name.clone(),
                parameter: parameter.name.clone(),
            }
        })?;
        property.alias.as_ref()
    } else {
        parameter.alias.as_ref()
    };
    Ok(alias.map_or(parameter.name.as_str(), FieldAlias::as_str))
}

/// Chooses one argument per constructor parameter, in declaration order.
///
/// Fails on the first parameter that is missing without a default or whose
/// value does not satisfy its constraint.
pub fn bind_arguments(
    descriptor: &TypeDescriptor,
    bag: &FieldBag,
) -> MapResult<(BoundArguments, ConsumedParameters)> {
    let mut args = BoundArguments::new();
    let mut consumed = ConsumedParameters::new();

    for parameter in descriptor.parameters() {
        let field = resolution_name(descriptor, parameter)?;

        if let Some(value) = bag.get(field) {
            if !check(descriptor, &parameter.name, &parameter.constraint, value)? {
                return Err(MapError::TypeMismatch {
                    type_name: descriptor.type_name.clone(),
                    field: field.to_string(),
                    source_kind: bag.source(),
                    expected: parameter.constraint.to_string(),
                    actual: runtime_type_name(value).to_string(),
                });
            }
            trace!(parameter = %parameter.name, field, "Bound from input");
            args.push(parameter.name.as_str(), value.clone());
            consumed.insert(parameter.name.clone());
        } else if let Some(default) = &parameter.default {
            trace!(parameter = %parameter.name, field, "Bound declared default");
            args.push(parameter.name.as_str(), default.clone());
        } else {
            return Err(MapError::MissingRequired {
                type_name: descriptor.type_name.clone(),
                field: field.to_string(),
                source_kind: bag.source(),
            });
        }
    }

    Ok((args, consumed))
}

/// Binds the constructor arguments and invokes the initializer.
pub fn bind<T: Mappable>(
    descriptor: &TypeDescriptor,
    bag: &FieldBag,
) -> MapResult<(T, ConsumedParameters)> {
    let (args, consumed) = bind_arguments(descriptor, bag)?;
    debug!(
        type_name = %descriptor.type_name,
        arguments = args.len(),
        from_input = consumed.len(),
        "Constructing instance"
    );
    let instance = T::construct(args).map_err(|source| MapError::Construct {
        type_name: descriptor.type_name.clone(),
        source,
    })?;
    Ok((instance, consumed))
}

/// Validates `value`, turning an uncheckable constraint into
/// [`MapError::UnsupportedConstraint`] attributed to `member`.
pub(crate) fn check(
    descriptor: &TypeDescriptor,
    member: &str,
    constraint: &TypeConstraint,
    value: &Value,
) -> MapResult<bool> {
    validate(constraint, value).map_err(|unsupported| {
        warn!(
            type_name = %descriptor.type_name,
            member,
            constraint = %unsupported.constraint,
            "Unsupported type constraint"
        );
        MapError::UnsupportedConstraint {
            type_name: descriptor.type_name.clone(),
            member: member.to_string(),
            constraint: unsupported.constraint,
        }
    })
}
