//! Mappable fixtures shared by the integration tests.

#![allow(dead_code)]

use jsonmap_model::{
    BoundArguments, Mappable, MethodDescriptor, ModelError, ModelResult, NamedType,
    ParameterDescriptor, PropertyDescriptor, Slot, TypeConstraint, TypeDescriptor,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Routes pipeline logs to the test harness; `RUST_LOG=jsonmap_mapper=trace`
/// shows every binding decision.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn arg<T: DeserializeOwned>(name: &str, value: Value) -> ModelResult<T> {
    serde_json::from_value(value).map_err(|source| ModelError::Argument {
        name: name.to_string(),
        source,
    })
}

fn unknown(type_name: &str, setter: &str) -> ModelError {
    ModelError::UnknownMethod {
        type_name: type_name.to_string(),
        method: setter.to_string(),
    }
}

// ── Pair: constructor (a: string, b: int) ────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub a: String,
    pub b: i64,
}

impl Mappable for Pair {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::new("Pair")
            .param(ParameterDescriptor::required("a", NamedType::String).promoted())
            .param(ParameterDescriptor::required("b", NamedType::Int).promoted())
            .property(PropertyDescriptor::new("a", NamedType::String))
            .property(PropertyDescriptor::new("b", NamedType::Int))
    }

    fn construct(mut args: BoundArguments) -> ModelResult<Self> {
        Ok(Self {
            a: args.next()?,
            b: args.next()?,
        })
    }
}

// ── Bare: no initializer, setters only ───────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bare {
    pub value_type: Slot<String>,
    pub count: Slot<i64>,
}

impl Mappable for Bare {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::new("Bare")
            .property(PropertyDescriptor::new("valueType", NamedType::String))
            .property(PropertyDescriptor::new("count", NamedType::Int))
            .setter("valueType", NamedType::String)
            .setter("count", NamedType::Int)
    }

    fn construct(_args: BoundArguments) -> ModelResult<Self> {
        Ok(Self::default())
    }

    fn call_setter(&mut self, setter: &str, value: Value) -> ModelResult<()> {
        match setter {
            "setValueType" => self.value_type.set(arg(setter, value)?),
            "setCount" => self.count.set(arg(setter, value)?),
            _ => return Err(unknown("Bare", setter)),
        }
        Ok(())
    }
}

// ── WithDefault: constructor (id: int = 10) ──────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct WithDefault {
    pub id: i64,
    pub label: Option<String>,
}

impl Mappable for WithDefault {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::new("WithDefault")
            .param(ParameterDescriptor::optional("id", NamedType::Int, 10).promoted())
            .param(
                ParameterDescriptor::optional(
                    "label",
                    TypeConstraint::nullable(NamedType::String),
                    Value::Null,
                )
                .promoted(),
            )
            .property(PropertyDescriptor::new("id", NamedType::Int))
            .property(PropertyDescriptor::new(
                "label",
                TypeConstraint::nullable(NamedType::String),
            ))
    }

    fn construct(mut args: BoundArguments) -> ModelResult<Self> {
        Ok(Self {
            id: args.next()?,
            label: args.next()?,
        })
    }
}

// ── ValueHolder: promoted parameter aliased on its property ──────

#[derive(Debug, Clone, PartialEq)]
pub struct ValueHolder {
    pub value_type: String,
}

impl Mappable for ValueHolder {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::new("ValueHolder")
            .param(ParameterDescriptor::required("valueType", NamedType::String).promoted())
            .property(PropertyDescriptor::new("valueType", NamedType::String).with_alias("value_type"))
    }

    fn construct(mut args: BoundArguments) -> ModelResult<Self> {
        Ok(Self {
            value_type: args.take("valueType")?,
        })
    }
}

// ── Renamed: ordinary parameter carrying its own alias ───────────

#[derive(Debug, Clone, PartialEq)]
pub struct Renamed {
    pub user_id: i64,
}

impl Mappable for Renamed {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::new("Renamed")
            .param(ParameterDescriptor::required("userId", NamedType::Int).with_alias("user_id"))
    }

    fn construct(mut args: BoundArguments) -> ModelResult<Self> {
        Ok(Self { user_id: args.next()? })
    }
}

// ── Flexible: constructor (value: string|int) ────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Flexible {
    pub value: Value,
}

impl Mappable for Flexible {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::new("Flexible").param(ParameterDescriptor::required(
            "value",
            TypeConstraint::union([NamedType::String, NamedType::Int]),
        ))
    }

    fn construct(mut args: BoundArguments) -> ModelResult<Self> {
        Ok(Self {
            value: args.next_value()?,
        })
    }
}

// ── Tagged: intersection-typed constructor parameter ─────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    pub items: Value,
}

impl Mappable for Tagged {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::new("Tagged").param(ParameterDescriptor::required(
            "items",
            TypeConstraint::Intersection(vec![
                NamedType::Class("Countable".into()),
                NamedType::Class("Traversable".into()),
            ]),
        ))
    }

    fn construct(mut args: BoundArguments) -> ModelResult<Self> {
        Ok(Self {
            items: args.next_value()?,
        })
    }
}

// ── Orphan: promoted parameter without a property ────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Orphan;

impl Mappable for Orphan {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::new("Orphan")
            .param(ParameterDescriptor::required("ghost", NamedType::String).promoted())
    }

    fn construct(_args: BoundArguments) -> ModelResult<Self> {
        Ok(Self)
    }
}

// ── Account: constructor plus setters ────────────────────────────

/// Constructor takes `name`; `email`, `age` and `flag` go through setters,
/// `nickname` has no setter at all. Every setter call is recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    pub name: String,
    pub email: Slot<Option<String>>,
    pub age: Slot<i64>,
    pub nickname: Slot<String>,
    pub calls: Vec<String>,
}

impl Mappable for Account {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::new("Account")
            .param(ParameterDescriptor::required("name", NamedType::String).promoted())
            .property(PropertyDescriptor::new("name", NamedType::String))
            .property(
                PropertyDescriptor::new("email", TypeConstraint::nullable(NamedType::String))
                    .with_alias("email_address"),
            )
            .property(PropertyDescriptor::new("age", NamedType::Int))
            .property(PropertyDescriptor::new("nickname", NamedType::String))
            .property(PropertyDescriptor::new("flag", NamedType::Bool))
            .setter("name", NamedType::String)
            .setter("email", TypeConstraint::nullable(NamedType::String))
            .setter("age", NamedType::Int)
            .method(MethodDescriptor::new("setFlag", vec![]))
    }

    fn construct(mut args: BoundArguments) -> ModelResult<Self> {
        Ok(Self {
            name: args.next()?,
            ..Self::default()
        })
    }

    fn call_setter(&mut self, setter: &str, value: Value) -> ModelResult<()> {
        match setter {
            "setName" => self.name = arg(setter, value)?,
            "setEmail" => self.email.set(arg(setter, value)?),
            "setAge" => {
                let age: i64 = arg(setter, value)?;
                if age < 0 {
                    return Err(ModelError::Invalid(format!("age must be >= 0, got {age}")));
                }
                self.age.set(age);
            }
            _ => return Err(unknown("Account", setter)),
        }
        self.calls.push(setter.to_string());
        Ok(())
    }
}

// ── Widget: setter declared with an intersection parameter ───────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Widget {
    pub shape: Slot<Value>,
}

impl Mappable for Widget {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::new("Widget")
            .empty_constructor()
            .property(PropertyDescriptor::new("shape", TypeConstraint::Any))
            .setter(
                "shape",
                TypeConstraint::Intersection(vec![
                    NamedType::Class("Circle".into()),
                    NamedType::Class("Square".into()),
                ]),
            )
    }

    fn construct(_args: BoundArguments) -> ModelResult<Self> {
        Ok(Self::default())
    }

    fn call_setter(&mut self, _setter: &str, value: Value) -> ModelResult<()> {
        self.shape.set(value);
        Ok(())
    }
}
