//! Runtime type tags and the typed bridge between Rust values and `Value`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{InvocationError, Value};

/// The runtime type of a `Value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Bytes,
}

impl ValueKind {
    /// Simple name used in diagnostics and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Boolean",
            ValueKind::Integer => "Integer",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
            ValueKind::Bytes => "Bytes",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How strictly a value's runtime kind must match a declared slot type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeMatch {
    /// The value kind must equal the declared kind.
    #[default]
    Exact,
    /// Like `Exact`, but integers are also accepted by float slots.
    Widening,
}

/// The declared type of a reader result or writer parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttrType {
    pub kind: ValueKind,
    /// Whether the slot also accepts `Value::Null` (an `Option<T>` slot).
    pub nullable: bool,
}

impl AttrType {
    pub const fn of(kind: ValueKind) -> Self {
        AttrType {
            kind,
            nullable: false,
        }
    }

    pub const fn nullable(kind: ValueKind) -> Self {
        AttrType {
            kind,
            nullable: true,
        }
    }

    /// Check whether `value` may be passed to a slot of this type.
    pub fn accepts(&self, value: &Value, mode: TypeMatch) -> bool {
        match value.kind() {
            ValueKind::Null => self.nullable,
            kind if kind == self.kind => true,
            ValueKind::Integer => mode == TypeMatch::Widening && self.kind == ValueKind::Float,
            _ => false,
        }
    }

    /// Check whether `value` matches this type without any widening.
    pub fn matches_exactly(&self, value: &Value) -> bool {
        self.accepts(value, TypeMatch::Exact)
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "{}?", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// A Rust type that can be read from or written to a record attribute.
///
/// `TYPE` is what the registry uses to pick among overloaded writers, so it
/// must describe every value `from_value` accepts without widening.
pub trait Attribute: Sized {
    const TYPE: AttrType;

    fn into_value(self) -> Value;

    fn from_value(value: Value) -> Result<Self, InvocationError>;
}

fn mismatch<T: Attribute>(value: &Value) -> InvocationError {
    InvocationError::ArgumentType {
        expected: T::TYPE,
        found: value.kind(),
    }
}

impl Attribute for bool {
    const TYPE: AttrType = AttrType::of(ValueKind::Bool);

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> Result<Self, InvocationError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

macro_rules! integer_attribute {
    ($($ty:ty),*) => {
        $(
            impl Attribute for $ty {
                const TYPE: AttrType = AttrType::of(ValueKind::Integer);

                fn into_value(self) -> Value {
                    Value::Integer(i64::from(self))
                }

                fn from_value(value: Value) -> Result<Self, InvocationError> {
                    match value {
                        Value::Integer(i) => <$ty>::try_from(i).map_err(|_| {
                            InvocationError::OutOfRange {
                                value: i.to_string(),
                                target: stringify!($ty),
                            }
                        }),
                        other => Err(mismatch::<Self>(&other)),
                    }
                }
            }
        )*
    };
}

integer_attribute!(i8, i16, i32, i64, u8, u16, u32);

impl Attribute for f64 {
    const TYPE: AttrType = AttrType::of(ValueKind::Float);

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: Value) -> Result<Self, InvocationError> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Integer(i) => Ok(i as f64),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl Attribute for f32 {
    const TYPE: AttrType = AttrType::of(ValueKind::Float);

    fn into_value(self) -> Value {
        Value::Float(f64::from(self))
    }

    fn from_value(value: Value) -> Result<Self, InvocationError> {
        match value {
            Value::Float(f) => {
                let narrowed = f as f32;
                if f.is_finite() && !narrowed.is_finite() {
                    return Err(InvocationError::OutOfRange {
                        value: f.to_string(),
                        target: "f32",
                    });
                }
                Ok(narrowed)
            }
            Value::Integer(i) => Ok(i as f32),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl Attribute for String {
    const TYPE: AttrType = AttrType::of(ValueKind::String);

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: Value) -> Result<Self, InvocationError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl Attribute for Vec<u8> {
    const TYPE: AttrType = AttrType::of(ValueKind::Bytes);

    fn into_value(self) -> Value {
        Value::Bytes(self)
    }

    fn from_value(value: Value) -> Result<Self, InvocationError> {
        match value {
            Value::Bytes(b) => Ok(b),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<T: Attribute> Attribute for Option<T> {
    const TYPE: AttrType = AttrType::nullable(T::TYPE.kind);

    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self, InvocationError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
