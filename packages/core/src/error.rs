//! Error types for record introspection.

use thiserror::Error;

use crate::{AttrType, ValueKind};

/// A failure raised while invoking a method or constructor.
///
/// This is what a method body returns when it cannot complete, and what
/// argument conversion returns when a `Value` does not fit the parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvocationError {
    /// The method mutates its receiver but was invoked through a shared
    /// reference.
    #[error("method requires exclusive access to its receiver")]
    RequiresExclusive,

    #[error("expected {expected} argument(s), got {actual}")]
    Arity { expected: usize, actual: usize },

    #[error("expected argument of type {expected}, found {found}")]
    ArgumentType { expected: AttrType, found: ValueKind },

    #[error("value {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    /// The method body itself failed.
    #[error("{0}")]
    Raised(String),
}

impl InvocationError {
    pub fn raised(message: impl Into<String>) -> Self {
        InvocationError::Raised(message.into())
    }
}

/// A record instance could not be constructed. Fatal to a decode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    #[error("type {type_name} has no zero-argument constructor")]
    NoConstructor { type_name: &'static str },

    #[error("constructing {type_name} failed: {source}")]
    Raised {
        type_name: &'static str,
        #[source]
        source: InvocationError,
    },
}

/// A reader or writer failed for a single attribute.
///
/// Converters recover from these locally: the attribute is omitted and the
/// failure is recorded as a diagnostic.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{type_name}.{method} failed: {source}")]
pub struct AccessError {
    pub type_name: &'static str,
    pub method: String,
    #[source]
    pub source: InvocationError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn invocation_error_display() {
        let e = InvocationError::Arity {
            expected: 1,
            actual: 0,
        };
        assert_eq!(e.to_string(), "expected 1 argument(s), got 0");

        let e = InvocationError::ArgumentType {
            expected: AttrType::nullable(ValueKind::Integer),
            found: ValueKind::String,
        };
        assert_eq!(
            e.to_string(),
            "expected argument of type Integer?, found String"
        );

        assert_eq!(InvocationError::raised("boom").to_string(), "boom");
    }

    #[test]
    fn construction_error_display() {
        let e = ConstructionError::NoConstructor { type_name: "Demo" };
        assert!(e.to_string().contains("Demo"));
        assert!(e.to_string().contains("zero-argument constructor"));
        assert!(StdError::source(&e).is_none());
    }

    #[test]
    fn construction_error_source() {
        let e = ConstructionError::Raised {
            type_name: "Demo",
            source: InvocationError::raised("out of memory"),
        };
        assert!(e.to_string().contains("out of memory"));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn access_error_display() {
        let e = AccessError {
            type_name: "Demo",
            method: "isLongName".to_string(),
            source: InvocationError::raised("name is null"),
        };
        assert_eq!(e.to_string(), "Demo.isLongName failed: name is null");
        assert!(StdError::source(&e).is_some());
    }
}
