//! Per-attribute diagnostics collected alongside a conversion result.

use std::fmt;

use beanmap_core::{AccessError, ValueKind};

use crate::Error;

/// What happened to one attribute that did not convert cleanly.
#[derive(Clone, Debug, PartialEq)]
pub enum DiagnosticKind {
    /// Decode: no writer accepted the key's value. The attribute keeps its
    /// constructor default.
    NoWriter,
    /// Encode: an `isX` reader returned something other than a boolean.
    NotBoolean { found: ValueKind },
    /// A reader or writer failed when invoked.
    Failed(AccessError),
}

/// One skipped or failed attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// The mapping key (decode) or derived attribute name (encode).
    pub attribute: String,
    /// The method involved, when one was resolved.
    pub method: Option<String>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Skips are expected outcomes; failures mean a method misbehaved.
    pub fn is_failure(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Failed(_))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::NoWriter => write!(f, "{}: no matching writer", self.attribute),
            DiagnosticKind::NotBoolean { found } => {
                write!(f, "{}: predicate returned {}", self.attribute, found)
            }
            DiagnosticKind::Failed(e) => write!(f, "{}: {}", self.attribute, e),
        }
    }
}

/// A conversion result together with everything that was skipped or failed.
#[derive(Clone, Debug, PartialEq)]
pub struct Report<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Report<T> {
    pub fn new(value: T) -> Self {
        Report {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, attribute: &str, method: Option<&str>, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic {
            attribute: attribute.to_string(),
            method: method.map(str::to_string),
            kind,
        });
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn failures(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Return the value only if no attribute failed.
    ///
    /// Skips (`NoWriter`, `NotBoolean`) do not count as failures.
    pub fn into_strict(self) -> Result<T, Error> {
        if !self.has_failures() {
            return Ok(self.value);
        }
        let failures = self
            .diagnostics
            .into_iter()
            .filter(Diagnostic::is_failure)
            .collect();
        Err(Error::Attributes(failures))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanmap_core::InvocationError;

    fn failed(attribute: &str) -> Diagnostic {
        Diagnostic {
            attribute: attribute.to_string(),
            method: Some("getX".to_string()),
            kind: DiagnosticKind::Failed(AccessError {
                type_name: "Demo",
                method: "getX".to_string(),
                source: InvocationError::raised("boom"),
            }),
        }
    }

    #[test]
    fn skips_are_not_failures() {
        let mut report = Report::new(1);
        report.push("a", None, DiagnosticKind::NoWriter);
        report.push(
            "b",
            Some("isB"),
            DiagnosticKind::NotBoolean {
                found: ValueKind::String,
            },
        );
        assert_eq!(report.diagnostics().len(), 2);
        assert!(!report.has_failures());
        assert_eq!(report.into_strict().unwrap(), 1);
    }

    #[test]
    fn strict_keeps_only_failures() {
        let mut report = Report::new("value");
        report.push("a", None, DiagnosticKind::NoWriter);
        report.diagnostics.push(failed("x"));

        assert_eq!(report.failures().count(), 1);
        match report.into_strict() {
            Err(Error::Attributes(failures)) => {
                assert_eq!(failures, vec![failed("x")]);
            }
            other => panic!("expected attribute failures, got {:?}", other),
        }
    }

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic {
            attribute: "unknownField".to_string(),
            method: None,
            kind: DiagnosticKind::NoWriter,
        };
        assert_eq!(d.to_string(), "unknownField: no matching writer");
        assert_eq!(failed("x").to_string(), "x: Demo.getX failed: boom");
    }
}
