//! Conversion options.

use beanmap_core::TypeMatch;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Tie-break among overloaded writers that all accept a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverloadPolicy {
    /// The first accepting writer in declaration order.
    #[default]
    FirstDeclared,
    /// A writer whose parameter kind matches exactly, falling back to the
    /// first accepting writer.
    MostSpecific,
}

/// Options for building a [`BeanType`](crate::BeanType).
///
/// Loadable from any serde format; missing fields take their defaults.
///
/// ```rust
/// use beanmap_convert::{Options, OverloadPolicy};
/// use beanmap_core::TypeMatch;
///
/// let options = Options::from_json(r#"{"type_match": "widening"}"#).unwrap();
/// assert_eq!(options.type_match, TypeMatch::Widening);
/// assert_eq!(options.overloads, OverloadPolicy::FirstDeclared);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub type_match: TypeMatch,
    pub overloads: OverloadPolicy,
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })
    }

    pub fn with_type_match(mut self, type_match: TypeMatch) -> Self {
        self.type_match = type_match;
        self
    }

    pub fn with_overloads(mut self, overloads: OverloadPolicy) -> Self {
        self.overloads = overloads;
        self
    }
}
