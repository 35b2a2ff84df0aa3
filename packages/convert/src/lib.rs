//! Record <-> mapping conversion.
//!
//! This layer converts between record types described by
//! [`Bean`](beanmap_core::Bean) and flat string-keyed [`Mapping`]s:
//! - [`encode`]: read every `getX` / boolean `isX` attribute into a mapping
//! - [`decode`]: construct a record and apply each entry through `setX`
//! - [`BeanType`]: the per-type registry both directions run on
//! - [`Report`]: the result together with skipped and failed attributes
//! - [`json`]: mapping <-> `serde_json::Value`
//!
//! Both directions degrade gracefully. A reader or writer that fails is
//! logged and its attribute omitted; only a record that cannot be
//! constructed fails a decode.
//!
//! # Example
//!
//! ```rust
//! use beanmap_convert::{decode, encode};
//! use beanmap_core::{Bean, Constructor, Method, Value};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct User {
//!     name: String,
//! }
//!
//! impl Bean for User {
//!     fn methods() -> Vec<Method<Self>> {
//!         vec![
//!             Method::reader("getName", |u: &User| u.name.clone()),
//!             Method::writer("setName", |u: &mut User, name: String| u.name = name),
//!         ]
//!     }
//!
//!     fn constructor() -> Option<Constructor<Self>> {
//!         Some(Constructor::default_ctor())
//!     }
//! }
//!
//! let user = User { name: "Alice".to_string() };
//! let mapping = encode(&user);
//! assert_eq!(mapping.get("name"), Some(&Value::from("Alice")));
//!
//! let decoded: User = decode(mapping).unwrap();
//! assert_eq!(decoded, user);
//! ```
//!
//! # Reusing a registry
//!
//! The free functions introspect the type on every call. Hold a
//! [`BeanType`] to do that once:
//!
//! ```rust,ignore
//! let users = BeanType::<User>::with_options(options);
//! for row in rows {
//!     let user = users.decode(row)?;
//! }
//! ```

use beanmap_core::{Bean, ConstructionError, Mapping};

mod decode;
mod encode;
mod error;
pub mod json;
mod options;
mod registry;
mod report;

pub use error::Error;
pub use options::{Options, OverloadPolicy};
pub use registry::{BeanType, ReaderSlot, WriterSlot};
pub use report::{Diagnostic, DiagnosticKind, Report};

/// Read every attribute of `bean` into a new mapping.
pub fn encode<T: Bean>(bean: &T) -> Mapping {
    BeanType::<T>::new().encode(bean)
}

/// Like [`encode`], also returning skipped and failed readers.
pub fn encode_with_diagnostics<T: Bean>(bean: &T) -> Report<Mapping> {
    BeanType::<T>::new().encode_report(bean)
}

/// Construct a `T` and apply every entry of `data` through its writers.
pub fn decode<T: Bean>(data: Mapping) -> Result<T, ConstructionError> {
    BeanType::<T>::new().decode(data)
}

/// Like [`decode`], also returning skipped and failed entries.
pub fn decode_with_diagnostics<T: Bean>(data: Mapping) -> Result<Report<T>, ConstructionError> {
    BeanType::<T>::new().decode_report(data)
}
