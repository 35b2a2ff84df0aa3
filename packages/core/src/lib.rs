//! Core beanmap: record introspection and the accessor naming convention.
//!
//! This layer defines everything the converters need to know about a record
//! type without knowing the type itself:
//! - `Value`: a dynamically-typed scalar attribute value
//! - `Mapping`: the string-keyed transport form of a record
//! - `Bean`: the introspection capability a record type implements
//! - `naming`: the `getX` / `isX` / `setX` convention
//!
//! # Example
//!
//! ```rust
//! use beanmap_core::{Bean, Constructor, Method};
//!
//! #[derive(Default)]
//! struct Point {
//!     x: i64,
//! }
//!
//! impl Bean for Point {
//!     fn methods() -> Vec<Method<Self>> {
//!         vec![
//!             Method::reader("getX", |p: &Point| p.x),
//!             Method::writer("setX", |p: &mut Point, x: i64| p.x = x),
//!         ]
//!     }
//!
//!     fn constructor() -> Option<Constructor<Self>> {
//!         Some(Constructor::default_ctor())
//!     }
//! }
//!
//! assert_eq!(Point::type_name(), "Point");
//! assert_eq!(Point::methods().len(), 2);
//! ```

mod error;
mod introspect;
mod kind;
pub mod naming;
mod value;

pub use error::{AccessError, ConstructionError, InvocationError};
pub use introspect::{simple_type_name, Bean, Constructor, Method, ReadFn, Receiver, WriteFn};
pub use kind::{AttrType, Attribute, TypeMatch, ValueKind};
pub use naming::{Accessor, AccessorKind};
pub use value::{Mapping, Value};
