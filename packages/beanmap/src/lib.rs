//! beanmap: convert accessor-convention records to and from mappings.
//!
//! A record exposes attribute `x` through `getX` / `isX` readers and `setX`
//! writers. beanmap turns an instance into a flat `Mapping` of attribute
//! name to `Value`, and builds a fresh instance back from one.
//!
//! The crates are layered:
//! - `beanmap-core`: `Value`, the naming convention, and the `Bean`
//!   introspection trait record types implement
//! - `beanmap-convert`: the registry, encoder, decoder and diagnostics
//!
//! This crate re-exports both.

pub use beanmap_convert::{
    decode, decode_with_diagnostics, encode, encode_with_diagnostics, json, BeanType, Diagnostic,
    DiagnosticKind, Error, Options, OverloadPolicy, ReaderSlot, Report, WriterSlot,
};
pub use beanmap_core::{
    naming, simple_type_name, AccessError, Accessor, AccessorKind, AttrType, Attribute, Bean,
    ConstructionError, Constructor, InvocationError, Mapping, Method, ReadFn, Receiver, TypeMatch,
    Value, ValueKind, WriteFn,
};
