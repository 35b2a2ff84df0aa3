//! The per-type accessor registry.
//!
//! A `BeanType<T>` enumerates `T::methods()` once, classifies them by the
//! naming convention, and keeps the readers and writers the converters need.
//! Build one per record type and reuse it; it holds no per-call state and is
//! `Send + Sync`.
//!
//! Reader and writer slots are descriptive only. The methods behind them are
//! reached through the registry's own conversions, never by handing a slot
//! back:
//!
//! ```rust,compile_fail
//! use beanmap_convert::BeanType;
//! use beanmap_core::Bean;
//!
//! fn first_reader<T: Bean>(ty: &BeanType<T>) {
//!     let _ = ty.reader_method(&ty.readers()[0]);
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use beanmap_core::naming::{self, AccessorKind};
use beanmap_core::{AttrType, Bean, Constructor, Method, TypeMatch, Value};

use crate::{Options, OverloadPolicy};

/// A zero-argument reader and the attribute it produces.
#[derive(Clone, Debug)]
pub struct ReaderSlot {
    pub attribute: String,
    pub kind: AccessorKind,
    pub(crate) method: usize,
}

/// One overload of a writer.
#[derive(Clone, Copy, Debug)]
pub struct WriterSlot {
    pub param: AttrType,
    pub(crate) method: usize,
}

/// Classified accessors of a record type.
pub struct BeanType<T: Bean> {
    pub(crate) type_name: &'static str,
    pub(crate) methods: Vec<Method<T>>,
    pub(crate) constructor: Option<Constructor<T>>,
    pub(crate) options: Options,
    readers: Vec<ReaderSlot>,
    /// Keyed by writer method name (`setName`), overloads in declaration order.
    writers: BTreeMap<String, Vec<WriterSlot>>,
}

impl<T: Bean> BeanType<T> {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        let type_name = T::type_name();
        let methods = T::methods();
        let mut readers = Vec::new();
        let mut writers: BTreeMap<String, Vec<WriterSlot>> = BTreeMap::new();

        for (index, method) in methods.iter().enumerate() {
            let Some(accessor) = naming::parse_accessor(method.name()) else {
                continue;
            };
            match (accessor.kind, method.params()) {
                (AccessorKind::Getter | AccessorKind::Predicate, []) => {
                    readers.push(ReaderSlot {
                        attribute: accessor.attribute,
                        kind: accessor.kind,
                        method: index,
                    });
                }
                (AccessorKind::Setter, [param]) => {
                    writers
                        .entry(method.name().to_string())
                        .or_default()
                        .push(WriterSlot {
                            param: *param,
                            method: index,
                        });
                }
                (_, params) => {
                    log::debug!(
                        "{}.{}: {} parameter(s), not an accessor",
                        type_name,
                        method.name(),
                        params.len()
                    );
                }
            }
        }

        BeanType {
            type_name,
            methods,
            constructor: T::constructor(),
            options,
            readers,
            writers,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Zero-argument readers in enumeration order.
    pub fn readers(&self) -> &[ReaderSlot] {
        &self.readers
    }

    /// Overloads of the writer named `setter`, in declaration order.
    pub fn writers(&self, setter: &str) -> &[WriterSlot] {
        self.writers.get(setter).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `slot` must come from this registry; it indexes `self.methods`.
    pub(crate) fn writer_method(&self, slot: &WriterSlot) -> &Method<T> {
        &self.methods[slot.method]
    }

    pub(crate) fn reader_method(&self, slot: &ReaderSlot) -> &Method<T> {
        &self.methods[slot.method]
    }

    /// Pick the writer for a mapping entry.
    ///
    /// Looks up `set` + the capitalized key and applies the configured
    /// `TypeMatch` and `OverloadPolicy` to the value's runtime kind.
    pub fn resolve_writer(&self, key: &str, value: &Value) -> Option<&Method<T>> {
        let candidates = self.writers(&naming::setter_name(key));
        let mode = self.options.type_match;

        let exact = || {
            candidates
                .iter()
                .find(|slot| slot.param.matches_exactly(value))
        };
        let accepting = || {
            candidates
                .iter()
                .find(|slot| slot.param.accepts(value, mode))
        };

        let slot = match (self.options.overloads, mode) {
            (OverloadPolicy::MostSpecific, TypeMatch::Widening) => exact().or_else(accepting),
            _ => accepting(),
        }?;
        Some(self.writer_method(slot))
    }
}

impl<T: Bean> Default for BeanType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Bean> fmt::Debug for BeanType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanType")
            .field("type_name", &self.type_name)
            .field("readers", &self.readers)
            .field("writers", &self.writers)
            .field("options", &self.options)
            .finish()
    }
}
