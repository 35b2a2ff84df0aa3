//! Record -> mapping.

use beanmap_core::naming::AccessorKind;
use beanmap_core::{AccessError, Bean, Mapping, Value};

use crate::{BeanType, DiagnosticKind, Report};

impl<T: Bean> BeanType<T> {
    /// Read every attribute of `bean` into a mapping.
    ///
    /// Never fails: readers that fail are omitted. Use
    /// [`encode_report`](Self::encode_report) to see what was omitted.
    pub fn encode(&self, bean: &T) -> Mapping {
        self.encode_report(bean).into_value()
    }

    /// Read every attribute of `bean`, recording skipped and failed readers.
    ///
    /// `getX` readers are stored whatever they return. `isX` readers are
    /// stored only when they return a boolean. When two readers derive the
    /// same attribute name, the later one in enumeration order wins.
    pub fn encode_report(&self, bean: &T) -> Report<Mapping> {
        let mut report = Report::new(Mapping::new());

        for slot in self.readers() {
            let method = self.reader_method(slot);
            let value = match method.invoke(bean, Vec::new()) {
                Ok(value) => value,
                Err(source) => {
                    let error = AccessError {
                        type_name: self.type_name,
                        method: method.name().to_string(),
                        source,
                    };
                    log::warn!("omitting attribute {}: {}", slot.attribute, error);
                    report.push(
                        &slot.attribute,
                        Some(method.name()),
                        DiagnosticKind::Failed(error),
                    );
                    continue;
                }
            };

            if slot.kind == AccessorKind::Predicate && !matches!(value, Value::Bool(_)) {
                log::debug!(
                    "{}.{} returned {}, not a predicate",
                    self.type_name,
                    method.name(),
                    value.kind()
                );
                report.push(
                    &slot.attribute,
                    Some(method.name()),
                    DiagnosticKind::NotBoolean {
                        found: value.kind(),
                    },
                );
                continue;
            }

            report.value.insert(slot.attribute.clone(), value);
        }

        report
    }
}
