//! Mapping -> record.

use beanmap_core::{AccessError, Bean, ConstructionError, Mapping};

use crate::{BeanType, DiagnosticKind, Report};

impl<T: Bean> BeanType<T> {
    /// Construct a fresh record and apply every mapping entry to it.
    ///
    /// Fails only when the record cannot be constructed. Entries without an
    /// accepting writer, and writers that fail, leave the attribute at its
    /// constructor default.
    pub fn decode(&self, data: Mapping) -> Result<T, ConstructionError> {
        self.decode_report(data).map(Report::into_value)
    }

    /// Like [`decode`](Self::decode), recording skipped and failed entries.
    ///
    /// Entries are applied independently in key order. For each one the
    /// first accepting writer is invoked; a failing writer does not fall
    /// through to later overloads.
    pub fn decode_report(&self, data: Mapping) -> Result<Report<T>, ConstructionError> {
        let bean = self.construct()?;
        let mut report = Report::new(bean);

        for (key, value) in data {
            let Some(method) = self.resolve_writer(&key, &value) else {
                log::debug!(
                    "{}: no writer for {} ({})",
                    self.type_name,
                    key,
                    value.kind()
                );
                report.push(&key, None, DiagnosticKind::NoWriter);
                continue;
            };

            if let Err(source) = method.invoke_mut(&mut report.value, vec![value]) {
                let error = AccessError {
                    type_name: self.type_name,
                    method: method.name().to_string(),
                    source,
                };
                log::warn!("skipping attribute {}: {}", key, error);
                report.push(&key, Some(method.name()), DiagnosticKind::Failed(error));
            }
        }

        Ok(report)
    }

    fn construct(&self) -> Result<T, ConstructionError> {
        let type_name = self.type_name;
        let ctor = self
            .constructor
            .as_ref()
            .ok_or(ConstructionError::NoConstructor { type_name })?;
        ctor.construct()
            .map_err(|source| ConstructionError::Raised { type_name, source })
    }
}
