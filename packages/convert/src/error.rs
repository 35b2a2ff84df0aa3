//! Error types for the conversion layer.

use beanmap_core::ConstructionError;
use thiserror::Error;

use crate::Diagnostic;

/// Errors returned by the conversion layer.
///
/// Plain `encode`/`decode` only ever fail with `Construction`. The other
/// variants come from strict reports, JSON interop and option loading.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// A strict report contained attribute failures.
    #[error("{} attribute(s) failed to convert", .0.len())]
    Attributes(Vec<Diagnostic>),

    #[error("invalid mapping: {message}")]
    InvalidMapping { message: String },

    #[error("invalid options: {message}")]
    InvalidOptions { message: String },
}

impl Error {
    pub fn invalid_mapping(message: impl Into<String>) -> Self {
        Error::InvalidMapping {
            message: message.into(),
        }
    }
}
