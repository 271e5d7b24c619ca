use std::any;

use serde_json::error::Category;
use thiserror::Error;

/// A JSON document could not be decoded into a carrier or cell.
#[derive(Debug, Error)]
#[error("failed to decode {target}: {source}")]
pub struct DecodeError {
    target: &'static str,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn new<T>(source: serde_json::Error) -> Self {
        Self {
            target: any::type_name::<T>(),
            source,
        }
    }

    /// Name of the type the decode was aimed at.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.source.line()
    }

    #[must_use]
    pub fn column(&self) -> usize {
        self.source.column()
    }

    /// True when the deserializer rejected a value's type or shape
    /// (`Category::Data`). serde_json reports this as soon as it sees the
    /// offending token, so the rest of the input may not be valid JSON.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        self.source.classify() == Category::Data
    }
}
