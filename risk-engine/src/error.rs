//! Error types for risk engine

use thiserror::Error;

/// Risk engine error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input field outside its declared domain (strict validation only)
    #[error("Validation failed: {field} = {value} is out of range")]
    Validation {
        /// Name of the offending field, as it appears in the request payload
        field: &'static str,
        /// Value that was received, rendered for diagnostics
        value: String,
    },
}

impl Error {
    pub(crate) fn validation(field: &'static str, value: impl ToString) -> Self {
        Error::Validation {
            field,
            value: value.to_string(),
        }
    }

    /// Offending field name
    pub fn field(&self) -> &'static str {
        match self {
            Error::Validation { field, .. } => field,
        }
    }
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
