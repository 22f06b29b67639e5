use crate::logging::codes;
use crate::logging::Code;

/// Errors raised by sort key validation, spec parsing and configuration.
///
/// Every variant is raised before any record is reordered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// A segment of the sort key does not name a field of the record type
    #[error("Sort key \"{key}\" does not exist in type {type_name}.")]
    SortKeyNotFound { key: String, type_name: String },

    /// Records resolved values of different kinds for the same key
    #[error("Sort key \"{key}\" resolved to incomparable values: {left} and {right}")]
    IncomparableValues {
        key: String,
        left: String,
        right: String,
    },

    /// Textual sort spec could not be parsed
    #[error("Invalid sort spec '{input}': {reason}")]
    InvalidSpec { input: String, reason: String },

    /// Sort configuration could not be read or parsed
    #[error("Failed to load sort configuration from {path}: {reason}")]
    Config { path: String, reason: String },
}

impl SortError {
    /// Create a sort key not found error
    pub fn key_not_found(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::SortKeyNotFound {
            key: key.into(),
            type_name: type_name.into(),
        }
    }

    /// Create an incomparable values error
    pub fn incomparable(
        key: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self::IncomparableValues {
            key: key.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create an invalid spec error
    pub fn invalid_spec(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Diagnostic code for this error
    pub fn code(&self) -> Code {
        match self {
            Self::SortKeyNotFound { .. } => codes::validation::SORT_KEY_NOT_FOUND,
            Self::IncomparableValues { .. } => codes::comparison::INCOMPARABLE_VALUES,
            Self::InvalidSpec { .. } => codes::validation::INVALID_SORT_SPEC,
            Self::Config { .. } => codes::config::CONFIG_LOAD_FAILURE,
        }
    }
}
