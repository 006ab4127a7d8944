//! Error types for tripcost.

use thiserror::Error;

/// A trip configuration that violates the estimator's input contract.
///
/// This is the only error the estimation engine raises. It is fatal to the
/// single call and is never recovered by substituting defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A string did not name a known value of the given kind.
    #[error("Unknown {kind} '{value}', expected one of: {expected}")]
    UnknownValue {
        /// The kind of value being parsed (e.g. "destination").
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma separated list of accepted values.
        expected: &'static str,
    },

    /// A numeric field is outside its accepted domain.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: u32,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },

    /// The cost database has no entry for a key the configuration references.
    #[error("No {table} entry for {key}")]
    MissingEntry {
        /// The database table that was consulted.
        table: &'static str,
        /// The key that failed to resolve.
        key: String,
    },
}

impl ConfigurationError {
    /// Creates an [`ConfigurationError::UnknownValue`] error.
    #[must_use]
    pub fn unknown(kind: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
            expected,
        }
    }

    /// Creates a [`ConfigurationError::MissingEntry`] error.
    #[must_use]
    pub fn missing(table: &'static str, key: impl Into<String>) -> Self {
        Self::MissingEntry {
            table,
            key: key.into(),
        }
    }
}
