//! Accessor failures.
//!
//! Message text is contract: callers and their tests match on it, so every
//! constructor funnels through `diagnostic::describe` and the `#[error]`
//! strings below reproduce the historical wording exactly.

use thiserror::Error;

use super::diagnostic::describe;
use super::value::ConfigValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("not a hash: {0}")]
    NotAHash(String),

    #[error("not a string: {0}")]
    NotAString(String),

    #[error("not a boolean: {0}")]
    NotABoolean(String),

    #[error("property \"{0}\" not found")]
    PropertyNotFound(String),

    /// Covers both failure modes of the list accessor: the value is not a
    /// sequence, or one of its elements is not a string. The payload
    /// already carries the `type ...` / `invalid element: type ...` prefix.
    #[error("not a list of strings: {0}")]
    NotAListOfStrings(String),
}

impl ConfigError {
    pub(crate) fn not_a_hash(value: &ConfigValue) -> Self {
        ConfigError::NotAHash(describe(value))
    }

    pub(crate) fn not_a_string(value: &ConfigValue) -> Self {
        ConfigError::NotAString(describe(value))
    }

    pub(crate) fn not_a_boolean(value: &ConfigValue) -> Self {
        ConfigError::NotABoolean(describe(value))
    }

    pub(crate) fn property_not_found(key: &str) -> Self {
        ConfigError::PropertyNotFound(key.to_string())
    }

    pub(crate) fn not_a_list_of_strings(value: &ConfigValue) -> Self {
        ConfigError::NotAListOfStrings(format!("type {}", describe(value)))
    }

    pub(crate) fn invalid_list_element(value: &ConfigValue) -> Self {
        ConfigError::NotAListOfStrings(format!("invalid element: type {}", describe(value)))
    }
}
