//! Task configuration access.
//!
//! Each task in a manifest carries an arbitrary, user-authored document as
//! its payload. [`TaskConfig`] wraps that document behind typed accessors
//! so task code never touches the raw tree: absent keys, wrong shapes, and
//! wrong scalar types all come back as [`ConfigError`]s with stable,
//! user-facing messages.
//!
//! Design:
//! - Accessors are pure reads; the payload is never written back.
//! - One top-level key (or the whole payload) per call; no dotted paths.
//! - Strict scalar typing: `"true"` never becomes a boolean.

mod diagnostic;
mod error;
mod value;

pub use diagnostic::describe;
pub use error::ConfigError;
pub use value::ConfigValue;

use std::collections::BTreeMap;

/// Read-only view over one task's configuration document.
#[derive(Debug, Clone)]
pub struct TaskConfig {
    name: String,
    payload: ConfigValue,
}

impl TaskConfig {
    pub fn new(name: impl Into<String>, payload: ConfigValue) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Name of the owning task. Only used to qualify diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &ConfigValue {
        &self.payload
    }

    /// True iff the payload is a mapping. Callers that accept several
    /// payload shapes branch on this before hash-style access.
    pub fn is_hash(&self) -> bool {
        self.payload.is_mapping()
    }

    /// Required string property. The payload must be a mapping, the key
    /// must be present, and the value must be a string.
    pub fn string_property(&self, key: &str) -> Result<String, ConfigError> {
        let map = self.payload_hash()?;
        let value = map
            .get(key)
            .ok_or_else(|| ConfigError::property_not_found(key))?;
        match value {
            ConfigValue::String(s) => Ok(s.clone()),
            other => Err(ConfigError::not_a_string(other)),
        }
    }

    /// Like [`string_property`](Self::string_property), but a bare string
    /// payload stands in for the property itself. Lets a field accept
    /// either `key: value` or the scalar shorthand without the caller
    /// branching.
    pub fn string_property_allow_single(&self, key: &str) -> Result<String, ConfigError> {
        if let ConfigValue::String(s) = &self.payload {
            return Ok(s.clone());
        }
        self.string_property(key)
    }

    /// Optional boolean property. An absent key yields `default`; a present
    /// non-boolean value is an error.
    pub fn boolean_property_default(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        let map = self.payload_hash()?;
        match map.get(key) {
            None => Ok(default),
            Some(ConfigValue::Bool(b)) => Ok(*b),
            Some(other) => Err(ConfigError::not_a_boolean(other)),
        }
    }

    /// The whole payload as a list of strings. Fails on the first
    /// non-string element; an empty sequence is an empty vec, not an error.
    pub fn list_of_strings(&self) -> Result<Vec<String>, ConfigError> {
        strings_from(&self.payload)
    }

    /// Optional list-of-strings property. An absent key yields `default`;
    /// a present value gets the whole [`list_of_strings`](Self::list_of_strings)
    /// contract applied to it.
    pub fn list_of_strings_property_default(
        &self,
        key: &str,
        default: Vec<String>,
    ) -> Result<Vec<String>, ConfigError> {
        let map = self.payload_hash()?;
        match map.get(key) {
            None => Ok(default),
            Some(value) => strings_from(value),
        }
    }

    fn payload_hash(&self) -> Result<&BTreeMap<String, ConfigValue>, ConfigError> {
        match &self.payload {
            ConfigValue::Mapping(map) => Ok(map),
            other => Err(ConfigError::not_a_hash(other)),
        }
    }
}

fn strings_from(value: &ConfigValue) -> Result<Vec<String>, ConfigError> {
    let items = match value {
        ConfigValue::Sequence(items) => items,
        other => return Err(ConfigError::not_a_list_of_strings(other)),
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            ConfigValue::String(s) => out.push(s.clone()),
            other => return Err(ConfigError::invalid_list_element(other)),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(doc: &str) -> TaskConfig {
        TaskConfig::new("test", serde_yaml::from_str(doc).expect("parse yaml"))
    }

    #[test]
    fn is_hash_tells_mappings_apart() {
        assert!(config("{}").is_hash());
        assert!(!config("\"\"").is_hash());
    }

    #[test]
    fn string_property_reads_present_key() {
        let c = config("key: val");
        assert_eq!(c.string_property("key").unwrap(), "val");
    }

    #[test]
    fn string_property_reports_missing_key() {
        let c = config("key: val");
        let err = c.string_property("nope").unwrap_err();
        assert_eq!(err.to_string(), "property \"nope\" not found");
    }

    #[test]
    fn string_property_rejects_non_string_value() {
        let c = config("version: 3.6");
        let err = c.string_property("version").unwrap_err();
        assert_eq!(err.to_string(), "not a string: float64 (3.6)");
    }

    #[test]
    fn string_property_rejects_non_hash_payload() {
        let c = config("thisisastring");
        let err = c.string_property("key1").unwrap_err();
        assert_eq!(err.to_string(), "not a hash: string (thisisastring)");
    }

    #[test]
    fn allow_single_returns_bare_string_payload() {
        let c = config("value");
        assert_eq!(c.string_property_allow_single("key").unwrap(), "value");
    }

    #[test]
    fn allow_single_still_reads_the_property_from_a_hash() {
        let c = config("key: val");
        assert_eq!(c.string_property_allow_single("key").unwrap(), "val");
    }

    #[rstest]
    #[case::int("42", "int (42)")]
    #[case::bool("false", "bool (false)")]
    #[case::list("[one]", "list ([one])")]
    fn allow_single_rejects_other_non_hash_payloads(#[case] doc: &str, #[case] detail: &str) {
        let c = config(doc);
        let err = c.string_property_allow_single("key").unwrap_err();
        assert_eq!(err.to_string(), format!("not a hash: {detail}"));
    }

    #[test]
    fn boolean_property_reads_value_or_default() {
        let c = config("flag: true");
        assert_eq!(c.boolean_property_default("flag", false).unwrap(), true);
        assert_eq!(c.boolean_property_default("nope", false).unwrap(), false);
        assert_eq!(c.boolean_property_default("nope", true).unwrap(), true);
    }

    #[test]
    fn boolean_property_is_strictly_typed() {
        let c = config("flag: \"true\"");
        let err = c.boolean_property_default("flag", false).unwrap_err();
        assert_eq!(err.to_string(), "not a boolean: string (true)");
    }

    #[test]
    fn boolean_property_rejects_non_hash_payload() {
        let c = config("[one]");
        let err = c.boolean_property_default("flag", false).unwrap_err();
        assert_eq!(err.to_string(), "not a hash: list ([one])");
    }

    #[test]
    fn list_of_strings_returns_elements_in_order() {
        let c = config("[one, two]");
        assert_eq!(c.list_of_strings().unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn list_of_strings_accepts_empty_sequence() {
        let c = config("[]");
        assert_eq!(c.list_of_strings().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn list_of_strings_reports_first_invalid_element() {
        let c = config("[one, 2]");
        let err = c.list_of_strings().unwrap_err();
        assert_eq!(
            err.to_string(),
            "not a list of strings: invalid element: type int (2)"
        );
    }

    #[test]
    fn list_of_strings_rejects_non_sequence_payload() {
        let c = config("plop");
        let err = c.list_of_strings().unwrap_err();
        assert_eq!(err.to_string(), "not a list of strings: type string (plop)");
    }

    #[test]
    fn list_property_reads_value_or_default() {
        let c = config("key: [one, two]");

        let val = c.list_of_strings_property_default("key", vec![]).unwrap();
        assert_eq!(val, vec!["one", "two"]);

        let val = c
            .list_of_strings_property_default("nope", vec!["three".to_string()])
            .unwrap();
        assert_eq!(val, vec!["three"]);
    }

    #[test]
    fn list_property_rejects_non_hash_payload() {
        let c = config("a string");
        let err = c.list_of_strings_property_default("key", vec![]).unwrap_err();
        assert_eq!(err.to_string(), "not a hash: string (a string)");
    }

    #[test]
    fn list_property_applies_list_contract_to_present_value() {
        let c = config("key: plop");
        let err = c.list_of_strings_property_default("key", vec![]).unwrap_err();
        assert_eq!(err.to_string(), "not a list of strings: type string (plop)");
    }

    #[test]
    fn error_kinds_are_inspectable() {
        let c = config("version: 3.6");
        assert!(matches!(
            c.string_property("version"),
            Err(ConfigError::NotAString(_))
        ));
        assert!(matches!(
            c.string_property("nope"),
            Err(ConfigError::PropertyNotFound(_))
        ));
    }
}
