//! Manifest loading.
//!
//! A manifest is a human-authored YAML file with an `up:` list of task
//! entries. Each entry is either a bare task name or a single-key mapping
//! from task name to that task's payload:
//!
//! ```yaml
//! up:
//!   - tidy
//!   - command: make build
//!   - mkdir:
//!       - build/out
//!       - build/cache
//! ```
//!
//! Parsing is serde_yaml's job; this module only turns the parsed entries
//! into [`TaskConfig`]s.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigValue, TaskConfig, describe};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse manifest: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The entry is neither a task name nor a `name: payload` mapping.
    #[error("invalid task entry: {0}")]
    InvalidEntry(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Task entries, in execution order.
    #[serde(default)]
    pub up: Vec<ConfigValue>,
}

impl Manifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading manifest");
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// One [`TaskConfig`] per `up` entry, in manifest order.
    ///
    /// A bare string entry becomes a task with a null payload; a single-key
    /// mapping becomes a task named after the key, with the key's value as
    /// payload. Anything else is invalid.
    pub fn task_configs(&self) -> Result<Vec<TaskConfig>, ManifestError> {
        self.up.iter().map(task_config_from_entry).collect()
    }
}

fn task_config_from_entry(entry: &ConfigValue) -> Result<TaskConfig, ManifestError> {
    match entry {
        ConfigValue::String(name) => Ok(TaskConfig::new(name.clone(), ConfigValue::Null)),
        ConfigValue::Mapping(map) if map.len() == 1 => {
            let (name, payload) = map.iter().next().expect("len checked");
            Ok(TaskConfig::new(name.clone(), payload.clone()))
        }
        other => Err(ManifestError::InvalidEntry(describe(other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
up:
  - tidy
  - command: make build
  - mkdir:
      - build/out
      - build/cache
";

    #[test]
    fn parses_string_and_mapping_entries() {
        let manifest = Manifest::parse(SAMPLE).unwrap();
        let configs = manifest.task_configs().unwrap();

        assert_eq!(configs.len(), 3);

        assert_eq!(configs[0].name(), "tidy");
        assert_eq!(configs[0].payload(), &ConfigValue::Null);

        assert_eq!(configs[1].name(), "command");
        assert_eq!(
            configs[1].string_property_allow_single("command").unwrap(),
            "make build"
        );

        assert_eq!(configs[2].name(), "mkdir");
        assert_eq!(
            configs[2].list_of_strings().unwrap(),
            vec!["build/out", "build/cache"]
        );
    }

    #[test]
    fn empty_document_has_no_tasks() {
        let manifest = Manifest::parse("{}").unwrap();
        assert!(manifest.task_configs().unwrap().is_empty());
    }

    #[test]
    fn multi_key_entry_is_invalid() {
        let manifest = Manifest::parse("up:\n  - {a: 1, b: 2}\n").unwrap();
        let err = manifest.task_configs().unwrap_err();
        assert!(matches!(err, ManifestError::InvalidEntry(_)));
        assert_eq!(err.to_string(), "invalid task entry: hash ({a: 1, b: 2})");
    }

    #[test]
    fn scalar_entry_of_wrong_kind_is_invalid() {
        let manifest = Manifest::parse("up:\n  - 42\n").unwrap();
        let err = manifest.task_configs().unwrap_err();
        assert_eq!(err.to_string(), "invalid task entry: int (42)");
    }

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let manifest = Manifest::load(file.path()).unwrap();
        assert_eq!(manifest.task_configs().unwrap().len(), 3);
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let err = Manifest::load("/no/such/manifest.yml").unwrap_err();
        assert!(err.to_string().contains("/no/such/manifest.yml"));
    }
}
