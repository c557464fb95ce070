//! Configuration management.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `PAPER_CATALOG_*` environment variables. The binary applies CLI flags last.
//!
//! # Configuration File Format
//!
//! ```toml
//! [paths]
//! input = "../EnvSeis_paper/environmental_seismology_papers_v17_filtered.json"
//! output = "papers.json"
//!
//! [classification]
//! mode = "multi"
//!
//! [[classification.overrides]]
//! doi = "10.1029/JB087iB07p05422"
//! topics = ["landslide", "volcano"]
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Environment variables use `__` between nested keys, e.g.
//! `PAPER_CATALOG_PATHS__OUTPUT=site/papers.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};
use crate::models::Topic;
use crate::topics::{ClassificationMode, Classifier};

/// Default configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "paper-catalog.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "PAPER_CATALOG";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input and output files
    #[serde(default)]
    pub paths: PathsConfig,

    /// Topic classification settings
    #[serde(default)]
    pub classification: ClassificationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input and output file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Source JSON array of paper records
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Catalog document to write
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("../EnvSeis_paper/environmental_seismology_papers_v17_filtered.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("papers.json")
}

/// Topic classification configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    #[serde(default)]
    pub mode: ClassificationMode,

    /// Extra DOI overrides, applied on top of the built-in ones
    #[serde(default)]
    pub overrides: Vec<OverrideConfig>,
}

/// A manual topic list for one DOI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideConfig {
    pub doi: String,
    pub topics: Vec<String>,
}

impl OverrideConfig {
    /// Resolve topic keys, rejecting unknown keys and empty lists
    pub fn resolve(&self) -> Result<(String, Vec<Topic>)> {
        if self.topics.is_empty() {
            return Err(CatalogError::EmptyOverride(self.doi.clone()));
        }

        let topics = self
            .topics
            .iter()
            .map(|key| {
                key.parse::<Topic>().map_err(|topic| CatalogError::UnknownTopic {
                    doi: self.doi.clone(),
                    topic,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((self.doi.trim().to_string(), topics))
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when neither `RUST_LOG` nor `-v`/`-q` is given
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Build the classifier: built-in rules and overrides plus configured overrides
    pub fn classifier(&self) -> Result<Classifier> {
        let overrides = self
            .classification
            .overrides
            .iter()
            .map(OverrideConfig::resolve)
            .collect::<Result<Vec<_>>>()?;

        Ok(Classifier::new(self.classification.mode).with_overrides(overrides))
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Load configuration from an optional file plus environment overrides
pub fn load_config(path: Option<&Path>) -> std::result::Result<Config, config::ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}

/// Look for `paper-catalog.toml` in the working directory
pub fn find_config_file() -> Option<PathBuf> {
    let candidate = PathBuf::from(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.paths.output, PathBuf::from("papers.json"));
        assert_eq!(config.classification.mode, ClassificationMode::Multi);
        assert!(config.classification.overrides.is_empty());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_file_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");

        let toml_content = r#"
[paths]
input = "data/source.json"
output = "site/papers.json"

[classification]
mode = "single"

[[classification.overrides]]
doi = "10.1/abc"
topics = ["river", "methods"]

[logging]
level = "debug"
"#;
        fs::write(&path, toml_content).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("data/source.json"));
        assert_eq!(config.paths.output, PathBuf::from("site/papers.json"));
        assert_eq!(config.classification.mode, ClassificationMode::Single);
        assert_eq!(config.classification.overrides.len(), 1);
        assert_eq!(config.classification.overrides[0].doi, "10.1/abc");
        assert_eq!(config.logging.level, "debug");

        let classifier = config.classifier().unwrap();
        assert_eq!(classifier.mode(), ClassificationMode::Single);
        assert_eq!(classifier.override_count(), 2);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, "[paths]\noutput = \"out.json\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.paths.output, PathBuf::from("out.json"));
        assert_eq!(config.paths.input, default_input());
        assert_eq!(config.classification.mode, ClassificationMode::Multi);
    }

    #[test]
    fn test_config_file_nonexistent() {
        let result = load_config(Some(Path::new("/nonexistent/catalog.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.toml");
        fs::write(&path, "invalid = toml = content").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_override_unknown_topic() {
        let entry = OverrideConfig {
            doi: "10.1/x".to_string(),
            topics: vec!["landslide".to_string(), "tsunami".to_string()],
        };
        match entry.resolve() {
            Err(CatalogError::UnknownTopic { doi, topic }) => {
                assert_eq!(doi, "10.1/x");
                assert_eq!(topic, "tsunami");
            }
            other => panic!("Expected UnknownTopic, got {:?}", other),
        }
    }

    #[test]
    fn test_override_empty_topics() {
        let entry = OverrideConfig {
            doi: "10.1/x".to_string(),
            topics: vec![],
        };
        assert!(matches!(entry.resolve(), Err(CatalogError::EmptyOverride(_))));
    }

    #[test]
    fn test_to_toml_round_trip() {
        let mut config = Config::default();
        config.classification.overrides.push(OverrideConfig {
            doi: "10.1/abc".to_string(),
            topics: vec!["glacier".to_string()],
        });

        let rendered = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
