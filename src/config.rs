// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Runtime configuration.
//!
//! Everything has a default; a JSON file may override any subset of fields.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Limits for rendering a sequence as one line of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Stop before the rendered text would exceed this many characters.
    pub max_chars: usize,
    /// Stop after this many terms.
    pub max_terms: usize,
    /// Written after every term.
    pub separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_chars: 60,
            max_terms: 20,
            separator: " ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    /// Rows shown at the end of an inspect report.
    pub inspect_rows: usize,
    /// Where the trait database is cached.
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            inspect_rows: 10,
            database_path: PathBuf::from("data/AllTraits.json"),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.render.max_chars, 60);
        assert_eq!(config.render.max_terms, 20);
        assert_eq!(config.inspect_rows, 10);
        assert_eq!(config.database_path, PathBuf::from("data/AllTraits.json"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabl.json");
        let mut config = Config::default();
        config.render.separator = ", ".to_string();
        config.inspect_rows = 4;
        config.save(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "inspect_rows": 3, "render": {{ "max_terms": 5 }} }}"#).unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.inspect_rows, 3);
        assert_eq!(config.render.max_terms, 5);
        assert_eq!(config.render.max_chars, 60);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Config::from_file("/nonexistent/tabl.json"),
            Err(ConfigError::Io(_))
        ));
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::Json(_))
        ));
    }
}
