use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::CezarError;

/// How candidates are judged for Polish-ness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Keyword overlap only.
    #[default]
    Keywords,
    /// Statistical language identification, keyword fallback.
    Detector,
}

/// Runtime configuration for the command line tool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub strategy: Strategy,
    /// File read when no source argument is given.
    pub default_input: PathBuf,
    /// Where the winning plaintext is written.
    pub output: PathBuf,
    /// Print the solution as JSON instead of the text report.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::Keywords,
            default_input: PathBuf::from("ciphertext.txt"),
            output: PathBuf::from("solution.txt"),
            json: false,
        }
    }
}

impl Config {
    /// Load a JSON config file. Missing keys take their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CezarError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cezar.json");
        fs::write(&path, r#"{ "strategy": "detector", "json": true }"#).unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.strategy, Strategy::Detector);
        assert!(cfg.json);
        assert_eq!(cfg.output, PathBuf::from("solution.txt"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cezar.json");
        fs::write(&path, r#"{ "shift": 3 }"#).unwrap();
        assert!(matches!(Config::load(&path), Err(CezarError::Json(_))));
    }
}
