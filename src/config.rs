//! Run configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::enov::NoveltyParams;
use crate::error::{NoveltyError, Result};

pub const DEFAULT_INPUT_PATH: &str = "assets/LJ037-0171.wav";
pub const DEFAULT_OUTPUT_PATH: &str = "LJ037-0171.csv";

/// Everything a single run needs. Fields missing from a config file take
/// their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoveltyConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Frame size N in samples.
    pub frame_size: usize,
    /// Hop size H in samples.
    pub hop_size: usize,
    pub gamma: f64,
    pub normalize: bool,
    /// Replace `output_path` if it already exists.
    pub overwrite: bool,
}

impl Default for NoveltyConfig {
    fn default() -> Self {
        let params = NoveltyParams::default();
        NoveltyConfig {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            frame_size: params.frame_size,
            hop_size: params.hop_size,
            gamma: params.gamma,
            normalize: params.normalize,
            overwrite: false,
        }
    }
}

impl NoveltyConfig {
    /// Reads a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| NoveltyError::io(path, error))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| NoveltyError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn params(&self) -> NoveltyParams {
        NoveltyParams::new(self.frame_size, self.hop_size, self.gamma, self.normalize)
    }

    pub fn validate(&self) -> Result<()> {
        self.params().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NoveltyConfig::default();
        assert_eq!(config.frame_size, 2048);
        assert_eq!(config.hop_size, 128);
        assert_eq!(config.gamma, 10.0);
        assert!(config.normalize);
        assert!(!config.overwrite);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: NoveltyConfig =
            serde_json::from_str(r#"{ "hop_size": 256, "normalize": false, "output_path": "out.csv" }"#)
                .unwrap();
        assert_eq!(config.hop_size, 256);
        assert!(!config.normalize);
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
        assert_eq!(config.frame_size, 2048);
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = serde_json::from_str::<NoveltyConfig>(r#"{ "window": 1024 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        let config = NoveltyConfig {
            gamma: -0.5,
            ..NoveltyConfig::default()
        };
        assert!(matches!(config.validate(), Err(NoveltyError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let error = NoveltyConfig::from_json_file("no/such/config.json").unwrap_err();
        assert!(error.is_io());
    }
}
