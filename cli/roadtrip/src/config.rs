//! `roadtrip.toml` configuration discovery and parsing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the configuration file searched for.
pub const CONFIG_FILE: &str = "roadtrip.toml";

/// The top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadtripConfig {
    /// Output rendering.
    #[serde(default)]
    pub output: OutputConfig,
    /// Road map checks.
    #[serde(default)]
    pub map: MapConfig,
}

/// How directions are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console directions.
    #[default]
    Text,
    /// A JSON array of directions.
    Json,
}

/// Output section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Decimals for miles, speeds and seconds.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    roadtrip_map::DEFAULT_PRECISION
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

/// Map section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Refuse to plan trips on a map that is not strongly connected.
    #[serde(default = "default_require_strongly_connected")]
    pub require_strongly_connected: bool,
}

fn default_require_strongly_connected() -> bool {
    true
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            require_strongly_connected: default_require_strongly_connected(),
        }
    }
}

impl RoadtripConfig {
    /// Search upward from `start_dir` for a `roadtrip.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let config: RoadtripConfig = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a configuration from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing roadtrip.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[output]
format = "json"
precision = 3

[map]
require_strongly_connected = false
"#;
        let config = RoadtripConfig::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.precision, 3);
        assert!(!config.map.require_strongly_connected);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = RoadtripConfig::from_str("").unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.precision, 1);
        assert!(config.map.require_strongly_connected);
    }

    #[test]
    fn partial_section_uses_defaults() {
        let config = RoadtripConfig::from_str("[output]\nprecision = 2\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.precision, 2);
        assert!(config.map.require_strongly_connected);
    }

    #[test]
    fn reject_unknown_format() {
        assert!(RoadtripConfig::from_str("[output]\nformat = \"yaml\"\n").is_err());
        assert!(RoadtripConfig::from_str("this is not valid toml [[[").is_err());
    }

    #[test]
    fn find_and_load_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[output]\nprecision = 4\n").unwrap();

        let (config, found_dir) = RoadtripConfig::find_and_load(dir.path()).unwrap().unwrap();
        assert_eq!(config.output.precision, 4);
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_in_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[map]\nrequire_strongly_connected = false\n")
            .unwrap();
        let sub = dir.path().join("maps").join("west");
        std::fs::create_dir_all(&sub).unwrap();

        let (config, found_dir) = RoadtripConfig::find_and_load(&sub).unwrap().unwrap();
        assert!(!config.map.require_strongly_connected);
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[output\n").unwrap();
        let err = RoadtripConfig::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains(CONFIG_FILE));
    }
}
