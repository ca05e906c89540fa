//! jcegen.toml configuration

use anyhow::{Context, Result};
use jcegen_core::GeneratorOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "jcegen.toml";

/// Output directory used when neither `--output` nor `output_dir` is set
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// jcegen.toml structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where generated files go (overridden by `--output`)
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Options passed to the composer
    #[serde(default)]
    pub generator: GeneratorOptions,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            log_level: default_log_level(),
            generator: GeneratorOptions::default(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `./jcegen.toml` is used if it
    /// exists and defaults apply otherwise.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Resolve the output directory, letting the command line win.
    pub fn output_dir(&self, cli_output: Option<String>) -> String {
        cli_output
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
    }
}
