//! Configuration for the caesar CLI
//!
//! Settings come from several layers, highest priority first:
//! 1. Command-line flags (applied by the CLI)
//! 2. Environment variables (`CAESAR_PRESERVE_CASE`,
//!    `CAESAR_PRESERVE_WHITESPACE`, `CAESAR_FORMAT`)
//! 3. Project config (`caesar.toml` or `.caesarrc.json`, or `--config`)
//! 4. User config (`~/.config/caesar/config.toml`)
//! 5. Built-in defaults
//!
//! # Configuration Format
//!
//! ```toml
//! [decode]
//! preserve_case = false
//! preserve_whitespace = true
//!
//! [output]
//! format = "text"     # text, json, markdown
//! top = 5             # candidates shown in analysis reports
//! show_all = false    # also list all 26 shifts
//! trim_input = true   # strip surrounding whitespace from input
//! ```

mod project_config;
mod user_config;

pub use project_config::{load_config_file, load_project_config, PROJECT_CONFIG_FILES};
pub use user_config::{init_user_config, user_config_path};

use crate::cipher::DecodeOptions;
use crate::error::ConfigError;
use crate::reporters::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Default number of candidates shown in reports
pub const DEFAULT_TOP: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CaesarConfig {
    #[serde(default)]
    pub decode: DecodeConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Files that contributed to this config, lowest priority first
    #[serde(skip)]
    sources: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DecodeConfig {
    pub preserve_case: Option<bool>,
    pub preserve_whitespace: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Report format: text, json, markdown
    pub format: Option<String>,
    /// Candidates shown in analysis reports
    pub top: Option<usize>,
    /// List every shift, not just the top ones
    pub show_all: Option<bool>,
    /// Strip surrounding whitespace from input before processing
    pub trim_input: Option<bool>,
}

impl CaesarConfig {
    /// Load user config, then project config, then environment overrides.
    ///
    /// An explicit `config_path` must exist and parse. Implicit files that
    /// fail to parse are logged and skipped.
    pub fn load(config_path: Option<&Path>, project_dir: &Path) -> Result<Self, ConfigError> {
        let mut config = CaesarConfig::default();

        if let Some(user) = user_config_path().filter(|p| p.exists()) {
            match load_config_file(&user) {
                Ok(user_config) => config.merge(user_config),
                Err(e) => tracing::warn!("Ignoring user config: {}", e),
            }
        }

        match config_path {
            Some(path) => config.merge(load_config_file(path)?),
            None => {
                if let Some(project) = load_project_config(project_dir) {
                    config.merge(project);
                }
            }
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        debug!("Effective config: {:?}", config);
        Ok(config)
    }

    pub(crate) fn with_source(mut self, path: &Path) -> Self {
        self.sources.push(path.to_path_buf());
        self
    }

    /// Config files that were loaded, lowest priority first
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: CaesarConfig) {
        if other.decode.preserve_case.is_some() {
            self.decode.preserve_case = other.decode.preserve_case;
        }
        if other.decode.preserve_whitespace.is_some() {
            self.decode.preserve_whitespace = other.decode.preserve_whitespace;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.output.top.is_some() {
            self.output.top = other.output.top;
        }
        if other.output.show_all.is_some() {
            self.output.show_all = other.output.show_all;
        }
        if other.output.trim_input.is_some() {
            self.output.trim_input = other.output.trim_input;
        }
        self.sources.extend(other.sources);
    }

    /// Apply `CAESAR_*` overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("CAESAR_PRESERVE_CASE") {
            self.decode.preserve_case = Some(parse_bool("CAESAR_PRESERVE_CASE", &v)?);
        }
        if let Some(v) = lookup("CAESAR_PRESERVE_WHITESPACE") {
            self.decode.preserve_whitespace = Some(parse_bool("CAESAR_PRESERVE_WHITESPACE", &v)?);
        }
        if let Some(v) = lookup("CAESAR_FORMAT") {
            if OutputFormat::from_str(&v).is_err() {
                return Err(ConfigError::InvalidValue {
                    key: "CAESAR_FORMAT".into(),
                    value: v,
                    expected: "text, json or markdown",
                });
            }
            self.output.format = Some(v);
        }
        Ok(())
    }

    /// Decode options with defaults filled in
    pub fn decode_options(&self) -> DecodeOptions {
        let defaults = DecodeOptions::default();
        DecodeOptions {
            preserve_case: self.decode.preserve_case.unwrap_or(defaults.preserve_case),
            preserve_whitespace: self
                .decode
                .preserve_whitespace
                .unwrap_or(defaults.preserve_whitespace),
        }
    }

    pub fn format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("text")
    }

    pub fn top(&self) -> usize {
        self.output.top.unwrap_or(DEFAULT_TOP)
    }

    pub fn show_all(&self) -> bool {
        self.output.show_all.unwrap_or(false)
    }

    pub fn trim_input(&self) -> bool {
        self.output.trim_input.unwrap_or(true)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: "a boolean (true/false)",
        }),
    }
}
