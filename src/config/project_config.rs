//! Project-level configuration files
//!
//! Looks for `caesar.toml`, then `.caesarrc.json`, in the given directory.

use super::CaesarConfig;
use crate::error::{ConfigError, ResourceAccessError};
use std::path::Path;
use tracing::{debug, warn};

/// Candidate file names, in lookup order
pub const PROJECT_CONFIG_FILES: &[&str] = &["caesar.toml", ".caesarrc.json"];

/// Load the first project config found in `dir`.
///
/// Files that fail to parse are logged and skipped.
pub fn load_project_config(dir: &Path) -> Option<CaesarConfig> {
    for name in PROJECT_CONFIG_FILES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded project config from {}", path.display());
                return Some(config);
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No project config found in {}", dir.display());
    None
}

/// Load a config file, picking the parser from its extension.
///
/// `.json` files are parsed as JSON, everything else as TOML.
pub fn load_config_file(path: &Path) -> Result<CaesarConfig, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ResourceAccessError::from_io(path, e))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let config: CaesarConfig = if is_json {
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?
    };

    Ok(config.with_source(path))
}
