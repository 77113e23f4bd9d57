//! User-level configuration (`~/.config/caesar/config.toml`)

use crate::error::ResourceAccessError;
use std::path::PathBuf;

const EXAMPLE_CONFIG: &str = r#"# Caesar User Configuration
#
# Project files (caesar.toml) and CAESAR_* environment variables
# override these settings; command-line flags override everything.

[decode]
# preserve_case = false
# preserve_whitespace = true

[output]
# format = "text"      # text, json, markdown
# top = 5
# show_all = false
# trim_input = true
"#;

/// Get the user config file path
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("caesar").join("config.toml"))
}

/// Create the user config directory and an example config file.
///
/// An existing file is left untouched.
pub fn init_user_config() -> Result<PathBuf, ResourceAccessError> {
    let config_path = user_config_path().ok_or_else(|| ResourceAccessError::NotFound {
        path: PathBuf::from("<config dir>"),
    })?;
    write_example(&config_path)?;
    Ok(config_path)
}

fn write_example(config_path: &std::path::Path) -> Result<(), ResourceAccessError> {
    if config_path.exists() {
        return Ok(());
    }
    crate::io::write_text(config_path, EXAMPLE_CONFIG)
}
