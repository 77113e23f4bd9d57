//! Error types for everything around the cipher core
//!
//! The transform and the analyzer never fail; only file access and
//! configuration loading do.

use std::path::PathBuf;
use thiserror::Error;

/// A file could not be read or written
#[derive(Error, Debug)]
pub enum ResourceAccessError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResourceAccessError {
    /// Classify an I/O error for `path`
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ResourceAccessError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => ResourceAccessError::PermissionDenied { path },
            _ => ResourceAccessError::Io { path, source },
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            ResourceAccessError::NotFound { path }
            | ResourceAccessError::PermissionDenied { path }
            | ResourceAccessError::Io { path, .. } => path,
        }
    }
}

/// A configuration file exists but could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: '{value}' (expected {expected})")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Access(#[from] ResourceAccessError),
}
