//! Runtime configuration.
//!
//! Values come from, in increasing precedence: built-in defaults, an optional
//! YAML file, and `LUCIDLINK_*` environment variables (a `.env` file in the
//! working directory is loaded first).

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::NormalizationPolicy;

/// Environment variable naming a YAML config file.
pub const CONFIG_ENV: &str = "LUCIDLINK_CONFIG";

/// Default address of the local lookup service.
pub const DEFAULT_LOOKUP_URL: &str = "http://127.0.0.1:8279";
/// Default filespace name used in lookup routes and deep links.
pub const DEFAULT_FILESPACE: &str = "sandwich-post.sandwich";
/// Default local mount point of the filespace.
pub const DEFAULT_MOUNT_PREFIX: &str = "/Volumes/sandwich-post/";
/// Default marker directory for marker-based short paths.
pub const DEFAULT_MARKER: &str = "active_projects/";

/// Failure to load configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The config file is not valid YAML for [`Config`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
}

/// Which short-path derivation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Strip the `file://` scheme and the mount prefix, encode spaces.
    PrefixStrip,
    /// Keep everything from the marker directory onward.
    PatternExtract,
}

/// Settings for talking to the lookup service and deriving short paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the local lookup service.
    pub lookup_url: String,
    /// Filespace name, used in lookup routes and deep links.
    pub filespace: String,
    /// Local mount point stripped by the prefix-strip policy.
    pub mount_prefix: String,
    /// Marker directory searched by the pattern-extract policy.
    pub marker: String,
    /// Command (program and arguments) that receives clipboard text on stdin.
    pub clipboard_command: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            filespace: DEFAULT_FILESPACE.to_string(),
            mount_prefix: DEFAULT_MOUNT_PREFIX.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            clipboard_command: None,
        }
    }
}

impl Config {
    /// Loads configuration from `path` (or `LUCIDLINK_CONFIG`) and the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a config file is named but cannot be read
    /// or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let from_env = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match path.map(Path::to_path_buf).or(from_env) {
            Some(file) => Self::from_file(&file)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Reads a YAML config file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `LUCIDLINK_*` overrides looked up through `var`.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        let fields: [(&str, &mut String); 4] = [
            ("LUCIDLINK_LOOKUP_URL", &mut self.lookup_url),
            ("LUCIDLINK_FILESPACE", &mut self.filespace),
            ("LUCIDLINK_MOUNT_PREFIX", &mut self.mount_prefix),
            ("LUCIDLINK_MARKER", &mut self.marker),
        ];
        for (key, field) in fields {
            if let Some(value) = var(key).filter(|v| !v.is_empty()) {
                tracing::debug!(key, value = %value, "config override from environment");
                *field = value;
            }
        }
    }

    /// Builds the normalization policy of the given kind from this config.
    #[must_use]
    pub fn policy(&self, kind: PolicyKind) -> NormalizationPolicy {
        match kind {
            PolicyKind::PrefixStrip => NormalizationPolicy::PrefixStrip {
                mount_prefix: self.mount_prefix.clone(),
            },
            PolicyKind::PatternExtract => NormalizationPolicy::PatternExtract {
                marker: self.marker.clone(),
            },
        }
    }
}
