//! Short-path derivation for media references.
//!
//! The lookup service addresses files relative to the filespace root. The two
//! host integrations derive that relative path differently, so both
//! derivations are kept as named policies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

const FILE_SCHEME: &str = "file://";

/// How a host-reported path is turned into a filespace-relative short path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NormalizationPolicy {
    /// Drop the `file://` scheme and the mount prefix, then encode spaces.
    PrefixStrip {
        /// Local mount point of the filespace, e.g. `/Volumes/sandwich-post/`.
        mount_prefix: String,
    },
    /// Keep everything from the first occurrence of a marker directory onward.
    PatternExtract {
        /// Marker directory, e.g. `active_projects/`.
        marker: String,
    },
}

impl NormalizationPolicy {
    /// Derives the short path for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidPath`] when the path does not follow the
    /// policy's convention or would normalize to an empty path.
    pub fn normalize(&self, path: &str) -> Result<ShortPath, ResolveError> {
        let short = match self {
            Self::PrefixStrip { mount_prefix } => {
                let local = path.replace(FILE_SCHEME, "");
                if !local.contains(mount_prefix.as_str()) {
                    return Err(ResolveError::invalid_path(
                        path,
                        format!("not under mount prefix {mount_prefix}"),
                    ));
                }
                local.replace(mount_prefix.as_str(), "").replace(' ', "%20")
            }
            Self::PatternExtract { marker } => {
                let start = path.find(marker.as_str()).ok_or_else(|| {
                    ResolveError::invalid_path(path, format!("does not contain {marker}"))
                })?;
                let short = &path[start..];
                if short.len() == marker.len() {
                    return Err(ResolveError::invalid_path(
                        path,
                        format!("nothing follows {marker}"),
                    ));
                }
                short.to_string()
            }
        };

        let short = short.trim_start_matches('/');
        if short.is_empty() {
            return Err(ResolveError::invalid_path(path, "normalizes to an empty path"));
        }
        Ok(ShortPath(short.to_string()))
    }

    /// Returns the path used for the local directory check.
    #[must_use]
    pub fn local_path(&self, path: &str) -> String {
        match self {
            Self::PrefixStrip { .. } => path.replace(FILE_SCHEME, ""),
            Self::PatternExtract { .. } => path.to_string(),
        }
    }

    /// Short human-readable name, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PrefixStrip { .. } => "prefix-strip",
            Self::PatternExtract { .. } => "pattern-extract",
        }
    }
}

/// A filespace-relative path as understood by the lookup service.
///
/// Never empty and never starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortPath(String);

impl ShortPath {
    /// The path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The parent directory of the short path (empty at the filespace root).
    #[must_use]
    pub fn parent(&self) -> &str {
        crate::sequence::dirname(&self.0)
    }
}

impl fmt::Display for ShortPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
