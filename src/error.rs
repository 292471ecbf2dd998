//! Error taxonomy for link resolution.

use thiserror::Error;

/// Why a single media path could not be turned into a deep link.
///
/// Every variant is recovered per path: the selection adapters log it and
/// leave the path out of the copied links.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The path does not follow the mount/marker convention of the active policy.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The path as it was handed to the normalizer.
        path: String,
        /// What the policy expected to find.
        reason: String,
    },
    /// The lookup service could not be reached or answered with garbage.
    #[error("failed to get LucidLink for: {short_path} ({cause})")]
    LookupFailed {
        /// Short path that was being looked up.
        short_path: String,
        /// Underlying transport, status, or decode error.
        cause: String,
    },
    /// The lookup succeeded but nothing matched the short path.
    #[error("no LucidLink entry for: {short_path} ({cause})")]
    LookupNotFound {
        /// Short path that was being looked up.
        short_path: String,
        /// What the service returned instead.
        cause: String,
    },
}

impl ResolveError {
    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn lookup_failed(short_path: &str, cause: impl std::fmt::Display) -> Self {
        Self::LookupFailed {
            short_path: short_path.to_string(),
            cause: cause.to_string(),
        }
    }

    pub(crate) fn not_found(short_path: &str, cause: impl Into<String>) -> Self {
        Self::LookupNotFound {
            short_path: short_path.to_string(),
            cause: cause.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResolveError;

    #[test]
    fn lookup_failure_message_names_short_path_and_cause() {
        let err = ResolveError::lookup_failed("active_projects/a.mov", "connection refused");
        assert_eq!(
            err.to_string(),
            "failed to get LucidLink for: active_projects/a.mov (connection refused)"
        );
    }

    #[test]
    fn invalid_path_message_includes_reason() {
        let err = ResolveError::invalid_path("/tmp/a.mov", "does not contain active_projects/");
        assert!(err.to_string().contains("/tmp/a.mov"));
        assert!(err.to_string().contains("active_projects/"));
    }
}
