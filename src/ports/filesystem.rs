//! Filesystem port for the directory-vs-file decision.

use std::path::Path;

/// Answers questions about the local filesystem.
///
/// Abstracting the disk lets the resolver run against recorded answers
/// without the storage mount being present.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if `path` exists and is a directory.
    ///
    /// Missing paths and paths that cannot be inspected are not directories.
    fn is_dir(&self, path: &Path) -> bool;
}
