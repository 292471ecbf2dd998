//! Lookup service port for resolving short paths to file ids.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::link::FileId;

/// Result of a lookup call.
pub type LookupResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Boxed future type alias used by [`LookupClient`] to keep the trait dyn-compatible.
pub type LookupFuture<'a, T> = Pin<Box<dyn Future<Output = LookupResult<T>> + Send + 'a>>;

/// One child of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Filespace-relative path of the child.
    pub name: String,
    /// Identifier of the child.
    pub id: FileId,
}

/// A file returned by a path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Identifier of the file.
    pub id: FileId,
}

/// Result of a path query: every file the service matched, best match first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileQuery {
    /// Matched files.
    pub files: Vec<FileEntry>,
}

/// Queries the local filespace lookup service.
pub trait LookupClient: Send + Sync {
    /// Lists the children of the directory at the filespace-relative `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// that is not a JSON array of `{name, id}` objects.
    fn list_directory(&self, dir: &str) -> LookupFuture<'_, Vec<DirectoryEntry>>;

    /// Looks up the file at the filespace-relative `path`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// that is not a JSON object with a `files` list.
    fn find_files(&self, path: &str) -> LookupFuture<'_, FileQuery>;
}
