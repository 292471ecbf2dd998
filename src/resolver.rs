//! Deep-link resolution for a single media path.
//!
//! Directories are found by listing their parent and matching on name;
//! files are found by a path query. Either way the first matching id
//! becomes the deep link.

use std::path::Path;

use crate::context::ServiceContext;
use crate::error::ResolveError;
use crate::link::{DeepLink, FileId};
use crate::normalize::{NormalizationPolicy, ShortPath};

/// Resolves media paths to deep links through the context's ports.
pub struct LinkResolver<'a> {
    ctx: &'a ServiceContext,
    policy: &'a NormalizationPolicy,
    filespace: &'a str,
}

impl<'a> LinkResolver<'a> {
    /// Creates a resolver that normalizes with `policy` and links into `filespace`.
    #[must_use]
    pub fn new(
        ctx: &'a ServiceContext,
        policy: &'a NormalizationPolicy,
        filespace: &'a str,
    ) -> Self {
        Self {
            ctx,
            policy,
            filespace,
        }
    }

    /// Resolves one raw host path (already reduced to its lookup path).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidPath`] if the path does not normalize
    /// under the active policy, otherwise whatever [`Self::resolve_link`] returns.
    pub async fn resolve(&self, raw_path: &str) -> Result<DeepLink, ResolveError> {
        tracing::debug!(path = raw_path, policy = self.policy.name(), "resolving");
        let full_path = self.policy.local_path(raw_path);
        let short_path = self.policy.normalize(raw_path)?;
        tracing::debug!(short_path = %short_path, "short path");
        self.resolve_link(&full_path, &short_path).await
    }

    /// Looks up `short_path` and builds its deep link.
    ///
    /// `full_path` is only used to decide between the directory and file lookups.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::LookupFailed`] if the service call fails and
    /// [`ResolveError::LookupNotFound`] if nothing matched.
    pub async fn resolve_link(
        &self,
        full_path: &str,
        short_path: &ShortPath,
    ) -> Result<DeepLink, ResolveError> {
        let id = if self.ctx.fs.is_dir(Path::new(full_path)) {
            self.directory_id(short_path).await?
        } else {
            self.file_id(short_path).await?
        };

        let link = DeepLink::new(self.filespace, &id);
        tracing::debug!(%link, "resolved");
        Ok(link)
    }

    async fn directory_id(&self, short_path: &ShortPath) -> Result<FileId, ResolveError> {
        let parent = short_path.parent();
        let entries = self
            .ctx
            .lookup
            .list_directory(parent)
            .await
            .map_err(|e| ResolveError::lookup_failed(short_path.as_str(), e))?;

        let count = entries.len();
        entries
            .into_iter()
            .find(|entry| entry.name == short_path.as_str())
            .map(|entry| entry.id)
            .ok_or_else(|| {
                ResolveError::not_found(
                    short_path.as_str(),
                    format!("no entry named {short_path} among {count} in {parent:?}"),
                )
            })
    }

    async fn file_id(&self, short_path: &ShortPath) -> Result<FileId, ResolveError> {
        let query = self
            .ctx
            .lookup
            .find_files(short_path.as_str())
            .await
            .map_err(|e| ResolveError::lookup_failed(short_path.as_str(), e))?;

        query
            .files
            .into_iter()
            .next()
            .map(|file| file.id)
            .ok_or_else(|| ResolveError::not_found(short_path.as_str(), "no files matched"))
    }
}
