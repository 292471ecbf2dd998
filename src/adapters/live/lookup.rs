//! Live adapter for the `LookupClient` port using the local filespace HTTP API.

use std::error::Error;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::ports::lookup::{DirectoryEntry, FileQuery, LookupClient, LookupFuture, LookupResult};

/// Live lookup client that queries the filespace service over HTTP.
///
/// No timeout is configured; each call is a single GET.
pub struct LiveLookupClient {
    client: Client,
    base_url: String,
    filespace: String,
}

impl LiveLookupClient {
    /// Creates a client for the service at `base_url` serving `filespace`.
    #[must_use]
    pub fn new(base_url: &str, filespace: &str) -> Self {
        // The service is local-only; never route it through an HTTP proxy.
        let client = Client::builder()
            .no_proxy()
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            filespace: filespace.to_string(),
        }
    }

    /// URL of the directory listing for `dir`.
    #[must_use]
    pub fn directory_url(&self, dir: &str) -> String {
        format!("{}/files/{dir}", self.base_url)
    }

    /// URL of the path query for `path`.
    #[must_use]
    pub fn file_query_url(&self, path: &str) -> String {
        format!("{}/v1/{}/files?path=/{path}", self.base_url, self.filespace)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> LookupResult<T> {
        tracing::debug!(%url, "lookup request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| lookup_error(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| lookup_error(format!("failed to read response from {url}: {e}")))?;

        if !status.is_success() {
            let code = status.as_u16();
            return Err(lookup_error(format!("lookup service error ({code}) for {url}")));
        }

        serde_json::from_str(&body)
            .map_err(|e| lookup_error(format!("failed to parse response from {url}: {e}")))
    }
}

fn lookup_error(message: String) -> Box<dyn Error + Send + Sync> {
    message.into()
}

impl LookupClient for LiveLookupClient {
    fn list_directory(&self, dir: &str) -> LookupFuture<'_, Vec<DirectoryEntry>> {
        let url = self.directory_url(dir);
        Box::pin(async move {
            let entries: Vec<DirectoryEntry> = self.get_json(url).await?;
            tracing::debug!(count = entries.len(), "folder listing returned");
            Ok(entries)
        })
    }

    fn find_files(&self, path: &str) -> LookupFuture<'_, FileQuery> {
        let url = self.file_query_url(path);
        Box::pin(self.get_json(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_service_routes() {
        let client = LiveLookupClient::new("http://127.0.0.1:8279/", "sandwich-post.sandwich");
        assert_eq!(
            client.directory_url("active_projects/job"),
            "http://127.0.0.1:8279/files/active_projects/job"
        );
        assert_eq!(
            client.file_query_url("active_projects/job/plate%2001.mov"),
            "http://127.0.0.1:8279/v1/sandwich-post.sandwich/files?path=/active_projects/job/plate%2001.mov"
        );
    }

    #[tokio::test]
    async fn unreachable_service_is_an_error() {
        // Port 9 (discard) is not expected to run an HTTP server.
        let client = LiveLookupClient::new("http://127.0.0.1:9", "sandwich-post.sandwich");
        let result = client.find_files("active_projects/a.mov").await;
        assert!(result.is_err());
    }
}
