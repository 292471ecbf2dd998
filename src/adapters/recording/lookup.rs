//! Recording adapter for the `LookupClient` port.

use serde::Serialize;

use super::{record_result, SharedRecorder};
use crate::ports::lookup::{DirectoryEntry, FileQuery, LookupClient, LookupFuture};

/// Records lookup calls while delegating to an inner implementation.
pub struct RecordingLookupClient {
    inner: Box<dyn LookupClient>,
    recorder: SharedRecorder,
}

impl RecordingLookupClient {
    /// Creates a recording lookup client wrapping the given implementation.
    pub fn new(inner: Box<dyn LookupClient>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput {
    path: String,
}

impl LookupClient for RecordingLookupClient {
    fn list_directory(&self, dir: &str) -> LookupFuture<'_, Vec<DirectoryEntry>> {
        let input = PathInput {
            path: dir.to_string(),
        };
        Box::pin(async move {
            let result = self.inner.list_directory(&input.path).await;
            record_result(&self.recorder, "lookup", "list_directory", &input, &result);
            result
        })
    }

    fn find_files(&self, path: &str) -> LookupFuture<'_, FileQuery> {
        let input = PathInput {
            path: path.to_string(),
        };
        Box::pin(async move {
            let result = self.inner.find_files(&input.path).await;
            record_result(&self.recorder, "lookup", "find_files", &input, &result);
            result
        })
    }
}
