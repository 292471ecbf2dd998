//! Replaying adapter for the `LookupClient` port.

use super::{next_output, replay_result, SharedReplayer};
use crate::ports::lookup::{DirectoryEntry, FileQuery, LookupClient, LookupFuture};

/// Serves recorded lookup responses from a cassette.
pub struct ReplayingLookupClient {
    replayer: SharedReplayer,
}

impl ReplayingLookupClient {
    /// Creates a replaying lookup client backed by the given replayer.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl LookupClient for ReplayingLookupClient {
    fn list_directory(&self, _dir: &str) -> LookupFuture<'_, Vec<DirectoryEntry>> {
        let output = next_output(&self.replayer, "lookup", "list_directory");
        Box::pin(async move { replay_result(output, "lookup::list_directory") })
    }

    fn find_files(&self, _path: &str) -> LookupFuture<'_, FileQuery> {
        let output = next_output(&self.replayer, "lookup", "find_files");
        Box::pin(async move { replay_result(output, "lookup::find_files") })
    }
}
