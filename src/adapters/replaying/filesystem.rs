//! Replaying adapter for the `FileSystem` port.

use std::path::Path;

use super::{next_output, SharedReplayer};
use crate::ports::filesystem::FileSystem;

/// Answers directory checks from a cassette.
pub struct ReplayingFileSystem {
    replayer: SharedReplayer,
}

impl ReplayingFileSystem {
    /// Creates a replaying filesystem backed by the given replayer.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn is_dir(&self, _path: &Path) -> bool {
        next_output(&self.replayer, "fs", "is_dir")
            .as_bool()
            .unwrap_or(false)
    }
}
