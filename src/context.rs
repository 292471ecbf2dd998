//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::{
    CommandClipboard, LiveFileSystem, LiveLookupClient, StdoutClipboard, TerminalNotifier,
};
use crate::adapters::recording::{RecordingFileSystem, RecordingLookupClient, SharedRecorder};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingLookupClient};
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::Config;
use crate::ports::clipboard::ClipboardSink;
use crate::ports::filesystem::FileSystem;
use crate::ports::lookup::LookupClient;
use crate::ports::notifier::Notifier;

/// Bundles the port trait objects a resolution run needs.
///
/// Constructors wire up different adapter sets (live, recording, replaying).
pub struct ServiceContext {
    /// Local filesystem, for the directory-vs-file decision.
    pub fs: Box<dyn FileSystem>,
    /// Lookup service client.
    pub lookup: Box<dyn LookupClient>,
    /// Destination for copied links.
    pub clipboard: Box<dyn ClipboardSink>,
    /// User-facing dialogs.
    pub notifier: Box<dyn Notifier>,
    recorder: Option<SharedRecorder>,
}

impl ServiceContext {
    /// Creates a live context talking to the configured lookup service.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        let clipboard = config
            .clipboard_command
            .as_deref()
            .map_or_else(
                CommandClipboard::platform_default,
                CommandClipboard::from_command_line,
            );

        Self {
            fs: Box::new(LiveFileSystem),
            lookup: Box::new(LiveLookupClient::new(&config.lookup_url, &config.filespace)),
            clipboard: Box::new(clipboard),
            notifier: Box::new(TerminalNotifier),
            recorder: None,
        }
    }

    /// Creates a live context whose lookup and filesystem calls are recorded.
    ///
    /// The cassette is written to `path` by [`ServiceContext::finish`].
    #[must_use]
    pub fn recording(config: &Config, path: &Path) -> Self {
        let recorder: SharedRecorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, "lucidlink-session")));
        let live = Self::live(config);

        Self {
            fs: Box::new(RecordingFileSystem::new(live.fs, Arc::clone(&recorder))),
            lookup: Box::new(RecordingLookupClient::new(live.lookup, Arc::clone(&recorder))),
            clipboard: live.clipboard,
            notifier: live.notifier,
            recorder: Some(recorder),
        }
    }

    /// Creates a context whose lookup and filesystem answers come from a cassette.
    ///
    /// Links are printed to stdout rather than copied.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let replayer = Arc::new(Mutex::new(CassetteReplayer::from_file(path)?));
        Ok(Self {
            fs: Box::new(ReplayingFileSystem::new(Arc::clone(&replayer))),
            lookup: Box::new(ReplayingLookupClient::new(replayer)),
            clipboard: Box::new(StdoutClipboard),
            notifier: Box::new(TerminalNotifier),
            recorder: None,
        })
    }

    /// Replaces the clipboard sink.
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Replaces the notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Tears the context down, writing the cassette if this was a recording.
    ///
    /// Returns the cassette path when one was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        // Adapters hold recorder clones; release them before unwrapping.
        drop(self.fs);
        drop(self.lookup);

        let Some(recorder) = self.recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| "cassette recorder is still shared".to_string())?
            .into_inner()
            .map_err(|_| "cassette recorder lock poisoned".to_string())?;
        let path = recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;

    #[test]
    fn live_context_finishes_without_cassette() {
        let ctx = ServiceContext::live(&Config::default());
        assert_eq!(ctx.finish().unwrap(), None);
    }

    #[test]
    fn recording_context_writes_cassette_on_finish() {
        let dir = tempfile::tempdir().unwrap();
        let cassette_path = dir.path().join("session.cassette.yaml");

        let ctx = ServiceContext::recording(&Config::default(), &cassette_path);
        assert!(ctx.fs.is_dir(dir.path()));

        let written = ctx.finish().unwrap();
        assert_eq!(written.as_deref(), Some(cassette_path.as_path()));

        let cassette: Cassette =
            serde_yaml::from_str(&std::fs::read_to_string(&cassette_path).unwrap()).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].port, "fs");
        assert_eq!(cassette.interactions[0].output, serde_json::json!(true));
    }

    #[test]
    fn replaying_context_reports_missing_cassette() {
        let err = ServiceContext::replaying(Path::new("/nonexistent/session.cassette.yaml"))
            .err()
            .expect("missing cassette should fail");
        assert!(err.contains("Failed to read cassette file"));
    }
}
