//! Clipboard port.

/// Receives the text to place on the system clipboard.
pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard cannot be written.
    fn set_text(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Whether text ends up on stdout rather than the system clipboard.
    fn is_stdout(&self) -> bool {
        false
    }
}
