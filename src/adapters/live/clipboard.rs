//! Clipboard delivery.
//!
//! The system clipboard is written by piping text into the platform's
//! clipboard utility; `--print` swaps in a stdout sink.

use std::error::Error;
use std::io::Write;
use std::process::{Command, Stdio};

use crate::ports::clipboard::ClipboardSink;

/// Writes clipboard text by piping it to an external command's stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Uses `program` with `args` as the clipboard command.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Builds a clipboard from a configured command line (`[program, args...]`).
    ///
    /// Falls back to the platform default when the command is empty.
    #[must_use]
    pub fn from_command_line(command: &[String]) -> Self {
        match command.split_first() {
            Some((program, args)) => Self::new(program.clone(), args.to_vec()),
            None => Self::platform_default(),
        }
    }

    /// `pbcopy` on macOS, `xclip -selection clipboard` elsewhere.
    #[must_use]
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else {
            Self::new("xclip", vec!["-selection".into(), "clipboard".into()])
        }
    }
}

impl ClipboardSink for CommandClipboard {
    fn set_text(&self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("failed to start clipboard command {}: {e}", self.program))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
            // stdin drops here so the command sees EOF.
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("clipboard command {} exited with {status}", self.program).into())
        }
    }
}

/// Prints clipboard text to stdout instead of touching the system clipboard.
pub struct StdoutClipboard;

impl ClipboardSink for StdoutClipboard {
    fn set_text(&self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
        Ok(())
    }

    fn is_stdout(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn pipes_text_into_command() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clipboard.txt");
        let clipboard =
            CommandClipboard::new("sh", vec!["-c".into(), format!("cat > {}", out.display())]);

        clipboard.set_text("lucid://a\nlucid://b").unwrap();

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "lucid://a\nlucid://b"
        );
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_is_an_error() {
        let clipboard = CommandClipboard::new("sh", vec!["-c".into(), "exit 3".into()]);
        assert!(clipboard.set_text("x").is_err());
    }

    #[test]
    fn missing_program_is_an_error() {
        let clipboard = CommandClipboard::new("lucidlink-no-such-clipboard-tool", Vec::new());
        assert!(clipboard.set_text("x").is_err());
    }

    #[test]
    fn only_stdout_sink_reports_stdout() {
        assert!(StdoutClipboard.is_stdout());
        assert!(!CommandClipboard::platform_default().is_stdout());
    }

    #[test]
    fn empty_command_line_uses_platform_default() {
        assert_eq!(
            CommandClipboard::from_command_line(&[]),
            CommandClipboard::platform_default()
        );
    }
}
