//! User-facing notification port.

use std::fmt;

/// Dialog title shared by every notice.
pub const NOTICE_TITLE: &str = "Get LucidLink";

/// How prominently a notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational dialog.
    Information,
    /// Warning dialog.
    Warning,
    /// Critical dialog.
    Critical,
}

/// Outcome of one selection-adapter run, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Nothing usable was selected.
    NoSelection {
        /// Host-specific explanation.
        message: String,
    },
    /// The selection contains item types the adapter cannot resolve.
    UnsupportedSelection {
        /// Host-specific explanation.
        message: String,
    },
    /// Every selected path failed to resolve.
    NoValidLinks,
    /// At least one link was copied to the clipboard.
    LinksCopied {
        /// Number of links copied.
        count: usize,
    },
    /// At least one link was printed to stdout instead of the clipboard.
    LinksPrinted {
        /// Number of links printed.
        count: usize,
    },
}

impl Notice {
    /// Notice for `count` links handed to a sink that writes to stdout or not.
    #[must_use]
    pub fn delivered(count: usize, to_stdout: bool) -> Self {
        if to_stdout {
            Self::LinksPrinted { count }
        } else {
            Self::LinksCopied { count }
        }
    }

    /// Dialog severity for this notice.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoSelection { .. } | Self::NoValidLinks => Severity::Warning,
            Self::UnsupportedSelection { .. } => Severity::Critical,
            Self::LinksCopied { .. } | Self::LinksPrinted { .. } => Severity::Information,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSelection { message } | Self::UnsupportedSelection { message } => {
                f.write_str(message)
            }
            Self::NoValidLinks => f.write_str("No valid LucidLink URLs found."),
            Self::LinksCopied { .. } => f.write_str("Link(s) copied to clipboard"),
            Self::LinksPrinted { .. } => f.write_str("Link(s) printed to stdout"),
        }
    }
}

/// Shows notices to the user.
pub trait Notifier {
    /// Displays `notice` with its severity.
    fn notify(&self, notice: &Notice);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_match_dialog_kinds() {
        assert_eq!(Notice::NoValidLinks.severity(), Severity::Warning);
        assert_eq!(
            Notice::LinksCopied { count: 2 }.severity(),
            Severity::Information
        );
        let message = "Only Read nodes supported.".to_string();
        assert_eq!(
            Notice::UnsupportedSelection { message }.severity(),
            Severity::Critical
        );
    }

    #[test]
    fn printed_links_do_not_claim_the_clipboard() {
        let notice = Notice::LinksPrinted { count: 2 };
        assert_eq!(notice.severity(), Severity::Information);
        assert_eq!(notice.to_string(), "Link(s) printed to stdout");
    }

    #[test]
    fn copied_message_is_count_independent() {
        assert_eq!(
            Notice::LinksCopied { count: 1 }.to_string(),
            "Link(s) copied to clipboard"
        );
        assert_eq!(
            Notice::LinksCopied { count: 5 }.to_string(),
            "Link(s) copied to clipboard"
        );
    }
}
