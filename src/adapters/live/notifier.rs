//! Terminal stand-in for the host's message boxes.

use crate::ports::notifier::{Notice, Notifier, Severity, NOTICE_TITLE};

/// Prints notices as `Get LucidLink: <message>`.
///
/// Information goes to stdout, warnings and critical notices to stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.severity() {
            Severity::Information => println!("{NOTICE_TITLE}: {notice}"),
            Severity::Warning | Severity::Critical => eprintln!("{NOTICE_TITLE}: {notice}"),
        }
    }
}
