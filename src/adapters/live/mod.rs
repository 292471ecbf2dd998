//! Live adapters for real external interactions.

pub mod clipboard;
pub mod filesystem;
pub mod lookup;
pub mod notifier;
pub mod selection;

pub use clipboard::{CommandClipboard, StdoutClipboard};
pub use filesystem::LiveFileSystem;
pub use lookup::LiveLookupClient;
pub use notifier::TerminalNotifier;
pub use selection::{SelectionExport, SelectionFile};
