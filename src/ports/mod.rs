//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the resolver core and an
//! external system (lookup service, local disk, host selection, clipboard,
//! dialogs). Implementations live in `src/adapters/`.

pub mod clipboard;
pub mod filesystem;
pub mod lookup;
pub mod notifier;
pub mod selection;

pub use clipboard::ClipboardSink;
pub use filesystem::FileSystem;
pub use lookup::{DirectoryEntry, FileEntry, FileQuery, LookupClient, LookupFuture, LookupResult};
pub use notifier::{Notice, Notifier, Severity};
pub use selection::{SelectedItem, SelectionError, SelectionProvider};
