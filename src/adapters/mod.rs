//! Adapter implementations of the port traits.
//!
//! - `live`: real disk, HTTP, clipboard command, and terminal dialogs.
//! - `recording`: wrap live adapters and capture interactions to a cassette.
//! - `replaying`: serve previously captured interactions.

pub mod live;
pub mod recording;
pub mod replaying;
