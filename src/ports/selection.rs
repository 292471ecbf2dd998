//! Host selection port.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One item of the host application's current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedItem {
    /// Display name of the item (track item or node name).
    pub name: String,
    /// Host item type, e.g. `TrackItem` on a timeline or `Read` in a node graph.
    pub class: String,
    /// Media path the item references, if it has one.
    #[serde(default)]
    pub path: Option<String>,
}

/// Why the host selection could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The timeline host has no sequence open.
    #[error("No active sequence.")]
    NoActiveSequence,
    /// The timeline host has no editor for the active sequence.
    #[error("No timeline editor available.")]
    NoTimelineEditor,
    /// The selection could not be obtained at all.
    #[error("Selection unavailable: {0}")]
    Unavailable(String),
}

/// Read-only view of the host's current selection.
///
/// Injected at call time so adapters never reach for ambient host state.
pub trait SelectionProvider {
    /// Returns the selected items in host order.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] when the host has nothing to select from.
    fn selected_items(&self) -> Result<Vec<SelectedItem>, SelectionError>;
}
