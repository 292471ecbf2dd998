//! Host selection read from an exported YAML/JSON document.
//!
//! Host plugins dump their current selection to a file and invoke the
//! binary on it:
//!
//! ```yaml
//! sequence: edit_v012
//! timeline_editor: true
//! items:
//!   - name: plate_010
//!     class: TrackItem
//!     path: /Volumes/sandwich-post/active_projects/job/plate_010.mov
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ports::selection::{SelectedItem, SelectionError, SelectionProvider};

/// On-disk shape of an exported selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionExport {
    /// Active sequence name, for timeline hosts.
    #[serde(default)]
    pub sequence: Option<String>,
    /// Whether the host has a timeline editor open for `sequence`.
    ///
    /// Absent means open; exporters write `false` when the sequence has no editor.
    #[serde(default = "editor_open")]
    pub timeline_editor: bool,
    /// Selected items in host order.
    #[serde(default)]
    pub items: Vec<SelectedItem>,
}

fn editor_open() -> bool {
    true
}

/// Selection provider backed by an exported selection file.
pub struct SelectionFile {
    path: PathBuf,
    require_sequence: bool,
}

impl SelectionFile {
    /// Reads the selection at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            require_sequence: false,
        }
    }

    /// Treats an export without a `sequence` as "no active sequence".
    #[must_use]
    pub fn requiring_sequence(mut self) -> Self {
        self.require_sequence = true;
        self
    }
}

impl SelectionProvider for SelectionFile {
    fn selected_items(&self) -> Result<Vec<SelectedItem>, SelectionError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            SelectionError::Unavailable(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let export: SelectionExport = serde_yaml::from_str(&contents).map_err(|e| {
            SelectionError::Unavailable(format!("cannot parse {}: {e}", self.path.display()))
        })?;

        if self.require_sequence {
            if export.sequence.is_none() {
                return Err(SelectionError::NoActiveSequence);
            }
            if !export.timeline_editor {
                return Err(SelectionError::NoTimelineEditor);
            }
        }
        Ok(export.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_export(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.yaml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_items_in_order() {
        let (_dir, path) = write_export(
            "sequence: edit\nitems:\n  - {name: a, class: TrackItem, path: /x/a.mov}\n  - {name: t, class: Transition}\n",
        );
        let items = SelectionFile::new(&path)
            .requiring_sequence()
            .selected_items()
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].path.as_deref(), Some("/x/a.mov"));
        assert_eq!(items[1].path, None);
    }

    #[test]
    fn accepts_json_exports() {
        let (_dir, path) = write_export(
            r#"{"items": [{"name": "Read1", "class": "Read", "path": "/x/a.exr"}]}"#,
        );
        let items = SelectionFile::new(&path).selected_items().unwrap();
        assert_eq!(items[0].class, "Read");
    }

    #[test]
    fn missing_sequence_is_reported_when_required() {
        let (_dir, path) = write_export("items: []\n");
        let err = SelectionFile::new(&path)
            .requiring_sequence()
            .selected_items()
            .unwrap_err();
        assert_eq!(err, SelectionError::NoActiveSequence);
    }

    #[test]
    fn closed_timeline_editor_is_reported_when_required() {
        let (_dir, path) = write_export("sequence: edit\ntimeline_editor: false\nitems: []\n");
        let err = SelectionFile::new(&path)
            .requiring_sequence()
            .selected_items()
            .unwrap_err();
        assert_eq!(err, SelectionError::NoTimelineEditor);
        assert_eq!(err.to_string(), "No timeline editor available.");
    }

    #[test]
    fn node_graph_exports_ignore_the_editor_flag() {
        let (_dir, path) = write_export("timeline_editor: false\nitems: []\n");
        assert!(SelectionFile::new(&path).selected_items().unwrap().is_empty());
    }

    #[test]
    fn unreadable_export_is_unavailable() {
        let err = SelectionFile::new("/nonexistent/selection.yaml")
            .selected_items()
            .unwrap_err();
        assert!(matches!(err, SelectionError::Unavailable(_)));
    }
}
