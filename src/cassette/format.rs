//! Cassette data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single call made through a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (`lookup` or `fs`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Arguments the port was called with.
    pub input: serde_json::Value,
    /// What the port returned.
    pub output: serde_json::Value,
}

/// An ordered recording of port interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Version of `lucidlink` that made the recording.
    pub tool_version: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_hand_written_yaml() {
        let yaml = r#"
name: plate-lookup
recorded_at: 2025-03-15T14:30:00Z
tool_version: 0.1.0
interactions:
  - seq: 0
    port: fs
    method: is_dir
    input: { path: /Volumes/sandwich-post/active_projects/job/plate.mov }
    output: false
  - seq: 1
    port: lookup
    method: find_files
    input: { path: active_projects/job/plate.mov }
    output: { Ok: { files: [ { id: "42" } ] } }
"#;
        let cassette: Cassette = serde_yaml::from_str(yaml).expect("deserialize");
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].output, json!(false));
        assert_eq!(
            cassette.interactions[1].output["Ok"]["files"][0]["id"],
            json!("42")
        );
    }
}
