//! Replaying adapters that serve recorded interactions.
//!
//! A single [`CassetteReplayer`] is shared between the ports so one cassette
//! file drives a whole resolution run.

pub mod filesystem;
pub mod lookup;

pub use filesystem::ReplayingFileSystem;
pub use lookup::ReplayingLookupClient;

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::lookup::LookupResult;

/// Shared handle to the replayer every replaying adapter reads from.
pub type SharedReplayer = Arc<Mutex<CassetteReplayer>>;

/// Take the output of the next recorded `port::method` interaction.
///
/// # Panics
///
/// Panics if the cassette has no more interactions for the pair.
pub(crate) fn next_output(
    replayer: &SharedReplayer,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method).output
}

/// Decode a recorded `{"Ok": v}` / `{"Err": "message"}` output.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
    context: &str,
) -> LookupResult<T> {
    if let Some(err) = output.get("Err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("Ok").cloned().unwrap_or(output);
    serde_json::from_value(value)
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::replay_result;

    #[test]
    fn err_outputs_become_errors() {
        let result: Result<Vec<String>, _> = replay_result(
            json!({"Err": "connection refused"}),
            "lookup::list_directory",
        );
        assert_eq!(result.unwrap_err().to_string(), "connection refused");
    }

    #[test]
    fn bare_outputs_are_treated_as_ok() {
        let result: Vec<u32> = replay_result(json!([1, 2]), "test").unwrap();
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn mismatched_shapes_are_errors() {
        let result: Result<Vec<u32>, _> = replay_result(json!({"Ok": "nope"}), "test");
        assert!(result
            .unwrap_err()
            .to_string()
            .starts_with("test: failed to deserialize"));
    }
}
