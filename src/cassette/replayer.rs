//! Replays recorded interactions from a cassette.

use std::collections::{BTreeMap, VecDeque};
use std::path::Path;

use super::format::{Cassette, Interaction};

/// Pending interactions for one `port::method` stream.
#[derive(Debug, Default)]
struct Stream {
    pending: VecDeque<Interaction>,
    served: usize,
    last_seq: Option<u64>,
}

/// Serves interactions from a loaded cassette.
///
/// Each `port::method` pair is an independent FIFO stream, so the order of
/// calls across ports does not have to match the recording.
#[derive(Debug, Default)]
pub struct CassetteReplayer {
    streams: BTreeMap<String, Stream>,
}

fn stream_key(port: &str, method: &str) -> String {
    format!("{port}::{method}")
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut streams: BTreeMap<String, Stream> = BTreeMap::new();
        for interaction in &cassette.interactions {
            let key = stream_key(&interaction.port, &interaction.method);
            streams
                .entry(key)
                .or_default()
                .pending
                .push_back(interaction.clone());
        }
        Self { streams }
    }

    /// Load a cassette YAML file and build a replayer for it.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(Self::new(&cassette))
    }

    /// Number of interactions not yet served, across every stream.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.streams.values().map(|s| s.pending.len()).sum()
    }

    /// Take the next interaction recorded for `port` and `method`.
    ///
    /// # Panics
    ///
    /// Panics when the stream was never recorded or has been drained; a
    /// replay that asks for more than was recorded has diverged.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = stream_key(port, method);
        let Some(stream) = self.streams.get_mut(&key) else {
            let known: Vec<&str> = self.streams.keys().map(String::as_str).collect();
            panic!(
                "Cassette exhausted: no interactions recorded for {key}; recorded streams: [{}]",
                known.join(", ")
            );
        };

        match stream.pending.pop_front() {
            Some(interaction) => {
                stream.served += 1;
                stream.last_seq = Some(interaction.seq);
                interaction
            }
            None => panic!(
                "Cassette exhausted: {key} already served {} interaction(s), last seq={:?}",
                stream.served, stream.last_seq
            ),
        }
    }
}
