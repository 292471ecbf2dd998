//! Cassettes: recorded port interactions for deterministic replay.
//!
//! A cassette captures every call made through the lookup and filesystem
//! ports during one run, so the same resolution can be replayed later
//! without the storage mount or the lookup service.

pub mod format;
pub mod recorder;
pub mod replayer;
