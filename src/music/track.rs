use serde::{Deserialize, Serialize};

/// One playable audio item with metadata.
///
/// Immutable once enqueued; identity is positional (its place in the queue),
/// not a stable key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub duration_ms: u64,
    pub source_uri: String,
    pub requester_id: u64,
}
