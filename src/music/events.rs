use serde::{Deserialize, Serialize};

use crate::music::track::Track;

/// Lifecycle notification from the external audio node.
///
/// A closed union: the reactor switches over every case, and unknown payloads
/// are rejected at the intake boundary rather than dispatched dynamically.
/// Guild-scoped events drive session and loop-policy state; node-scoped events
/// are infrastructure health signals and are only logged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlayerEvent {
    TrackStart {
        guild_id: u64,
        track: Track,
    },
    TrackEnd {
        guild_id: u64,
        track: Track,
    },
    TrackError {
        guild_id: u64,
        track: Option<Track>,
        error: String,
    },
    /// The node made no playback progress past the stuck threshold.
    TrackStuck {
        guild_id: u64,
        track: Option<Track>,
        threshold_ms: u64,
    },
    QueueEnd {
        guild_id: u64,
    },
    /// The player was moved between voice channels; a null destination means
    /// an external force-disconnect.
    PlayerMove {
        guild_id: u64,
        channel_id: Option<u64>,
    },
    PlayerDestroy {
        guild_id: u64,
        reason: Option<String>,
    },
    NodeConnect {
        node: String,
    },
    NodeDisconnect {
        node: String,
        reason: Option<String>,
    },
    NodeError {
        node: String,
        error: String,
    },
}
