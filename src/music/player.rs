use serenity::async_trait;
use thiserror::Error;

use crate::music::loop_state::LoopMode;
use crate::music::track::Track;

/// Error from a control call to the external audio node.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// The node could not be reached or the request failed in transit.
    #[error("audio node request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node answered but rejected the call.
    #[error("audio node rejected the call ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Result of resolving a free-text query against the node's search capability.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchLoad {
    /// Nothing matched the query.
    Empty,
    /// A single best match.
    Track(Track),
    /// A multi-track collection, enqueued as a whole.
    Playlist { name: String, tracks: Vec<Track> },
}

/// Control surface of the external player capability.
///
/// The node owns transport, decoding, and playback progression (including
/// repeat-mode continuation); the bot only issues these control calls and
/// consumes the node's lifecycle event stream. Implemented over REST by
/// [`crate::music::node::RestNode`] and by a scripted fake in tests.
#[async_trait]
pub trait PlayerService: Send + Sync {
    /// Establishes the node-side player for a guild and joins the voice channel.
    async fn connect(&self, guild_id: u64, channel_id: u64) -> Result<(), PlayerError>;

    /// Tears down the node-side player and leaves the voice channel.
    async fn destroy(&self, guild_id: u64) -> Result<(), PlayerError>;

    /// Resolves a free-text query into zero, one, or a collection of tracks.
    async fn search(&self, query: &str, requester_id: u64) -> Result<SearchLoad, PlayerError>;

    /// Appends tracks to the node-side queue without interrupting playback.
    async fn enqueue(&self, guild_id: u64, tracks: &[Track]) -> Result<(), PlayerError>;

    /// Starts playback of the queue head if the player is idle.
    async fn play(&self, guild_id: u64) -> Result<(), PlayerError>;

    async fn pause(&self, guild_id: u64) -> Result<(), PlayerError>;

    async fn resume(&self, guild_id: u64) -> Result<(), PlayerError>;

    /// Advances to the next queued track, or halts if none remain.
    async fn skip(&self, guild_id: u64) -> Result<(), PlayerError>;

    /// Halts playback and clears the node-side queue.
    async fn stop(&self, guild_id: u64) -> Result<(), PlayerError>;

    /// Sets the node's repeat mode; loop continuation is driven entirely by
    /// the node once set, never re-derived per track by the bot.
    async fn set_repeat_mode(&self, guild_id: u64, mode: LoopMode) -> Result<(), PlayerError>;
}
