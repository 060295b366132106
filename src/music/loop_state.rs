//! Per-guild loop mode storage.
//!
//! Stores the loop policy for each guild independently of its playback session:
//! the policy survives rejoining voice within the process lifetime and is only
//! cleared explicitly when the node reports the player destroyed.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::music::track::Track;

/// Upper bound on the queue-loop played history per guild.
pub const PLAYED_HISTORY_LIMIT: usize = 10;

/// Policy governing whether and how playback repeats.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LoopMode {
    #[default]
    Off,
    Track,
    Queue,
}

impl LoopMode {
    /// Advances to the next mode in the deterministic cycle
    /// off -> track -> queue -> off.
    pub fn next(self) -> Self {
        match self {
            LoopMode::Off => LoopMode::Track,
            LoopMode::Track => LoopMode::Queue,
            LoopMode::Queue => LoopMode::Off,
        }
    }

    /// Parses a user-supplied mode token, accepting the documented synonyms.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "track" | "t" | "song" => Some(LoopMode::Track),
            "queue" | "q" | "all" => Some(LoopMode::Queue),
            "off" | "disable" | "none" => Some(LoopMode::Off),
            _ => None,
        }
    }

    /// Display-friendly string with emoji for status messages.
    pub fn display(&self) -> &'static str {
        match self {
            LoopMode::Track => "🔂 Track Loop",
            LoopMode::Queue => "🔁 Queue Loop",
            LoopMode::Off => "➡️ No Loop",
        }
    }

    /// Wire name used in control calls to the node.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopMode::Off => "off",
            LoopMode::Track => "track",
            LoopMode::Queue => "queue",
        }
    }
}

#[derive(Default)]
struct LoopPolicy {
    mode: LoopMode,
    played: Vec<Track>,
}

/// Per-guild loop policy store.
///
/// Unknown guilds read as `LoopMode::Off` without creating an entry. The
/// played history is only meaningful under queue-loop and is cleared whenever
/// the mode moves away from it.
#[derive(Default)]
pub struct LoopPolicyStore {
    policies: RwLock<HashMap<u64, LoopPolicy>>,
}

impl LoopPolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current loop mode for a guild, defaulting to `Off`.
    pub async fn mode(&self, guild_id: u64) -> LoopMode {
        self.policies
            .read()
            .await
            .get(&guild_id)
            .map(|p| p.mode)
            .unwrap_or_default()
    }

    /// Overwrites the loop mode for a guild.
    ///
    /// Moving to any mode other than `Queue` drops the played history.
    pub async fn set_mode(&self, guild_id: u64, mode: LoopMode) {
        let mut policies = self.policies.write().await;
        let policy = policies.entry(guild_id).or_default();
        policy.mode = mode;

        if mode != LoopMode::Queue {
            policy.played.clear();
        }
    }

    /// Appends a finished track to the guild's played history.
    ///
    /// The history is bounded; the oldest entry is dropped once
    /// [`PLAYED_HISTORY_LIMIT`] is reached. Callable under any mode — the
    /// caller decides when recording is meaningful.
    pub async fn record_played(&self, guild_id: u64, track: Track) {
        let mut policies = self.policies.write().await;
        let policy = policies.entry(guild_id).or_default();

        if policy.played.len() == PLAYED_HISTORY_LIMIT {
            policy.played.remove(0);
        }
        policy.played.push(track);
    }

    /// Returns the played history for a guild, oldest first.
    pub async fn played(&self, guild_id: u64) -> Vec<Track> {
        self.policies
            .read()
            .await
            .get(&guild_id)
            .map(|p| p.played.clone())
            .unwrap_or_default()
    }

    /// Removes the mode and history entirely.
    ///
    /// Called when the node reports the guild's player destroyed so stale
    /// policy doesn't leak into a future session reusing the guild slot.
    pub async fn clear(&self, guild_id: u64) {
        self.policies.write().await.remove(&guild_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::test_support::track;

    /// Tests that unknown guilds read as `Off` without creating state.
    #[tokio::test]
    async fn defaults_to_off_for_unknown_guild() {
        let store = LoopPolicyStore::new();
        assert_eq!(store.mode(1).await, LoopMode::Off);
        assert!(store.played(1).await.is_empty());
    }

    /// Tests the deterministic cycling order off -> track -> queue -> off.
    #[tokio::test]
    async fn cycles_deterministically() {
        let store = LoopPolicyStore::new();

        let mut seen = Vec::new();
        for _ in 0..4 {
            let next = store.mode(42).await.next();
            store.set_mode(42, next).await;
            seen.push(next);
        }

        assert_eq!(
            seen,
            vec![
                LoopMode::Track,
                LoopMode::Queue,
                LoopMode::Off,
                LoopMode::Track
            ]
        );
    }

    /// Tests that leaving queue mode empties the played history.
    #[tokio::test]
    async fn leaving_queue_mode_clears_history() {
        let store = LoopPolicyStore::new();
        store.set_mode(7, LoopMode::Queue).await;
        store.record_played(7, track("a")).await;
        store.record_played(7, track("b")).await;
        assert_eq!(store.played(7).await.len(), 2);

        store.set_mode(7, LoopMode::Track).await;
        assert!(store.played(7).await.is_empty());
    }

    /// Tests that the played history drops its oldest entry at the bound.
    #[tokio::test]
    async fn history_is_bounded() {
        let store = LoopPolicyStore::new();
        store.set_mode(7, LoopMode::Queue).await;

        for i in 0..PLAYED_HISTORY_LIMIT + 3 {
            store.record_played(7, track(&format!("t{}", i))).await;
        }

        let played = store.played(7).await;
        assert_eq!(played.len(), PLAYED_HISTORY_LIMIT);
        assert_eq!(played[0].title, "t3");
    }

    /// Tests that clear removes both mode and history.
    #[tokio::test]
    async fn clear_removes_everything() {
        let store = LoopPolicyStore::new();
        store.set_mode(7, LoopMode::Queue).await;
        store.record_played(7, track("a")).await;

        store.clear(7).await;

        assert_eq!(store.mode(7).await, LoopMode::Off);
        assert!(store.played(7).await.is_empty());
    }

    /// Tests the loop token synonyms accepted by the `loop` command.
    #[test]
    fn parses_mode_synonyms() {
        for token in ["track", "t", "song", "TRACK"] {
            assert_eq!(LoopMode::parse(token), Some(LoopMode::Track));
        }
        for token in ["queue", "q", "all"] {
            assert_eq!(LoopMode::parse(token), Some(LoopMode::Queue));
        }
        for token in ["off", "disable", "none"] {
            assert_eq!(LoopMode::parse(token), Some(LoopMode::Off));
        }
        assert_eq!(LoopMode::parse("forever"), None);
    }
}
