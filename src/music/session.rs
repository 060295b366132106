//! Guild session registry.
//!
//! Maps a guild to at most one active playback session. Every mutating call
//! awaits the corresponding node control call before the local record changes,
//! so a failed external call leaves the registry untouched.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::music::MusicError;
use crate::music::player::PlayerService;
use crate::music::track::Track;

/// Playback state of a session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Paused,
}

/// One guild's active voice-playback context.
///
/// Invariant: `current` is non-null iff `state` is `Playing` or `Paused`.
#[derive(Debug)]
pub struct Session {
    pub guild_id: u64,
    pub voice_channel_id: u64,
    pub text_channel_id: u64,
    pub queue: VecDeque<Track>,
    pub current: Option<Track>,
    pub state: PlaybackState,
}

impl Session {
    fn new(guild_id: u64, voice_channel_id: u64, text_channel_id: u64) -> Self {
        Self {
            guild_id,
            voice_channel_id,
            text_channel_id,
            queue: VecDeque::new(),
            current: None,
            state: PlaybackState::Idle,
        }
    }
}

/// Registry of active playback sessions, at most one per guild.
///
/// Holds the player capability used for connect/destroy control calls, and
/// hands out per-guild creation locks so concurrent `join`/`play` commands
/// cannot race the check-then-create sequence into two sessions.
pub struct SessionRegistry {
    player: Arc<dyn PlayerService>,
    sessions: Mutex<HashMap<u64, Arc<Mutex<Session>>>>,
    creation_locks: Mutex<HashMap<u64, Arc<Mutex<()>>>>,
}

impl SessionRegistry {
    pub fn new(player: Arc<dyn PlayerService>) -> Self {
        Self {
            player,
            sessions: Mutex::new(HashMap::new()),
            creation_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The player capability shared by all sessions.
    pub fn player(&self) -> &Arc<dyn PlayerService> {
        &self.player
    }

    /// Returns the per-guild lock guarding check-then-create sequences.
    ///
    /// Callers that look up a session and create it when absent must hold
    /// this lock across both steps.
    pub async fn guild_lock(&self, guild_id: u64) -> Arc<Mutex<()>> {
        self.creation_locks
            .lock()
            .await
            .entry(guild_id)
            .or_default()
            .clone()
    }

    /// Creates a session for a guild and connects the node-side player.
    ///
    /// Fails with `AlreadyConnected` if a session already exists. The connect
    /// control call is awaited first; on failure no session is created.
    pub async fn create(
        &self,
        guild_id: u64,
        voice_channel_id: u64,
        text_channel_id: u64,
    ) -> Result<Arc<Mutex<Session>>, MusicError> {
        if self.sessions.lock().await.contains_key(&guild_id) {
            return Err(MusicError::AlreadyConnected);
        }

        self.player.connect(guild_id, voice_channel_id).await?;

        let session = Arc::new(Mutex::new(Session::new(
            guild_id,
            voice_channel_id,
            text_channel_id,
        )));
        self.sessions.lock().await.insert(guild_id, session.clone());

        Ok(session)
    }

    /// Pure lookup, no side effects.
    pub async fn get(&self, guild_id: u64) -> Option<Arc<Mutex<Session>>> {
        self.sessions.lock().await.get(&guild_id).cloned()
    }

    /// Tears down the node-side player and removes the session.
    ///
    /// Idempotent: returns `Ok(false)` when no session exists. The destroy
    /// control call is awaited first; on failure the session is kept.
    pub async fn destroy(&self, guild_id: u64) -> Result<bool, MusicError> {
        if !self.sessions.lock().await.contains_key(&guild_id) {
            return Ok(false);
        }

        self.player.destroy(guild_id).await?;

        self.sessions.lock().await.remove(&guild_id);
        Ok(true)
    }

    /// Drops the local session record without a destroy control call.
    ///
    /// Used when the node has already reported the player gone; issuing a
    /// destroy against a dead player would fail and strand the record.
    pub async fn remove(&self, guild_id: u64) -> bool {
        self.sessions.lock().await.remove(&guild_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::test_support::FakePlayer;

    /// Tests that create connects the node player and registers the session.
    #[tokio::test]
    async fn create_registers_session() {
        let player = Arc::new(FakePlayer::new());
        let registry = SessionRegistry::new(player.clone());

        let session = registry.create(1, 10, 20).await.unwrap();
        let session = session.lock().await;

        assert_eq!(session.guild_id, 1);
        assert_eq!(session.voice_channel_id, 10);
        assert_eq!(session.state, PlaybackState::Idle);
        assert!(session.current.is_none());
        assert_eq!(player.calls().await, vec!["connect:1".to_string()]);
    }

    /// Tests that a second create for the same guild is rejected.
    #[tokio::test]
    async fn create_rejects_duplicate_guild() {
        let registry = SessionRegistry::new(Arc::new(FakePlayer::new()));

        registry.create(1, 10, 20).await.unwrap();
        let second = registry.create(1, 11, 21).await;

        assert!(matches!(second, Err(MusicError::AlreadyConnected)));
    }

    /// Tests that a failed connect call leaves no session behind.
    #[tokio::test]
    async fn create_rolls_back_on_connect_failure() {
        let player = Arc::new(FakePlayer::new());
        player.fail_next("connect").await;
        let registry = SessionRegistry::new(player);

        let result = registry.create(1, 10, 20).await;

        assert!(matches!(result, Err(MusicError::Player(_))));
        assert!(registry.get(1).await.is_none());
    }

    /// Tests that destroy is idempotent for absent guilds.
    #[tokio::test]
    async fn destroy_is_idempotent() {
        let player = Arc::new(FakePlayer::new());
        let registry = SessionRegistry::new(player.clone());

        assert!(!registry.destroy(1).await.unwrap());

        registry.create(1, 10, 20).await.unwrap();
        assert!(registry.destroy(1).await.unwrap());
        assert!(registry.get(1).await.is_none());
        assert_eq!(
            player.calls().await,
            vec!["connect:1".to_string(), "destroy:1".to_string()]
        );
    }

    /// Tests that a failed destroy call keeps the session registered.
    #[tokio::test]
    async fn destroy_keeps_session_on_failure() {
        let player = Arc::new(FakePlayer::new());
        let registry = SessionRegistry::new(player.clone());
        registry.create(1, 10, 20).await.unwrap();

        player.fail_next("destroy").await;
        let result = registry.destroy(1).await;

        assert!(matches!(result, Err(MusicError::Player(_))));
        assert!(registry.get(1).await.is_some());
    }

    /// Tests that concurrent check-then-create sequences holding the guild
    /// lock produce exactly one session.
    #[tokio::test]
    async fn guild_lock_serializes_creation() {
        let registry = Arc::new(SessionRegistry::new(Arc::new(FakePlayer::new())));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                let lock = registry.guild_lock(1).await;
                let _guard = lock.lock().await;
                match registry.get(1).await {
                    Some(_) => false,
                    None => registry.create(1, 10, 20).await.is_ok(),
                }
            }));
        }

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert!(registry.get(1).await.is_some());
    }
}
