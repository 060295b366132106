//! Consumer of the audio node's lifecycle event stream.
//!
//! Events arrive in order on an mpsc channel and are handled one at a time.
//! Each handler is defensive: a missing session or a failed follow-up control
//! call is logged and dropped so one guild's trouble never halts notification
//! processing for the others.

use std::sync::Arc;

use serenity::async_trait;
use tokio::sync::mpsc;

use crate::music::events::PlayerEvent;
use crate::music::loop_state::{LoopMode, LoopPolicyStore};
use crate::music::ops;
use crate::music::session::{PlaybackState, SessionRegistry};
use crate::music::track::Track;

/// Sink for user-facing status messages.
///
/// The production implementation posts to the session's notification channel
/// through the Discord HTTP client; tests record messages instead.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, channel_id: u64, message: &str);
}

/// Single consumer updating session and loop-policy state from node events.
pub struct EventReactor {
    registry: Arc<SessionRegistry>,
    loop_store: Arc<LoopPolicyStore>,
    notifier: Arc<dyn Notifier>,
}

impl EventReactor {
    pub fn new(
        registry: Arc<SessionRegistry>,
        loop_store: Arc<LoopPolicyStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            registry,
            loop_store,
            notifier,
        }
    }

    /// Drains the event channel until every sender is dropped.
    pub async fn run(self, mut events: mpsc::Receiver<PlayerEvent>) {
        while let Some(event) = events.recv().await {
            self.handle(event).await;
        }
        tracing::info!("Audio node event channel closed, reactor stopping");
    }

    /// Applies a single event to local state.
    pub async fn handle(&self, event: PlayerEvent) {
        match event {
            PlayerEvent::TrackStart { guild_id, track } => {
                self.on_track_start(guild_id, track).await;
            }
            PlayerEvent::TrackEnd { guild_id, track } => {
                self.on_track_end(guild_id, track).await;
            }
            PlayerEvent::TrackError {
                guild_id,
                track,
                error,
            } => {
                self.on_track_error(guild_id, track, error).await;
            }
            PlayerEvent::TrackStuck {
                guild_id,
                track,
                threshold_ms,
            } => {
                self.on_track_stuck(guild_id, track, threshold_ms).await;
            }
            PlayerEvent::QueueEnd { guild_id } => {
                self.on_queue_end(guild_id).await;
            }
            PlayerEvent::PlayerMove {
                guild_id,
                channel_id,
            } => {
                self.on_player_move(guild_id, channel_id).await;
            }
            PlayerEvent::PlayerDestroy { guild_id, reason } => {
                self.on_player_destroy(guild_id, reason).await;
            }
            PlayerEvent::NodeConnect { node } => {
                tracing::info!("Audio node \"{}\" connected", node);
            }
            PlayerEvent::NodeDisconnect { node, reason } => {
                tracing::warn!(
                    "Audio node \"{}\" disconnected: {}",
                    node,
                    reason.as_deref().unwrap_or("unknown reason")
                );
            }
            PlayerEvent::NodeError { node, error } => {
                tracing::error!("Audio node \"{}\" error: {}", node, error);
            }
        }
    }

    /// Announces the track and syncs the local queue with the node's
    /// progression.
    async fn on_track_start(&self, guild_id: u64, track: Track) {
        let Some(session) = self.registry.get(guild_id).await else {
            tracing::debug!("Track started for guild {} without a session", guild_id);
            return;
        };

        let text_channel_id = {
            let mut session = session.lock().await;
            if session.queue.front() == Some(&track) {
                session.queue.pop_front();
            }
            session.current = Some(track.clone());
            session.state = PlaybackState::Playing;
            session.text_channel_id
        };

        self.notifier
            .notify(
                text_channel_id,
                &format!("🎵 Now playing: **{}** by **{}**", track.title, track.artist),
            )
            .await;
    }

    /// Records queue-loop history. Loop continuation itself is the node's
    /// job via its repeat mode, so no re-enqueueing happens here.
    async fn on_track_end(&self, guild_id: u64, track: Track) {
        if self.loop_store.mode(guild_id).await == LoopMode::Queue {
            self.loop_store.record_played(guild_id, track).await;
            tracing::debug!(
                "Track ended in guild {} ({} in queue-loop history)",
                guild_id,
                self.loop_store.played(guild_id).await.len()
            );
        } else {
            tracing::debug!("Track ended in guild {}", guild_id);
        }
    }

    /// Announces the failure; the session survives.
    async fn on_track_error(&self, guild_id: u64, track: Option<Track>, error: String) {
        tracing::error!("Track error in guild {}: {}", guild_id, error);

        let Some(session) = self.registry.get(guild_id).await else {
            return;
        };
        let text_channel_id = session.lock().await.text_channel_id;

        let title = track
            .map(|t| format!("**{}**", t.title))
            .unwrap_or_else(|| "the current track".to_string());
        self.notifier
            .notify(
                text_channel_id,
                &format!("❌ There was an error playing {}: {}", title, error),
            )
            .await;
    }

    /// Announces and recovers by skipping the stuck track.
    async fn on_track_stuck(&self, guild_id: u64, track: Option<Track>, threshold_ms: u64) {
        tracing::warn!(
            "Track stuck in guild {} past {}ms threshold",
            guild_id,
            threshold_ms
        );

        let Some(session) = self.registry.get(guild_id).await else {
            return;
        };
        let text_channel_id = session.lock().await.text_channel_id;

        let title = track
            .map(|t| format!("**{}**", t.title))
            .unwrap_or_else(|| "The current track".to_string());
        self.notifier
            .notify(
                text_channel_id,
                &format!("⚠️ {} got stuck - skipping it.", title),
            )
            .await;

        if let Err(e) = ops::skip(&self.registry, guild_id).await {
            tracing::error!("Failed to skip stuck track in guild {}: {}", guild_id, e);
        }
    }

    /// Announces the idle timeout; the node's empty-queue timer owns the
    /// actual teardown.
    async fn on_queue_end(&self, guild_id: u64) {
        let Some(session) = self.registry.get(guild_id).await else {
            return;
        };

        let text_channel_id = {
            let mut session = session.lock().await;
            session.current = None;
            session.state = PlaybackState::Idle;
            session.text_channel_id
        };

        self.notifier
            .notify(
                text_channel_id,
                "✅ Queue finished! Add more songs or I'll leave in 5 minutes.",
            )
            .await;
    }

    /// Keeps local state consistent with the actual voice connection.
    async fn on_player_move(&self, guild_id: u64, channel_id: Option<u64>) {
        match channel_id {
            Some(channel_id) => {
                if let Some(session) = self.registry.get(guild_id).await {
                    session.lock().await.voice_channel_id = channel_id;
                }
            }
            None => {
                // Force-disconnected externally; tear the session down.
                match self.registry.destroy(guild_id).await {
                    Ok(true) => {
                        tracing::info!("Session for guild {} destroyed after disconnect", guild_id)
                    }
                    Ok(false) => {}
                    Err(e) => tracing::error!(
                        "Failed to destroy session for guild {} after disconnect: {}",
                        guild_id,
                        e
                    ),
                }
            }
        }
    }

    /// Ties loop-policy lifetime to session lifetime.
    async fn on_player_destroy(&self, guild_id: u64, reason: Option<String>) {
        tracing::info!(
            "Player destroyed in guild {}: {}",
            guild_id,
            reason.as_deref().unwrap_or("no reason given")
        );

        // The node-side player is already gone; only local records remain.
        self.registry.remove(guild_id).await;
        self.loop_store.clear(guild_id).await;
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::Mutex;

    use super::*;
    use crate::error::music::MusicError;
    use crate::music::player::SearchLoad;
    use crate::music::test_support::{track, FakePlayer};

    const GUILD: u64 = 5;
    const VOICE: u64 = 50;
    const TEXT: u64 = 500;

    struct RecordingNotifier {
        messages: Mutex<Vec<(u64, String)>>,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                messages: Mutex::new(Vec::new()),
            }
        }

        async fn messages(&self) -> Vec<(u64, String)> {
            self.messages.lock().await.clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, channel_id: u64, message: &str) {
            self.messages
                .lock()
                .await
                .push((channel_id, message.to_string()));
        }
    }

    struct Fixture {
        player: Arc<FakePlayer>,
        registry: Arc<SessionRegistry>,
        loop_store: Arc<LoopPolicyStore>,
        notifier: Arc<RecordingNotifier>,
        reactor: EventReactor,
    }

    fn fixture() -> Fixture {
        let player = Arc::new(FakePlayer::new());
        let registry = Arc::new(SessionRegistry::new(player.clone()));
        let loop_store = Arc::new(LoopPolicyStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let reactor = EventReactor::new(registry.clone(), loop_store.clone(), notifier.clone());
        Fixture {
            player,
            registry,
            loop_store,
            notifier,
            reactor,
        }
    }

    /// Starts a session playing the given titles, first title current.
    async fn playing(f: &Fixture, titles: &[&str]) {
        let tracks: Vec<_> = titles.iter().map(|t| track(t)).collect();
        f.player
            .push_search(SearchLoad::Playlist {
                name: "Setup".to_string(),
                tracks,
            })
            .await;
        ops::play(&f.registry, GUILD, Some(VOICE), TEXT, "setup", 99)
            .await
            .unwrap();
    }

    /// Tests that trackStart announces in the session's text channel and
    /// syncs the local queue head.
    #[tokio::test]
    async fn track_start_announces_and_syncs() {
        let f = fixture();
        playing(&f, &["a", "b"]).await;

        f.reactor
            .handle(PlayerEvent::TrackStart {
                guild_id: GUILD,
                track: track("b"),
            })
            .await;

        let session = f.registry.get(GUILD).await.unwrap();
        let session = session.lock().await;
        assert_eq!(session.current, Some(track("b")));
        assert!(session.queue.is_empty());
        assert_eq!(
            f.notifier.messages().await,
            vec![(TEXT, "🎵 Now playing: **b** by **Artist**".to_string())]
        );
    }

    /// Tests that trackStart for a guild without a session is dropped
    /// silently.
    #[tokio::test]
    async fn track_start_without_session_is_ignored() {
        let f = fixture();

        f.reactor
            .handle(PlayerEvent::TrackStart {
                guild_id: GUILD,
                track: track("a"),
            })
            .await;

        assert!(f.notifier.messages().await.is_empty());
    }

    /// Tests that trackEnd records history only under queue loop and never
    /// issues an enqueue control call of its own.
    #[tokio::test]
    async fn track_end_records_history_under_queue_loop_only() {
        let f = fixture();
        playing(&f, &["a"]).await;
        let calls_before = f.player.calls().await.len();

        f.reactor
            .handle(PlayerEvent::TrackEnd {
                guild_id: GUILD,
                track: track("a"),
            })
            .await;
        assert!(f.loop_store.played(GUILD).await.is_empty());

        f.loop_store.set_mode(GUILD, LoopMode::Queue).await;
        for _ in 0..3 {
            f.reactor
                .handle(PlayerEvent::TrackEnd {
                    guild_id: GUILD,
                    track: track("a"),
                })
                .await;
        }

        assert_eq!(f.loop_store.played(GUILD).await.len(), 3);
        // Loop continuation is the node's job: no control calls were issued.
        assert_eq!(f.player.calls().await.len(), calls_before);
    }

    /// Tests that trackError announces but keeps the session.
    #[tokio::test]
    async fn track_error_keeps_session() {
        let f = fixture();
        playing(&f, &["a"]).await;

        f.reactor
            .handle(PlayerEvent::TrackError {
                guild_id: GUILD,
                track: Some(track("a")),
                error: "decoder blew up".to_string(),
            })
            .await;

        assert!(f.registry.get(GUILD).await.is_some());
        let messages = f.notifier.messages().await;
        assert_eq!(messages.len(), 1);
        assert!(messages[0].1.contains("decoder blew up"));
    }

    /// Tests that trackStuck announces and issues exactly one skip control
    /// call.
    #[tokio::test]
    async fn track_stuck_skips_exactly_once() {
        let f = fixture();
        playing(&f, &["a", "b"]).await;

        f.reactor
            .handle(PlayerEvent::TrackStuck {
                guild_id: GUILD,
                track: Some(track("a")),
                threshold_ms: 10_000,
            })
            .await;

        assert_eq!(f.player.call_count("skip").await, 1);
        let session = f.registry.get(GUILD).await.unwrap();
        assert_eq!(session.lock().await.current, Some(track("b")));
        let messages = f.notifier.messages().await;
        assert_eq!(messages.len(), 1);
        assert!(messages[0].1.contains("stuck"));
    }

    /// Tests that queueEnd idles the session and announces the impending
    /// timeout without destroying anything.
    #[tokio::test]
    async fn queue_end_idles_session() {
        let f = fixture();
        playing(&f, &["a"]).await;

        f.reactor
            .handle(PlayerEvent::QueueEnd { guild_id: GUILD })
            .await;

        let session = f.registry.get(GUILD).await.unwrap();
        {
            let session = session.lock().await;
            assert_eq!(session.state, PlaybackState::Idle);
            assert!(session.current.is_none());
        }
        let messages = f.notifier.messages().await;
        assert!(messages[0].1.contains("Queue finished"));
    }

    /// Tests that playerMove with a null destination destroys the session
    /// and a later queue command has nothing to show.
    #[tokio::test]
    async fn player_move_to_nowhere_destroys_session() {
        let f = fixture();
        playing(&f, &["a"]).await;

        f.reactor
            .handle(PlayerEvent::PlayerMove {
                guild_id: GUILD,
                channel_id: None,
            })
            .await;

        assert!(f.registry.get(GUILD).await.is_none());
        let view = ops::queue_view(&f.registry, &f.loop_store, GUILD).await;
        assert!(matches!(view, Err(MusicError::NothingPlaying)));
    }

    /// Tests that playerMove with a destination only updates the voice
    /// channel.
    #[tokio::test]
    async fn player_move_updates_voice_channel() {
        let f = fixture();
        playing(&f, &["a"]).await;

        f.reactor
            .handle(PlayerEvent::PlayerMove {
                guild_id: GUILD,
                channel_id: Some(51),
            })
            .await;

        let session = f.registry.get(GUILD).await.unwrap();
        assert_eq!(session.lock().await.voice_channel_id, 51);
    }

    /// Tests that playerDestroy drops the local record and the loop policy
    /// without issuing another destroy control call.
    #[tokio::test]
    async fn player_destroy_clears_loop_policy() {
        let f = fixture();
        playing(&f, &["a"]).await;
        f.loop_store.set_mode(GUILD, LoopMode::Queue).await;

        f.reactor
            .handle(PlayerEvent::PlayerDestroy {
                guild_id: GUILD,
                reason: Some("idle timeout".to_string()),
            })
            .await;

        assert!(f.registry.get(GUILD).await.is_none());
        assert_eq!(f.loop_store.mode(GUILD).await, LoopMode::Off);
        assert_eq!(f.player.call_count("destroy").await, 0);
    }

    /// Tests that node-level events take no session-level action.
    #[tokio::test]
    async fn node_events_are_logged_only() {
        let f = fixture();
        playing(&f, &["a"]).await;
        let calls_before = f.player.calls().await.len();

        f.reactor
            .handle(PlayerEvent::NodeConnect {
                node: "main".to_string(),
            })
            .await;
        f.reactor
            .handle(PlayerEvent::NodeDisconnect {
                node: "main".to_string(),
                reason: None,
            })
            .await;
        f.reactor
            .handle(PlayerEvent::NodeError {
                node: "main".to_string(),
                error: "socket reset".to_string(),
            })
            .await;

        assert!(f.registry.get(GUILD).await.is_some());
        assert_eq!(f.player.calls().await.len(), calls_before);
        assert!(f.notifier.messages().await.is_empty());
    }
}
