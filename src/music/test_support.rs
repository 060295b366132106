//! Scripted player capability for exercising the music core without a node.

use std::collections::VecDeque;

use serenity::async_trait;
use tokio::sync::Mutex;

use crate::music::loop_state::LoopMode;
use crate::music::player::{PlayerError, PlayerService, SearchLoad};
use crate::music::track::Track;

/// Builds a track with recognizable metadata for assertions.
pub fn track(title: &str) -> Track {
    Track {
        title: title.to_string(),
        artist: "Artist".to_string(),
        duration_ms: 180_000,
        source_uri: format!("https://tracks.example/{}", title),
        requester_id: 99,
    }
}

/// Fake player recording every control call in order.
///
/// `fail_next` arms a one-shot rejection for the named operation so tests can
/// verify that failed control calls leave local state untouched. Search
/// results are scripted with `push_search` and consumed in FIFO order;
/// unscripted searches resolve to `SearchLoad::Empty`.
pub struct FakePlayer {
    calls: Mutex<Vec<String>>,
    fail_next: Mutex<Option<String>>,
    search_results: Mutex<VecDeque<SearchLoad>>,
}

impl FakePlayer {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
            search_results: Mutex::new(VecDeque::new()),
        }
    }

    /// All control calls issued so far, formatted as `op:guild[:detail]`.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    /// Number of issued calls for one operation.
    pub async fn call_count(&self, op: &str) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|c| c.starts_with(op))
            .count()
    }

    /// Arms a one-shot rejection for the named operation.
    pub async fn fail_next(&self, op: &str) {
        *self.fail_next.lock().await = Some(op.to_string());
    }

    /// Scripts the result of the next search call.
    pub async fn push_search(&self, load: SearchLoad) {
        self.search_results.lock().await.push_back(load);
    }

    async fn record(&self, op: &str, entry: String) -> Result<(), PlayerError> {
        let mut fail = self.fail_next.lock().await;
        if fail.as_deref() == Some(op) {
            *fail = None;
            return Err(PlayerError::Rejected {
                status: 500,
                message: format!("scripted {} failure", op),
            });
        }
        drop(fail);

        self.calls.lock().await.push(entry);
        Ok(())
    }
}

#[async_trait]
impl PlayerService for FakePlayer {
    async fn connect(&self, guild_id: u64, _channel_id: u64) -> Result<(), PlayerError> {
        self.record("connect", format!("connect:{}", guild_id)).await
    }

    async fn destroy(&self, guild_id: u64) -> Result<(), PlayerError> {
        self.record("destroy", format!("destroy:{}", guild_id)).await
    }

    async fn search(&self, query: &str, _requester_id: u64) -> Result<SearchLoad, PlayerError> {
        self.record("search", format!("search:{}", query)).await?;
        Ok(self
            .search_results
            .lock()
            .await
            .pop_front()
            .unwrap_or(SearchLoad::Empty))
    }

    async fn enqueue(&self, guild_id: u64, tracks: &[Track]) -> Result<(), PlayerError> {
        self.record("enqueue", format!("enqueue:{}:{}", guild_id, tracks.len()))
            .await
    }

    async fn play(&self, guild_id: u64) -> Result<(), PlayerError> {
        self.record("play", format!("play:{}", guild_id)).await
    }

    async fn pause(&self, guild_id: u64) -> Result<(), PlayerError> {
        self.record("pause", format!("pause:{}", guild_id)).await
    }

    async fn resume(&self, guild_id: u64) -> Result<(), PlayerError> {
        self.record("resume", format!("resume:{}", guild_id)).await
    }

    async fn skip(&self, guild_id: u64) -> Result<(), PlayerError> {
        self.record("skip", format!("skip:{}", guild_id)).await
    }

    async fn stop(&self, guild_id: u64) -> Result<(), PlayerError> {
        self.record("stop", format!("stop:{}", guild_id)).await
    }

    async fn set_repeat_mode(&self, guild_id: u64, mode: LoopMode) -> Result<(), PlayerError> {
        self.record("repeat", format!("repeat:{}:{}", guild_id, mode.as_str()))
            .await
    }
}
