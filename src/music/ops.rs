//! Playback operations dispatched by the command router.
//!
//! Each operation is a short transactional procedure over the session registry
//! and loop policy store: the external control call is awaited first, and only
//! on success is local state mutated, so a failed call leaves both untouched.
//! Operations return structured outcomes; rendering them into replies is the
//! command layer's job.

use crate::error::music::MusicError;
use crate::music::loop_state::{LoopMode, LoopPolicyStore};
use crate::music::player::{PlayerService, SearchLoad};
use crate::music::session::{PlaybackState, SessionRegistry};
use crate::music::track::Track;

/// Maximum number of upcoming tracks shown by the queue command.
pub const UPCOMING_LIMIT: usize = 10;

/// What `play` did with the search result.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayOutcome {
    /// A single track was enqueued.
    Track(Track),
    /// A whole playlist was enqueued.
    Playlist { name: String, count: usize },
}

/// How `skip` resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum SkipOutcome {
    /// The next queued track took over.
    Advanced { skipped: Track, current: Track },
    /// The trailing queue was empty; playback was halted like a stop.
    Drained { skipped: Track },
}

/// Read-only snapshot rendered by the queue command.
#[derive(Clone, Debug, PartialEq)]
pub struct QueueView {
    pub mode: LoopMode,
    pub current: Option<Track>,
    pub upcoming: Vec<Track>,
    pub remaining: usize,
}

impl QueueView {
    /// True when nothing is playing and nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.upcoming.is_empty()
    }
}

/// Creates a session for the requester's voice channel.
pub async fn join(
    registry: &SessionRegistry,
    guild_id: u64,
    voice_channel_id: Option<u64>,
    text_channel_id: u64,
) -> Result<(), MusicError> {
    let voice_channel_id = voice_channel_id.ok_or(MusicError::NoVoiceChannel)?;

    let lock = registry.guild_lock(guild_id).await;
    let _guard = lock.lock().await;

    registry
        .create(guild_id, voice_channel_id, text_channel_id)
        .await?;
    Ok(())
}

/// Destroys the guild's session.
pub async fn leave(registry: &SessionRegistry, guild_id: u64) -> Result<(), MusicError> {
    if !registry.destroy(guild_id).await? {
        return Err(MusicError::NotConnected);
    }
    Ok(())
}

/// Resolves a query and enqueues the result, starting playback when idle.
///
/// Creates the session first if none exists. Enqueueing never interrupts an
/// in-progress or paused track; only an idle session starts the queue head.
pub async fn play(
    registry: &SessionRegistry,
    guild_id: u64,
    voice_channel_id: Option<u64>,
    text_channel_id: u64,
    query: &str,
    requester_id: u64,
) -> Result<PlayOutcome, MusicError> {
    let voice_channel_id = voice_channel_id.ok_or(MusicError::NoVoiceChannel)?;

    let query = query.trim();
    if query.is_empty() {
        return Err(MusicError::EmptyQuery);
    }

    let lock = registry.guild_lock(guild_id).await;
    let _guard = lock.lock().await;

    let session = match registry.get(guild_id).await {
        Some(session) => session,
        None => {
            registry
                .create(guild_id, voice_channel_id, text_channel_id)
                .await?
        }
    };

    let (outcome, tracks) = match registry.player().search(query, requester_id).await? {
        SearchLoad::Empty => return Err(MusicError::NoResults),
        SearchLoad::Track(track) => (PlayOutcome::Track(track.clone()), vec![track]),
        SearchLoad::Playlist { name, tracks } => {
            if tracks.is_empty() {
                return Err(MusicError::NoResults);
            }
            let count = tracks.len();
            (PlayOutcome::Playlist { name, count }, tracks)
        }
    };

    registry.player().enqueue(guild_id, &tracks).await?;

    let mut session = session.lock().await;
    session.queue.extend(tracks);

    if session.state == PlaybackState::Idle {
        registry.player().play(guild_id).await?;
        if let Some(head) = session.queue.pop_front() {
            session.current = Some(head);
            session.state = PlaybackState::Playing;
        }
    }

    Ok(outcome)
}

/// Advances past the current track.
///
/// With an empty trailing queue the operation degrades to a full stop instead
/// of leaving a dangling skip-with-nothing-to-play state.
pub async fn skip(registry: &SessionRegistry, guild_id: u64) -> Result<SkipOutcome, MusicError> {
    let session = registry
        .get(guild_id)
        .await
        .ok_or(MusicError::NothingPlaying)?;
    let mut session = session.lock().await;

    let skipped = session
        .current
        .clone()
        .ok_or(MusicError::NothingPlaying)?;

    if session.queue.is_empty() {
        registry.player().stop(guild_id).await?;
        session.current = None;
        session.state = PlaybackState::Idle;
        return Ok(SkipOutcome::Drained { skipped });
    }

    registry.player().skip(guild_id).await?;
    session.current = session.queue.pop_front();
    session.state = PlaybackState::Playing;

    match session.current.clone() {
        Some(current) => Ok(SkipOutcome::Advanced { skipped, current }),
        None => Ok(SkipOutcome::Drained { skipped }),
    }
}

/// Halts playback and clears the queue, leaving the session idle.
pub async fn stop(registry: &SessionRegistry, guild_id: u64) -> Result<(), MusicError> {
    let session = registry
        .get(guild_id)
        .await
        .ok_or(MusicError::NothingPlaying)?;
    let mut session = session.lock().await;

    registry.player().stop(guild_id).await?;
    session.queue.clear();
    session.current = None;
    session.state = PlaybackState::Idle;

    Ok(())
}

/// Pauses an actively playing session.
pub async fn pause(registry: &SessionRegistry, guild_id: u64) -> Result<(), MusicError> {
    let session = registry
        .get(guild_id)
        .await
        .ok_or(MusicError::NothingPlaying)?;
    let mut session = session.lock().await;

    match session.state {
        PlaybackState::Paused => Err(MusicError::AlreadyPaused),
        PlaybackState::Idle => Err(MusicError::NothingPlaying),
        PlaybackState::Playing => {
            registry.player().pause(guild_id).await?;
            session.state = PlaybackState::Paused;
            Ok(())
        }
    }
}

/// Resumes a paused session.
pub async fn resume(registry: &SessionRegistry, guild_id: u64) -> Result<(), MusicError> {
    let session = registry
        .get(guild_id)
        .await
        .ok_or(MusicError::NothingPlaying)?;
    let mut session = session.lock().await;

    match session.state {
        PlaybackState::Playing => Err(MusicError::NotPaused),
        PlaybackState::Idle => Err(MusicError::NothingPlaying),
        PlaybackState::Paused => {
            registry.player().resume(guild_id).await?;
            session.state = PlaybackState::Playing;
            Ok(())
        }
    }
}

/// Snapshot of the current track and upcoming queue for rendering.
pub async fn queue_view(
    registry: &SessionRegistry,
    loop_store: &LoopPolicyStore,
    guild_id: u64,
) -> Result<QueueView, MusicError> {
    let session = registry
        .get(guild_id)
        .await
        .ok_or(MusicError::NothingPlaying)?;
    let session = session.lock().await;

    Ok(QueueView {
        mode: loop_store.mode(guild_id).await,
        current: session.current.clone(),
        upcoming: session.queue.iter().take(UPCOMING_LIMIT).cloned().collect(),
        remaining: session.queue.len().saturating_sub(UPCOMING_LIMIT),
    })
}

/// Sets the loop mode, or cycles off -> track -> queue -> off when no mode is
/// requested.
///
/// The node's repeat mode is updated in the same call when a session exists;
/// loop continuation is afterwards driven entirely by the node.
pub async fn set_loop(
    registry: &SessionRegistry,
    loop_store: &LoopPolicyStore,
    guild_id: u64,
    requested: Option<LoopMode>,
) -> Result<LoopMode, MusicError> {
    let mode = match requested {
        Some(mode) => mode,
        None => loop_store.mode(guild_id).await.next(),
    };

    if registry.get(guild_id).await.is_some() {
        registry.player().set_repeat_mode(guild_id, mode).await?;
    }
    loop_store.set_mode(guild_id, mode).await;

    Ok(mode)
}
