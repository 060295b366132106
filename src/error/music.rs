use thiserror::Error;

use crate::music::player::PlayerError;

/// Errors a playback command can report back to the requester.
///
/// Variants fall into four groups, rendered differently by the command layer:
/// user-input errors (`NoVoiceChannel`, `EmptyQuery`, `InvalidLoopOption`),
/// state conflicts (`AlreadyConnected`, `NotConnected`, `AlreadyPaused`,
/// `NotPaused`), not-found conditions (`NothingPlaying`, `NoResults`), and
/// audio-node failures (`Player`), which are logged in detail and reported
/// with a generic apology. None of these mutate session or loop state.
#[derive(Error, Debug)]
pub enum MusicError {
    #[error("requester is not in a voice channel")]
    NoVoiceChannel,

    #[error("no search query provided")]
    EmptyQuery,

    #[error("unrecognized loop mode token")]
    InvalidLoopOption,

    #[error("a session already exists for this guild")]
    AlreadyConnected,

    #[error("no session exists for this guild")]
    NotConnected,

    #[error("playback is already paused")]
    AlreadyPaused,

    #[error("playback is not paused")]
    NotPaused,

    #[error("nothing is playing")]
    NothingPlaying,

    #[error("the search returned no results")]
    NoResults,

    #[error(transparent)]
    Player(#[from] PlayerError),
}
