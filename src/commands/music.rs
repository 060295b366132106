//! Music command handlers.
//!
//! Thin serenity-facing wrappers: they resolve the requester's voice channel,
//! call into [`crate::music::ops`], and render the structured outcome (or
//! error) as a reply. All playback decisions live in the ops layer.

use serenity::all::{Context, Message};

use crate::error::music::MusicError;
use crate::error::AppError;
use crate::music::loop_state::LoopMode;
use crate::music::ops::{self, PlayOutcome, QueueView, SkipOutcome};
use crate::state::AppState;
use crate::util::format::format_duration;

/// Resolves the requester's current voice channel id and name.
///
/// Returns `None` when the requester is not connected to voice. The cache
/// borrow stays inside this function so callers are free to await afterwards.
fn requester_voice_channel(ctx: &Context, message: &Message) -> Option<(u64, String)> {
    let guild = message.guild(&ctx.cache)?;
    let channel_id = guild
        .voice_states
        .get(&message.author.id)
        .and_then(|vs| vs.channel_id)?;
    let name = guild
        .channels
        .get(&channel_id)
        .map(|channel| channel.name.clone())
        .unwrap_or_else(|| "voice".to_string());

    Some((channel_id.get(), name))
}

/// Renders a playback error as the user-facing reply text.
///
/// Audio-node failures are logged with detail and reported with a generic
/// apology; everything else maps onto a fixed message.
fn error_reply(error: &MusicError) -> String {
    match error {
        MusicError::NoVoiceChannel => "❌ You need to be in a voice channel!".to_string(),
        MusicError::EmptyQuery => "❌ Please provide a song name or URL!".to_string(),
        MusicError::InvalidLoopOption => {
            "❌ Invalid option! Use `track`, `queue`, or `off`.".to_string()
        }
        MusicError::AlreadyConnected => "❌ I'm already in a voice channel!".to_string(),
        MusicError::NotConnected => "❌ I'm not in a voice channel!".to_string(),
        MusicError::AlreadyPaused => "❌ Playback is already paused!".to_string(),
        MusicError::NotPaused => "❌ Playback is not paused!".to_string(),
        MusicError::NothingPlaying => "❌ Nothing is playing!".to_string(),
        MusicError::NoResults => "❌ No results found!".to_string(),
        MusicError::Player(e) => {
            tracing::error!("Audio node call failed: {}", e);
            "❌ Something went wrong talking to the audio node. Please try again later."
                .to_string()
        }
    }
}

pub async fn join(state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let voice = requester_voice_channel(ctx, message);
    let channel_name = voice.as_ref().map(|(_, name)| name.clone());

    let reply = match ops::join(
        &state.registry,
        guild_id.get(),
        voice.map(|(id, _)| id),
        message.channel_id.get(),
    )
    .await
    {
        Ok(()) => format!(
            "✅ Joined **{}**!",
            channel_name.unwrap_or_else(|| "voice".to_string())
        ),
        Err(err) => error_reply(&err),
    };
    message.reply(&ctx.http, reply).await?;

    Ok(())
}

pub async fn leave(state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let reply = match ops::leave(&state.registry, guild_id.get()).await {
        Ok(()) => "👋 Left the voice channel!".to_string(),
        Err(err) => error_reply(&err),
    };
    message.reply(&ctx.http, reply).await?;

    Ok(())
}

pub async fn play(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    args: &[&str],
) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let voice = requester_voice_channel(ctx, message);
    let query = args.join(" ");

    let reply = match ops::play(
        &state.registry,
        guild_id.get(),
        voice.map(|(id, _)| id),
        message.channel_id.get(),
        &query,
        message.author.id.get(),
    )
    .await
    {
        Ok(PlayOutcome::Track(track)) => format!(
            "✅ Added **{}** by **{}** to the queue!",
            track.title, track.artist
        ),
        Ok(PlayOutcome::Playlist { name, count }) => format!(
            "✅ Added playlist **{}** with **{}** tracks to the queue!",
            name, count
        ),
        Err(err) => error_reply(&err),
    };
    message.reply(&ctx.http, reply).await?;

    Ok(())
}

pub async fn skip(state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let reply = match ops::skip(&state.registry, guild_id.get()).await {
        Ok(SkipOutcome::Advanced { skipped, .. }) => {
            format!("⏭️ Skipped **{}**!", skipped.title)
        }
        Ok(SkipOutcome::Drained { skipped }) => format!(
            "⏭️ Skipped **{}**! No more tracks in the queue - stopping playback.",
            skipped.title
        ),
        Err(err) => error_reply(&err),
    };
    message.reply(&ctx.http, reply).await?;

    Ok(())
}

pub async fn stop(state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let reply = match ops::stop(&state.registry, guild_id.get()).await {
        Ok(()) => "⏹️ Stopped playback and cleared the queue!".to_string(),
        Err(err) => error_reply(&err),
    };
    message.reply(&ctx.http, reply).await?;

    Ok(())
}

pub async fn pause(state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let reply = match ops::pause(&state.registry, guild_id.get()).await {
        Ok(()) => "⏸️ Paused playback!".to_string(),
        Err(err) => error_reply(&err),
    };
    message.reply(&ctx.http, reply).await?;

    Ok(())
}

pub async fn resume(state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let reply = match ops::resume(&state.registry, guild_id.get()).await {
        Ok(()) => "▶️ Resumed playback!".to_string(),
        Err(err) => error_reply(&err),
    };
    message.reply(&ctx.http, reply).await?;

    Ok(())
}

pub async fn queue(state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let reply = match ops::queue_view(&state.registry, &state.loop_store, guild_id.get()).await {
        Ok(view) if view.is_empty() => "❌ Queue is empty!".to_string(),
        Ok(view) => render_queue(&view),
        Err(err) => error_reply(&err),
    };
    message.reply(&ctx.http, reply).await?;

    Ok(())
}

pub async fn loop_mode(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    args: &[&str],
) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    // No argument cycles off -> track -> queue -> off; anything
    // unrecognized is rejected without touching state.
    let requested = match args.first() {
        None => None,
        Some(token) => match LoopMode::parse(token) {
            Some(mode) => Some(mode),
            None => {
                message
                    .reply(&ctx.http, error_reply(&MusicError::InvalidLoopOption))
                    .await?;
                return Ok(());
            }
        },
    };

    let reply = match ops::set_loop(&state.registry, &state.loop_store, guild_id.get(), requested)
        .await
    {
        Ok(mode) => format!("✅ Loop mode: {}", mode.display()),
        Err(err) => error_reply(&err),
    };
    message.reply(&ctx.http, reply).await?;

    Ok(())
}

/// Renders the queue snapshot: loop mode, now playing, then up to ten
/// upcoming tracks with a truncation note.
fn render_queue(view: &QueueView) -> String {
    let mut out = format!("{}\n\n", view.mode.display());

    if let Some(current) = &view.current {
        out.push_str(&format!(
            "**🎵 Now Playing:**\n{} by {}\n",
            current.title, current.artist
        ));
        out.push_str(&format!(
            "Duration: {} | Requested by: <@{}>\n\n",
            format_duration(current.duration_ms),
            current.requester_id
        ));
    }

    if !view.upcoming.is_empty() {
        out.push_str("**📋 Queue:**\n");
        for (index, track) in view.upcoming.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} by {} [{}]\n",
                index + 1,
                track.title,
                track.artist,
                format_duration(track.duration_ms)
            ));
        }

        if view.remaining > 0 {
            out.push_str(&format!("\n...and **{}** more tracks", view.remaining));
        }
    }

    out
}
