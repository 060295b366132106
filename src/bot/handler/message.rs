use serenity::all::{Context, Message};

use crate::commands::{music, recruitment, trial_status, utility};
use crate::state::AppState;

/// Handle message creation: route DMs into open interviews and parse guild
/// messages into prefixed commands.
///
/// Unknown verbs are deliberately ignored rather than reported.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    // DMs only ever carry questionnaire answers
    if message.guild_id.is_none() {
        if let Err(e) = recruitment::handle_dm(state, &ctx, &message).await {
            tracing::error!("Error handling recruitment DM: {}", e);
        }
        return;
    }

    let Some(content) = message
        .content
        .strip_prefix(state.config.command_prefix.as_str())
    else {
        return;
    };

    let mut parts = content.trim().split_whitespace();
    let Some(verb) = parts.next() else {
        return;
    };
    let args: Vec<&str> = parts.collect();

    let result = match verb.to_lowercase().as_str() {
        // Utility commands
        "help" => utility::help(state, &ctx, &message).await,
        "who" => utility::who(state, &ctx, &message).await,
        "rules" => utility::rules(state, &ctx, &message).await,
        // Music commands
        "join" => music::join(state, &ctx, &message).await,
        "leave" => music::leave(state, &ctx, &message).await,
        "play" => music::play(state, &ctx, &message, &args).await,
        "skip" => music::skip(state, &ctx, &message).await,
        "stop" => music::stop(state, &ctx, &message).await,
        "pause" => music::pause(state, &ctx, &message).await,
        "resume" => music::resume(state, &ctx, &message).await,
        "queue" => music::queue(state, &ctx, &message).await,
        "loop" => music::loop_mode(state, &ctx, &message, &args).await,
        // Recruitment commands
        "recruitment" => recruitment::recruitment(state, &ctx, &message).await,
        "trial-status" => trial_status::trial_status(state, &ctx, &message).await,
        _ => Ok(()),
    };

    if let Err(e) = result {
        tracing::error!("Error handling command '{}': {}", verb, e);
    }
}
