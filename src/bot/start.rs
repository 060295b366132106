use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the Discord client and extracts its HTTP handle.
///
/// The HTTP handle is shared with the event reactor so node notifications can
/// be posted without going through the gateway client.
///
/// # Arguments
/// - `config` - Application configuration with the bot token
/// - `state` - Shared state handed to every event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Unstarted client plus its HTTP handle
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    // Configure gateway intents - what events the bot will receive.
    // MESSAGE_CONTENT is a privileged intent - must be enabled in the
    // Discord Developer Portal.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::DIRECT_MESSAGES;

    let handler = Handler::new(state);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner.
///
/// This should be the last call on the main task since it blocks until the
/// bot shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
