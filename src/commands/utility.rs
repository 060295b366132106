//! Utility command handlers: help, who, rules.

use serenity::all::{
    ChannelId, Context, CreateEmbed, CreateEmbedFooter, Mentionable, Message, Timestamp,
};

use crate::commands::reply_embed;
use crate::error::AppError;
use crate::state::AppState;

/// Finds a guild channel by name for cross-linking in embeds.
fn find_channel_by_name(ctx: &Context, message: &Message, name: &str) -> Option<ChannelId> {
    let guild = message.guild(&ctx.cache)?;
    guild
        .channels
        .values()
        .find(|channel| channel.name == name)
        .map(|channel| channel.id)
}

/// Display all available bot commands.
pub async fn help(state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let p = &state.config.command_prefix;

    let embed = CreateEmbed::new()
        .colour(0xFFD700)
        .title("🎮 Ravenrock Bot Commands")
        .description("Here are all the available commands:")
        .field(
            "🎵 Music Commands",
            format!(
                "`{p}play <song>` - Play a song from YouTube\n\
                 `{p}join` - Join your voice channel\n\
                 `{p}leave` - Leave the voice channel\n\
                 `{p}skip` - Skip the current song\n\
                 `{p}stop` - Stop playback and clear queue\n\
                 `{p}pause` - Pause the current song\n\
                 `{p}resume` - Resume playback\n\
                 `{p}queue` - Show the current queue\n\
                 `{p}loop [track|queue|off]` - Set loop mode"
            ),
            false,
        )
        .field(
            "📋 Utility Commands",
            format!(
                "`{p}help` - Show this help message\n\
                 `{p}who` - Learn about Ravenrock\n\
                 `{p}rules` - View server rules\n\
                 `{p}recruitment` - Apply for a trial position\n\
                 `{p}trial-status` - Check your application status"
            ),
            false,
        )
        .footer(CreateEmbedFooter::new("Ravenrock Official Discord Bot"))
        .timestamp(Timestamp::now());

    reply_embed(ctx, message, embed).await
}

/// Display information about Ravenrock with a link to the welcome channel.
pub async fn who(_state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let welcome_channel = find_channel_by_name(ctx, message, "welcome");

    let mut description = String::from(
        "Welcome to the **Ravenrock Official Discord Server**! 🎮\n\n\
         We're a competitive esports organization dedicated to excellence in gaming.\n\n",
    );
    if let Some(channel) = welcome_channel {
        description.push_str(&format!(
            "Check out {} for more information!\n\n",
            channel.mention()
        ));
    }
    description.push_str("📚 **Learn More:** [Ravenrock team page](https://ravenrock.example/teams)");

    let embed = CreateEmbed::new()
        .colour(0x00CCFF)
        .title("🪶 Welcome to Ravenrock!")
        .description(description)
        .footer(CreateEmbedFooter::new("Ravenrock Esports"))
        .timestamp(Timestamp::now());

    reply_embed(ctx, message, embed).await
}

/// Mention the rules channel.
pub async fn rules(_state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let rules_channel = find_channel_by_name(ctx, message, "rules");

    let description = match rules_channel {
        Some(channel) => format!(
            "Please read and follow our server rules in {}!",
            channel.mention()
        ),
        None => "Please check the rules channel for server guidelines!".to_string(),
    };

    let embed = CreateEmbed::new()
        .colour(0xFF0000)
        .title("📜 Server Rules")
        .description(description)
        .footer(CreateEmbedFooter::new(
            "Follow the rules to keep our community safe!",
        ))
        .timestamp(Timestamp::now());

    reply_embed(ctx, message, embed).await
}
