//! Command handlers dispatched by the message router.

use serenity::all::{Context, CreateEmbed, CreateMessage, Message};

use crate::error::AppError;

pub mod music;
pub mod recruitment;
pub mod trial_status;
pub mod utility;

/// Replies to a message with a single embed.
pub(crate) async fn reply_embed(
    ctx: &Context,
    message: &Message,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    message
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(embed).reference_message(message),
        )
        .await?;
    Ok(())
}
