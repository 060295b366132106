//! Trial application status command.

use serenity::all::{Context, CreateEmbed, CreateEmbedFooter, Message, Timestamp};

use crate::commands::reply_embed;
use crate::data::recruitment::RecruitmentApplicationRepository;
use crate::error::AppError;
use crate::model::recruitment::ApplicationStatus;
use crate::state::AppState;

/// Embed colour and applicant-facing message for each review status.
fn status_display(status: ApplicationStatus) -> (&'static str, u32, &'static str) {
    match status {
        ApplicationStatus::Pending => (
            "⏳",
            0xFEE75C,
            "Your application is **pending** review. Our admins will get to it shortly!",
        ),
        ApplicationStatus::Reviewed => (
            "🔎",
            0x5865F2,
            "Your application has been **reviewed** by our admins. A decision will be made soon!",
        ),
        ApplicationStatus::Accepted => (
            "🎉",
            0x57F287,
            "Congratulations! Your trial application has been **accepted**! Welcome to Ravenrock Esports!",
        ),
        ApplicationStatus::Rejected => (
            "❌",
            0xED4245,
            "Unfortunately, your application has been **rejected**. Feel free to apply again in the future!",
        ),
    }
}

/// Looks up the caller's most recent application and renders its status.
pub async fn trial_status(
    state: &AppState,
    ctx: &Context,
    message: &Message,
) -> Result<(), AppError> {
    let repo = RecruitmentApplicationRepository::new(&state.db);

    let application = match repo
        .find_latest_by_user(&message.author.id.get().to_string())
        .await
    {
        Ok(application) => application,
        Err(e) => {
            tracing::error!("Failed to query trial application status: {}", e);
            message
                .reply(&ctx.http, "❌ An error occurred. Please try again later.")
                .await?;
            return Ok(());
        }
    };

    let Some(application) = application else {
        let embed = CreateEmbed::new()
            .colour(0x5865F2)
            .title("📄 Trial Application Status")
            .description(format!(
                "You haven't submitted a trial application yet.\n\n\
                 👉 Use `{}recruitment` to apply for a trial position!",
                state.config.command_prefix
            ))
            .footer(CreateEmbedFooter::new("Ravenrock Esports"))
            .timestamp(Timestamp::now());
        return reply_embed(ctx, message, embed).await;
    };

    let (emoji, colour, text) = status_display(application.status);

    let embed = CreateEmbed::new()
        .colour(colour)
        .title(format!("{} Trial Application Status", emoji))
        .description(text)
        .field("IGN", application.ign.clone(), true)
        .field("Role", application.role.clone().unwrap_or_else(|| "N/A".to_string()), true)
        .field("Rank", application.rank.clone().unwrap_or_else(|| "N/A".to_string()), true)
        .field(
            "Status",
            format!("{} **{}**", emoji, application.status.label()),
            true,
        )
        .field(
            "Submitted",
            application.created_at.format("%b %d, %Y %H:%M").to_string(),
            true,
        )
        .footer(CreateEmbedFooter::new(
            "Ravenrock Esports • Status updates are managed by our admins",
        ))
        .timestamp(Timestamp::now());

    reply_embed(ctx, message, embed).await
}
