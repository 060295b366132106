//! Recruitment application command and DM questionnaire plumbing.
//!
//! `!recruitment` gates on the configured channel and the `recruitment_active`
//! setting, then opens a DM and starts an interview. Subsequent DMs from the
//! applicant are routed here by the message handler and fed through the
//! interview store until the application is complete, cancelled, or timed out.

use serenity::all::{
    ChannelId, Context, CreateEmbed, CreateEmbedFooter, CreateMessage, Mentionable, Message,
    Timestamp,
};

use crate::commands::reply_embed;
use crate::data::recruitment::RecruitmentApplicationRepository;
use crate::data::settings::{BotSettingRepository, RECRUITMENT_ACTIVE_KEY};
use crate::error::AppError;
use crate::model::recruitment::NewApplicationParam;
use crate::recruitment::interview::{CompletedInterview, StepOutcome};
use crate::state::AppState;

/// Handles the recruitment command: gate checks, DM hand-off, interview start.
pub async fn recruitment(
    state: &AppState,
    ctx: &Context,
    message: &Message,
) -> Result<(), AppError> {
    let Some(recruitment_channel_id) = state.config.recruitment_channel_id else {
        message
            .reply(
                &ctx.http,
                "❌ Recruitment is not configured on this server.",
            )
            .await?;
        return Ok(());
    };

    // Must be used in the designated recruitment channel
    if message.channel_id.get() != recruitment_channel_id {
        message
            .reply(
                &ctx.http,
                format!(
                    "❌ This command can only be used in <#{}>.",
                    recruitment_channel_id
                ),
            )
            .await?;
        return Ok(());
    }

    // Check if recruitment is open
    let settings = BotSettingRepository::new(&state.db);
    let active = match settings.is_enabled(RECRUITMENT_ACTIVE_KEY).await {
        Ok(active) => active,
        Err(e) => {
            tracing::error!("Failed to fetch recruitment status: {}", e);
            message
                .reply(&ctx.http, "❌ An error occurred. Please try again later.")
                .await?;
            return Ok(());
        }
    };

    if !active {
        let embed = CreateEmbed::new()
            .colour(0xFF4444)
            .title("🚫 Recruitment Closed")
            .description("Recruitment is currently **closed**. Please check back later!")
            .timestamp(Timestamp::now());
        return reply_embed(ctx, message, embed).await;
    }

    // DMs may be disabled; let the user know instead of failing silently
    let dm = match message.author.create_dm_channel(&ctx.http).await {
        Ok(dm) => dm,
        Err(_) => {
            message
                .reply(
                    &ctx.http,
                    "❌ I couldn't send you a DM. Please make sure your DMs are open and try again.",
                )
                .await?;
            return Ok(());
        }
    };

    let started = CreateEmbed::new()
        .colour(0x5865F2)
        .title("📬 Recruitment Application Started")
        .description(format!(
            "{}, check your DMs! I've sent you the application form.",
            message.author.mention()
        ))
        .timestamp(Timestamp::now());
    reply_embed(ctx, message, started).await?;

    let intro = CreateEmbed::new()
        .colour(0x5865F2)
        .title("🪶 Ravenrock Esports Recruitment Application")
        .description(
            "Welcome! Please answer the following questions to submit your trial application.\n\n\
             • You have **2 minutes** per question.\n\
             • Type **\"cancel\"** at any time to abort.\n\
             • Type **\"skip\"** to skip optional questions.\n\n\
             Let's get started! 🚀",
        )
        .footer(CreateEmbedFooter::new("Ravenrock Esports Recruitment"))
        .timestamp(Timestamp::now());
    dm.id
        .send_message(&ctx.http, CreateMessage::new().embed(intro))
        .await?;

    let first_question = state.interviews.begin(message.author.id.get()).await;
    dm.id.say(&ctx.http, first_question).await?;

    Ok(())
}

/// Routes a direct message into the author's open interview, if any.
pub async fn handle_dm(state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let outcome = state
        .interviews
        .advance(message.author.id.get(), &message.content)
        .await;

    match outcome {
        None => Ok(()),
        Some(StepOutcome::AskNext { prompt }) => {
            message.channel_id.say(&ctx.http, prompt).await?;
            Ok(())
        }
        Some(StepOutcome::Retry { notice }) => {
            message.channel_id.say(&ctx.http, notice).await?;
            Ok(())
        }
        Some(StepOutcome::Cancelled { notice }) => {
            message.channel_id.say(&ctx.http, notice).await?;
            Ok(())
        }
        Some(StepOutcome::Completed(answers)) => submit(state, ctx, message, answers).await,
    }
}

/// Persists a completed interview and confirms to applicant and admins.
async fn submit(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    answers: CompletedInterview,
) -> Result<(), AppError> {
    let repo = RecruitmentApplicationRepository::new(&state.db);

    let application = match repo
        .insert(NewApplicationParam {
            discord_user_id: message.author.id.get().to_string(),
            discord_username: message.author.tag(),
            surname: answers.surname,
            ign: answers.ign,
            role: answers.role,
            rank: answers.rank,
            tracker_link: answers.tracker_link,
        })
        .await
    {
        Ok(application) => {
            tracing::info!(
                "Saved trial application {} from {} ({})",
                application.id,
                application.discord_username,
                application.discord_user_id
            );
            application
        }
        Err(e) => {
            tracing::error!("Failed to save recruitment application: {}", e);
            message
                .channel_id
                .say(
                    &ctx.http,
                    "❌ There was an error submitting your application. Please try again later.",
                )
                .await?;
            return Ok(());
        }
    };

    let skipped = "_Skipped_".to_string();
    let confirm = CreateEmbed::new()
        .colour(0x57F287)
        .title("✅ Application Submitted Successfully!")
        .description(
            "Your trial application has been submitted to Ravenrock Esports. \
             Our admins will review it shortly.",
        )
        .field(
            "Surname",
            application.surname.clone().unwrap_or_else(|| skipped.clone()),
            true,
        )
        .field("IGN", application.ign.clone(), true)
        .field(
            "Role",
            application.role.clone().unwrap_or_else(|| skipped.clone()),
            true,
        )
        .field(
            "Rank",
            application.rank.clone().unwrap_or_else(|| skipped.clone()),
            true,
        )
        .field(
            "Tracker",
            application.tracker_link.clone().unwrap_or(skipped),
            false,
        )
        .footer(CreateEmbedFooter::new("Ravenrock Esports • Good luck!"))
        .timestamp(Timestamp::now());
    message
        .channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(confirm))
        .await?;

    let Some(notify_channel_id) = state.config.recruitment_notify_channel_id else {
        tracing::warn!("Recruitment notification channel not configured");
        return Ok(());
    };

    let not_available = "N/A".to_string();
    let notification = CreateEmbed::new()
        .colour(0x57F287)
        .title("📋 New Recruitment Application")
        .description(format!(
            "{} has submitted a trial application!",
            message.author.mention()
        ))
        .field("IGN", application.ign.clone(), true)
        .field(
            "Role",
            application.role.clone().unwrap_or_else(|| not_available.clone()),
            true,
        )
        .field("Rank", application.rank.clone().unwrap_or(not_available), true)
        .footer(CreateEmbedFooter::new(
            "Review this application on the Ravenrock web portal",
        ))
        .timestamp(Timestamp::now());

    if let Err(e) = ChannelId::new(notify_channel_id)
        .send_message(&ctx.http, CreateMessage::new().embed(notification))
        .await
    {
        tracing::error!("Failed to notify recruitment channel: {}", e);
    }

    Ok(())
}
