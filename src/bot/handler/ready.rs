use std::time::Duration;

use serenity::all::{ActivityData, Context, Ready};

/// Handle the ready event: log the connection and start the rotating
/// activity status.
pub async fn handle_ready(ctx: Context, ready: Ready, command_prefix: String) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    tokio::spawn(rotate_activity(ctx, command_prefix));
}

/// Rotates the presence through a fixed set of activities every ten seconds.
async fn rotate_activity(ctx: Context, command_prefix: String) {
    let activities = [
        ActivityData::watching(format!(
            "Ravenrock Official Server | {}help",
            command_prefix
        )),
        ActivityData::watching("over Ravenrock Esports"),
        ActivityData::playing(format!("🎮 Type {}help for commands", command_prefix)),
        ActivityData::listening("🎵 Music & More"),
    ];

    let mut interval = tokio::time::interval(Duration::from_secs(10));
    let mut index = 0;

    loop {
        interval.tick().await;
        ctx.set_activity(Some(activities[index].clone()));
        index = (index + 1) % activities.len();
    }
}
