use std::sync::Arc;

use serenity::all::ChannelId;
use serenity::async_trait;
use serenity::http::Http;

use crate::music::reactor::Notifier;

/// Posts reactor notifications into Discord text channels.
pub struct ChannelNotifier {
    http: Arc<Http>,
}

impl ChannelNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn notify(&self, channel_id: u64, message: &str) {
        if let Err(e) = ChannelId::new(channel_id).say(&self.http, message).await {
            tracing::error!(
                "Failed to send notification to channel {}: {}",
                channel_id,
                e
            );
        }
    }
}
