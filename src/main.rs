//! Ravenrock Discord bot - main entry point.
//!
//! Wires configuration, the database, the audio-node adapter, the event
//! reactor, the web listener, and the Discord gateway client together, then
//! blocks on the gateway connection.

mod bot;
mod commands;
mod config;
mod data;
mod error;
mod model;
mod music;
mod recruitment;
mod startup;
mod state;
mod util;
mod web;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::bot::notify::ChannelNotifier;
use crate::config::Config;
use crate::error::AppError;
use crate::music::loop_state::LoopPolicyStore;
use crate::music::node::RestNode;
use crate::music::reactor::EventReactor;
use crate::music::session::SessionRegistry;
use crate::recruitment::interview::InterviewStore;
use crate::state::AppState;
use crate::web::WebState;

/// Capacity of the node event channel; intake answers 503 once the reactor
/// falls this far behind.
const EVENT_CHANNEL_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "ravenrock_bot=info".into()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let node = Arc::new(RestNode::new(http_client, &config.node));
    let registry = Arc::new(SessionRegistry::new(node));
    let loop_store = Arc::new(LoopPolicyStore::new());
    let interviews = Arc::new(InterviewStore::new());

    let state = AppState::new(
        db,
        config.clone(),
        registry.clone(),
        loop_store.clone(),
        interviews,
    );

    let (bot_client, discord_http) = bot::start::init_bot(&config, state).await?;

    // Reactor consuming the node's lifecycle events
    let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let notifier = Arc::new(ChannelNotifier::new(discord_http));
    let reactor = EventReactor::new(registry, loop_store, notifier);
    tokio::spawn(reactor.run(events_rx));

    // Health check and node event intake
    let app = web::router(WebState {
        events: events_tx,
        node_password: config.node.password.clone(),
    });
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.web_port)).await?;
    tracing::info!("Web listener on port {}", config.web_port);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Web listener error: {}", e);
        }
    });

    // Blocks until the gateway connection shuts down
    bot::start::start_bot(bot_client).await?;

    Ok(())
}
