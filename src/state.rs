//! Application state shared across all event handlers.
//!
//! Initialized once during startup and cloned (cheaply, all fields are
//! reference-counted or pooled) into the Discord event handler. The music
//! stores are explicit objects here rather than globals so handlers and tests
//! receive them by reference.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::music::loop_state::LoopPolicyStore;
use crate::music::session::SessionRegistry;
use crate::recruitment::interview::InterviewStore;

/// Shared resources handed to every command and event handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Application configuration loaded at startup.
    pub config: Arc<Config>,

    /// Registry of active playback sessions, at most one per guild.
    pub registry: Arc<SessionRegistry>,

    /// Per-guild loop policies, independent of session lifetime.
    pub loop_store: Arc<LoopPolicyStore>,

    /// In-flight recruitment questionnaires keyed by user.
    pub interviews: Arc<InterviewStore>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        config: Arc<Config>,
        registry: Arc<SessionRegistry>,
        loop_store: Arc<LoopPolicyStore>,
        interviews: Arc<InterviewStore>,
    ) -> Self {
        Self {
            db,
            config,
            registry,
            loop_store,
            interviews,
        }
    }
}
