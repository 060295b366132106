//! Health check and audio-node event intake.
//!
//! The node pushes lifecycle events to `POST /node/events` with the shared
//! node password; accepted events are forwarded in arrival order onto the
//! reactor's channel. `GET /health` answers deployment liveness probes.

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::sync::mpsc;

use crate::music::events::PlayerEvent;

/// State shared with the web handlers.
#[derive(Clone)]
pub struct WebState {
    /// Forwarding side of the reactor's event channel.
    pub events: mpsc::Sender<PlayerEvent>,
    /// Shared secret the node must present on event posts.
    pub node_password: String,
}

/// Builds the web router.
pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/node/events", post(node_event))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

/// Accepts one lifecycle event from the node.
///
/// Malformed payloads are rejected by the JSON extractor before reaching
/// this handler; a rejected or failed event never stalls the intake of
/// later ones.
async fn node_event(
    State(state): State<WebState>,
    headers: HeaderMap,
    Json(event): Json<PlayerEvent>,
) -> StatusCode {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(state.node_password.as_str());

    if !authorized {
        return StatusCode::UNAUTHORIZED;
    }

    match state.events.send(event).await {
        Ok(()) => StatusCode::ACCEPTED,
        Err(e) => {
            tracing::error!("Event reactor channel closed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(events: mpsc::Sender<PlayerEvent>) -> WebState {
        WebState {
            events,
            node_password: "hunter2".to_string(),
        }
    }

    fn headers_with_password(password: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, password.parse().unwrap());
        headers
    }

    /// Tests that an authorized event lands on the reactor channel.
    #[tokio::test]
    async fn forwards_authorized_events() {
        let (tx, mut rx) = mpsc::channel(4);
        let event = PlayerEvent::QueueEnd { guild_id: 1 };

        let status = node_event(
            State(state(tx)),
            headers_with_password("hunter2"),
            Json(event.clone()),
        )
        .await;

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(rx.recv().await, Some(event));
    }

    /// Tests that a wrong or missing password is rejected without
    /// forwarding.
    #[tokio::test]
    async fn rejects_bad_password() {
        let (tx, mut rx) = mpsc::channel(4);

        let status = node_event(
            State(state(tx)),
            headers_with_password("wrong"),
            Json(PlayerEvent::QueueEnd { guild_id: 1 }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(rx.try_recv().is_err());
    }

    /// Tests the wire format of a guild-scoped event.
    #[test]
    fn event_json_round_trip() {
        let json = r#"{"event":"player_move","guild_id":5,"channel_id":null}"#;
        let event: PlayerEvent = serde_json::from_str(json).unwrap();

        assert_eq!(
            event,
            PlayerEvent::PlayerMove {
                guild_id: 5,
                channel_id: None
            }
        );
    }
}
