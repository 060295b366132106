//! REST adapter for the external audio node.
//!
//! Control calls map onto the node's HTTP API with the shared node password in
//! the `Authorization` header. Lifecycle events travel the other way: the node
//! posts them to the bot's `/node/events` intake, which forwards them onto the
//! reactor channel (see [`crate::web`]).

use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use serenity::async_trait;

use crate::config::NodeConfig;
use crate::music::loop_state::LoopMode;
use crate::music::player::{PlayerError, PlayerService, SearchLoad};
use crate::music::track::Track;

/// Player capability implemented against the node's REST API.
pub struct RestNode {
    http: Client,
    base_url: String,
    password: String,
}

#[derive(Serialize)]
struct ConnectBody {
    channel_id: u64,
}

#[derive(Serialize)]
struct RepeatBody {
    repeat: &'static str,
}

#[derive(Deserialize)]
struct SearchResponse {
    load_type: String,
    playlist_name: Option<String>,
    tracks: Vec<Track>,
}

impl RestNode {
    pub fn new(http: Client, config: &NodeConfig) -> Self {
        Self {
            http,
            base_url: format!("http://{}:{}", config.host, config.port),
            password: config.password.clone(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header(reqwest::header::AUTHORIZATION, self.password.as_str())
    }

    /// Sends a bodyless player control call and checks the response status.
    async fn control(&self, method: Method, path: &str) -> Result<(), PlayerError> {
        let response = self.request(method, path).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, PlayerError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "no error body".to_string());
        Err(PlayerError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PlayerService for RestNode {
    async fn connect(&self, guild_id: u64, channel_id: u64) -> Result<(), PlayerError> {
        let response = self
            .request(Method::PUT, &format!("/v1/players/{}", guild_id))
            .json(&ConnectBody { channel_id })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn destroy(&self, guild_id: u64) -> Result<(), PlayerError> {
        // The node treats deleting an unknown player as success, which keeps
        // this call idempotent from the registry's point of view.
        self.control(Method::DELETE, &format!("/v1/players/{}", guild_id))
            .await
    }

    async fn search(&self, query: &str, requester_id: u64) -> Result<SearchLoad, PlayerError> {
        let requester = requester_id.to_string();
        let response = self
            .request(Method::GET, "/v1/search")
            .query(&[("q", query), ("requester", requester.as_str())])
            .send()
            .await?;
        let response = Self::check(response).await?;
        let body: SearchResponse = response.json().await?;

        let load = match body.load_type.as_str() {
            "playlist" => SearchLoad::Playlist {
                name: body
                    .playlist_name
                    .unwrap_or_else(|| "Playlist".to_string()),
                tracks: body.tracks,
            },
            "track" => match body.tracks.into_iter().next() {
                Some(track) => SearchLoad::Track(track),
                None => SearchLoad::Empty,
            },
            _ => SearchLoad::Empty,
        };

        Ok(load)
    }

    async fn enqueue(&self, guild_id: u64, tracks: &[Track]) -> Result<(), PlayerError> {
        let response = self
            .request(Method::POST, &format!("/v1/players/{}/queue", guild_id))
            .json(&tracks)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn play(&self, guild_id: u64) -> Result<(), PlayerError> {
        self.control(Method::POST, &format!("/v1/players/{}/play", guild_id))
            .await
    }

    async fn pause(&self, guild_id: u64) -> Result<(), PlayerError> {
        self.control(Method::POST, &format!("/v1/players/{}/pause", guild_id))
            .await
    }

    async fn resume(&self, guild_id: u64) -> Result<(), PlayerError> {
        self.control(Method::POST, &format!("/v1/players/{}/resume", guild_id))
            .await
    }

    async fn skip(&self, guild_id: u64) -> Result<(), PlayerError> {
        self.control(Method::POST, &format!("/v1/players/{}/skip", guild_id))
            .await
    }

    async fn stop(&self, guild_id: u64) -> Result<(), PlayerError> {
        self.control(Method::POST, &format!("/v1/players/{}/stop", guild_id))
            .await
    }

    async fn set_repeat_mode(&self, guild_id: u64, mode: LoopMode) -> Result<(), PlayerError> {
        let response = self
            .request(Method::PATCH, &format!("/v1/players/{}", guild_id))
            .json(&RepeatBody {
                repeat: mode.as_str(),
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
