//! GitHub events API client.

use crate::config;
use crate::event::RawEvent;
use async_trait::async_trait;
use log::info;
use mockall::automock;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use thiserror::Error;

/// Why a fetch failed. Messages are user-facing.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("User '{0}' not found on GitHub.")]
    UserNotFound(String),
    #[error("API rate limit exceeded. Try again later.")]
    RateLimited,
    #[error("HTTP error: {0}")]
    Status(StatusCode),
    #[error("Failed to connect to GitHub API: {0}")]
    Connection(#[source] reqwest::Error),
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Source of a user's public event batch.
#[automock]
#[async_trait]
pub trait ActivityFetcher {
    async fn fetch_events(&self, username: &str) -> Result<Vec<RawEvent>, FetchError>;
}

pub struct GithubClient {
    client: reqwest::Client,
}

impl GithubClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config::USER_AGENT)
            .timeout(config::REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ActivityFetcher for GithubClient {
    async fn fetch_events(&self, username: &str) -> Result<Vec<RawEvent>, FetchError> {
        let response = self
            .client
            .get(events_url(username))
            .header(ACCEPT, config::GITHUB_MEDIA_TYPE)
            .send()
            .await
            .map_err(|err| {
                if err.is_connect() {
                    FetchError::Connection(err)
                } else {
                    FetchError::Request(err)
                }
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(FetchError::UserNotFound(username.to_string())),
            StatusCode::FORBIDDEN => return Err(FetchError::RateLimited),
            status if !status.is_success() => return Err(FetchError::Status(status)),
            _ => {}
        }

        let events = response.json::<Vec<RawEvent>>().await?;
        info!("Fetched {} events for user '{}'", events.len(), username);
        Ok(events)
    }
}

fn events_url(username: &str) -> String {
    format!("{}/users/{}/events", config::GITHUB_API_BASE_URL, username)
}
