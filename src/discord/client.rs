//! Discord REST client.
//!
//! Implements recent-message retrieval against the Discord HTTP API with
//! retry logic and rate-limit handling. This is the only component in the
//! crate that talks to the network.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tokio_retry::RetryIf;
use tracing::warn;

use crate::core::models::ChannelMessage;
use crate::errors::TriageError;
use crate::source::MessageSource;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Discord caps `GET /channels/{id}/messages` at 100 messages per call;
/// deeper windows are fetched by paginating with `before`.
const MAX_PAGE_SIZE: u32 = 100;

/// Maximum attempts when Discord reports rate limiting.
const MAX_RATE_LIMIT_RETRIES: u32 = 5;

/// One message as returned by the Discord HTTP API, reduced to the fields
/// this crate consumes.
#[derive(Debug, Deserialize)]
struct WireMessage {
    id: String,
    author: WireAuthor,
    timestamp: String,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireAuthor {
    username: String,
    #[serde(default)]
    global_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RateLimitBody {
    #[serde(default)]
    retry_after: Option<f64>,
}

impl WireMessage {
    fn into_channel_message(self) -> Result<ChannelMessage, TriageError> {
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|e| {
                TriageError::Unavailable(format!(
                    "Malformed timestamp '{}' in Discord response: {e}",
                    self.timestamp
                ))
            })?
            .with_timezone(&Utc);

        // Display name preference matches what Discord clients show.
        let author = self
            .author
            .global_name
            .filter(|n| !n.is_empty())
            .unwrap_or(self.author.username);

        Ok(ChannelMessage {
            id: self.id,
            author,
            created_at,
            content: self.content,
        })
    }
}

/// Discord API client with retry logic and rate-limit handling.
pub struct DiscordClient {
    token: String,
    base_url: String,
}

impl DiscordClient {
    #[must_use]
    pub fn new(bot_token: String) -> Self {
        Self {
            token: bot_token,
            base_url: DISCORD_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API root. Used against local stand-in
    /// servers in integration tests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, TriageError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, TriageError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);

        // Only transient backend failures are worth retrying; a missing
        // channel or a bad argument never resolves itself.
        RetryIf::spawn(strategy, operation, |e: &TriageError| {
            matches!(e, TriageError::Unavailable(_))
        })
        .await
    }

    /// Fetch a single history page, newest first, optionally before a
    /// message id. Handles HTTP 429 by honoring `retry_after`.
    async fn fetch_page(
        &self,
        channel_id: &str,
        page_size: u32,
        before: Option<&str>,
    ) -> Result<Vec<WireMessage>, TriageError> {
        let url = format!("{}/channels/{}/messages", self.base_url, channel_id);
        let mut attempts = 0;

        loop {
            attempts += 1;

            let mut request = HTTP_CLIENT
                .get(&url)
                .header("Authorization", format!("Bot {}", self.token))
                .query(&[("limit", page_size.to_string())]);
            if let Some(before_id) = before {
                request = request.query(&[("before", before_id)]);
            }

            let resp = request.send().await.map_err(|e| {
                TriageError::Unavailable(format!("Discord request failed: {e}"))
            })?;

            let status = resp.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                if attempts >= MAX_RATE_LIMIT_RETRIES {
                    return Err(TriageError::Unavailable(format!(
                        "Rate limited after {MAX_RATE_LIMIT_RETRIES} retries"
                    )));
                }
                let wait = resp
                    .json::<RateLimitBody>()
                    .await
                    .ok()
                    .and_then(|b| b.retry_after)
                    .filter(|s| s.is_finite() && *s >= 0.0)
                    .map_or(Duration::from_secs(1), Duration::from_secs_f64);
                warn!(
                    "Discord rate limited (429), waiting {:.1}s before retry (attempt {}/{})",
                    wait.as_secs_f64(),
                    attempts,
                    MAX_RATE_LIMIT_RETRIES
                );
                tokio::time::sleep(wait).await;
                continue;
            }

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(TriageError::ChannelNotFound(channel_id.to_string()));
            }

            if !status.is_success() {
                return Err(TriageError::Unavailable(format!(
                    "Discord message history HTTP {status}"
                )));
            }

            return resp.json::<Vec<WireMessage>>().await.map_err(|e| {
                TriageError::Unavailable(format!("Discord response parse error: {e}"))
            });
        }
    }
}

#[async_trait]
impl MessageSource for DiscordClient {
    /// Fetch up to `limit` most-recent messages, paginating in pages of at
    /// most 100 and preserving Discord's newest-first ordering.
    async fn fetch_recent(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<ChannelMessage>, TriageError> {
        let mut collected: Vec<ChannelMessage> = Vec::new();
        let mut before: Option<String> = None;

        while (collected.len() as u32) < limit {
            let remaining = limit - collected.len() as u32;
            let page_size = remaining.min(MAX_PAGE_SIZE);

            let page = self
                .with_retry(|| async {
                    self.fetch_page(channel_id, page_size, before.as_deref())
                        .await
                })
                .await?;
            let page_len = page.len() as u32;

            for wire in page {
                collected.push(wire.into_channel_message()?);
            }

            // A short page means the channel history is exhausted.
            if page_len < page_size {
                break;
            }
            before = collected.last().map(|m| m.id.clone());
        }

        Ok(collected)
    }
}
