use crate::error::FeedError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Retrieval collaborator: given a YYYYMMDD date stamp, return the full
/// ordered line sequence of that night's feed. The parser only ever sees a
/// fully materialized sequence; there is no streaming parse.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_lines(&self, date: &str) -> Result<Vec<String>, FeedError>;
}

pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn feed_url(&self, date: &str) -> String {
        format!("{}{date}", self.base_url)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_lines(&self, date: &str) -> Result<Vec<String>, FeedError> {
        let url = self.feed_url(date);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Retrieval {
                date: date.to_string(),
                reason: format!("network error fetching {url}: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(FeedError::Retrieval {
                date: date.to_string(),
                reason: format!("HTTP error {} fetching {url}", response.status().as_u16()),
            });
        }

        let body = response.text().await.map_err(|e| FeedError::Retrieval {
            date: date.to_string(),
            reason: format!("error reading response body from {url}: {e}"),
        })?;

        Ok(body.lines().map(str::to_string).collect())
    }
}

/// Bounded retry policy for feed retrieval. The backoff doubles after every
/// failed attempt. Exhausting the attempts surfaces the last retrieval
/// error; there is no unbounded retry loop.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(2),
        }
    }
}

pub async fn fetch_with_retry(
    fetcher: &dyn Fetcher,
    date: &str,
    policy: RetryPolicy,
) -> Result<Vec<String>, FeedError> {
    let mut backoff = policy.initial_backoff;
    let mut last_error = None;

    for attempt in 1..=policy.max_attempts {
        match fetcher.fetch_lines(date).await {
            Ok(lines) => return Ok(lines),
            Err(err) => {
                tracing::warn!(
                    "[Ingest] Fetch attempt {attempt}/{} for {date} failed: {err}",
                    policy.max_attempts
                );
                last_error = Some(err);
                if attempt < policy.max_attempts {
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| FeedError::Retrieval {
        date: date.to_string(),
        reason: "retry policy allows zero attempts".to_string(),
    }))
}
