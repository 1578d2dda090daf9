pub mod query;
pub mod types;

use std::env;
use std::time::Duration;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Client;
use tracing::{debug, warn};

use types::{Volume, VolumesResponse};

const API_BASE: &str = "https://www.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Characters to percent-encode in query parameter values.
/// Preserves `:` so `intitle:`-style field prefixes survive, encodes
/// everything the provider would mistake for URL structure.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'?')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'=')
    .add(b'@');

/// Errors returned by Books API operations.
#[derive(Debug, thiserror::Error)]
pub enum BooksError {
    #[error("Books API rate limit exceeded")]
    RateLimited,

    #[error("Books API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// HTTP client for the Google Books volumes API.
///
/// Unauthenticated by default; `GOOGLE_BOOKS_API_KEY` is forwarded as the
/// `key` parameter when set. The key only raises the per-IP quota.
#[derive(Clone)]
pub struct BooksClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl BooksClient {
    /// Create a client against the public API with auth from the environment.
    pub fn from_env(http: Client) -> Self {
        let api_key = env::var("GOOGLE_BOOKS_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        if api_key.is_some() {
            debug!("books API key configured");
        }
        Self {
            http,
            api_key,
            base_url: API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            api_key: None,
            base_url: base_url.to_string(),
        }
    }

    /// Run one volumes query. An envelope without `items` is an empty
    /// result set, not an error.
    pub async fn search_volumes(&self, query: &str) -> Result<Vec<Volume>, BooksError> {
        let q = utf8_percent_encode(query, QUERY_ENCODE_SET);
        let mut url = format!("{}/books/v1/volumes?q={q}", self.base_url);
        if let Some(ref key) = self.api_key {
            url.push_str(&format!("&key={}", utf8_percent_encode(key, QUERY_ENCODE_SET)));
        }

        let response = self
            .http
            .get(&url)
            .header("User-Agent", crate::USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        match status.as_u16() {
            200..=299 => {
                let body = response.text().await?;
                let envelope: VolumesResponse = serde_json::from_str(&body)?;
                let items = envelope.items.unwrap_or_default();
                debug!(
                    total = envelope.total_items.unwrap_or_default(),
                    returned = items.len(),
                    "volumes query complete"
                );
                Ok(items)
            }
            429 => {
                warn!("books API rate limited");
                Err(BooksError::RateLimited)
            }
            _ => {
                let message = extract_error_message(&response.text().await.unwrap_or_default());
                warn!(code = status.as_u16(), %message, "books API error");
                Err(BooksError::Api {
                    code: status.as_u16(),
                    message,
                })
            }
        }
    }
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.chars().take(200).collect())
}
