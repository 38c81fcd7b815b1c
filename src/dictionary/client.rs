//! HTTP client for the dictionary API.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info, warn};

use super::entry::Entry;

/// Default endpoint: English entries from dictionaryapi.dev.
pub const DEFAULT_DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Outcome of a single lookup. Exactly one variant per call.
#[derive(Debug)]
pub enum LookupResult {
    /// 200 with a parseable list of entries.
    Found(Vec<Entry>),
    /// 404: the word is not in the dictionary.
    NotFound,
    /// Connection, DNS, timeout or body read failure.
    TransportError(String),
    /// Any status other than 200 and 404.
    ServerError(u16),
    /// 200 whose body is not JSON or not a list of entries.
    ParseError(String),
}

pub struct DictionaryClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictionaryClient {
    /// `base_url` is the endpoint the lower-cased word is appended to, with or
    /// without a trailing slash.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// URL queried for `word`: lower-cased and sent as one path segment.
    pub fn url_for(&self, word: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(&word.to_lowercase()))
    }

    /// Look up `word`. Single attempt, no retries.
    pub async fn lookup(&self, word: &str) -> LookupResult {
        let url = self.url_for(word);
        debug!(%url, "Dictionary lookup");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(word, error = %e, "Dictionary request failed");
                return LookupResult::TransportError(e.to_string());
            }
        };

        let status = response.status();
        match status {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                info!(word, "Word not found");
                return LookupResult::NotFound;
            }
            _ => {
                warn!(word, %status, "Dictionary API error");
                return LookupResult::ServerError(status.as_u16());
            }
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(word, error = %e, "Failed to read dictionary response");
                return LookupResult::TransportError(e.to_string());
            }
        };

        match serde_json::from_str::<Vec<Entry>>(&body) {
            Ok(entries) => {
                info!(word, entries = entries.len(), "Dictionary lookup succeeded");
                LookupResult::Found(entries)
            }
            Err(e) => {
                warn!(word, error = %e, "Unexpected dictionary payload");
                LookupResult::ParseError(e.to_string())
            }
        }
    }
}
