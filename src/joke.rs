//! Random joke client (icanhazdadjoke.com).

use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::markdown::escape;

pub const DEFAULT_JOKE_API_URL: &str = "https://icanhazdadjoke.com/";

/// Used when the API answers 200 without a `joke` field.
pub const NO_JOKE: &str = "Sin chiste disponible.";

#[derive(Deserialize)]
struct JokeResponse {
    joke: Option<String>,
}

#[derive(Debug)]
pub enum JokeResult {
    Found(String),
    ServerError(u16),
    TransportError(String),
    ParseError(String),
}

pub struct JokeClient {
    url: String,
    client: reqwest::Client,
}

impl JokeClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(url, client))
    }

    pub fn with_client(url: &str, client: reqwest::Client) -> Self {
        Self {
            url: url.to_string(),
            client,
        }
    }

    pub async fn fetch(&self) -> JokeResult {
        let response = match self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Joke request failed");
                return JokeResult::TransportError(e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Joke API error");
            return JokeResult::ServerError(status.as_u16());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Failed to read joke response");
                return JokeResult::TransportError(e.to_string());
            }
        };

        match serde_json::from_str::<JokeResponse>(&body) {
            Ok(parsed) => {
                info!("Joke fetched");
                JokeResult::Found(parsed.joke.unwrap_or_else(|| NO_JOKE.to_string()))
            }
            Err(e) => {
                warn!(error = %e, "Unexpected joke payload");
                JokeResult::ParseError(e.to_string())
            }
        }
    }
}

/// MarkdownV2 reply for a joke outcome.
pub fn render_joke(result: JokeResult) -> String {
    match result {
        JokeResult::Found(joke) => escape(&joke),
        JokeResult::ServerError(status) => format!("Error en API de chistes: {status}\\."),
        JokeResult::TransportError(_) => "Error de conexión con el servidor de chistes\\.".to_string(),
        JokeResult::ParseError(_) => "No pude entender la respuesta del servidor de chistes\\.".to_string(),
    }
}
