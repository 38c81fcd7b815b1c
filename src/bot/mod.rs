//! Telegram front-end: command parsing, handlers and reply delivery.

pub mod command;
pub mod handlers;
pub mod messages;
pub mod reply;
pub mod telegram;

pub use command::Command;
pub use reply::{Formatting, Reply};
pub use telegram::{schema, TelegramReply};

use crate::config::Config;
use crate::dictionary::DictionaryClient;
use crate::joke::JokeClient;

/// API clients shared by every handler invocation.
pub struct Services {
    pub dictionary: DictionaryClient,
    pub jokes: JokeClient,
}

impl Services {
    /// Both clients share one connection pool and the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            dictionary: DictionaryClient::with_client(&config.dictionary_api_url, client.clone()),
            jokes: JokeClient::with_client(&config.joke_api_url, client),
        })
    }
}
