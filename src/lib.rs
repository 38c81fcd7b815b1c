//! Telegram bot that looks up English words (definitions, synonyms,
//! antonyms) on dictionaryapi.dev and tells dad jokes from icanhazdadjoke.com,
//! replying in MarkdownV2.

pub mod bot;
pub mod config;
pub mod dictionary;
pub mod joke;
pub mod markdown;
pub mod telegram_log;
