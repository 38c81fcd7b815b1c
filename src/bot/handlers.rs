//! Command handlers. Each one runs a single request/format/reply sequence and
//! never lets a failure escape: every outcome becomes a reply.

use tracing::{info, warn};

use super::command::{normalize_args, Command};
use super::messages::{self, Sender};
use super::reply::{Formatting, Reply};
use super::Services;
use crate::dictionary::{self, format::format_searching, Relation};
use crate::joke::render_joke;

pub async fn handle_command<R: Reply>(
    reply: &R,
    services: &Services,
    command: Command,
    sender: Option<&Sender>,
) {
    match command {
        Command::Start => send(reply, &messages::start(sender), Formatting::MarkdownV2).await,
        Command::Ayuda => send(reply, messages::HELP, Formatting::MarkdownV2).await,
        Command::Chiste => joke(reply, services).await,
        Command::Definir(args) => define(reply, services, &args).await,
        Command::Sinonimos(args) => related(reply, services, Relation::Synonyms, &args).await,
        Command::Antonimos(args) => related(reply, services, Relation::Antonyms, &args).await,
    }
}

/// Non-command text is echoed back as-is.
pub async fn handle_text<R: Reply>(reply: &R, text: &str) {
    send(reply, &messages::echo(text), Formatting::Plain).await;
}

async fn define<R: Reply>(reply: &R, services: &Services, args: &str) {
    let Some(word) = normalize_args(args) else {
        send(reply, &messages::usage("definir"), Formatting::MarkdownV2).await;
        return;
    };

    send(reply, &format_searching(&word), Formatting::MarkdownV2).await;
    let result = services.dictionary.lookup(&word).await;
    let text = dictionary::render_definition(&word, result);
    send(reply, &text, Formatting::MarkdownV2).await;
}

async fn related<R: Reply>(reply: &R, services: &Services, relation: Relation, args: &str) {
    let Some(word) = normalize_args(args) else {
        let command = match relation {
            Relation::Synonyms => "sinonimos",
            Relation::Antonyms => "antonimos",
        };
        send(reply, &messages::usage(command), Formatting::MarkdownV2).await;
        return;
    };

    let result = services.dictionary.lookup(&word).await;
    let text = dictionary::render_related(relation, &word, result);
    send(reply, &text, Formatting::MarkdownV2).await;
}

async fn joke<R: Reply>(reply: &R, services: &Services) {
    send(reply, messages::SEARCHING_JOKE, Formatting::MarkdownV2).await;
    let result = services.jokes.fetch().await;
    send(reply, &render_joke(result), Formatting::MarkdownV2).await;
}

async fn send<R: Reply>(reply: &R, text: &str, formatting: Formatting) {
    match reply.reply(text, formatting).await {
        Ok(()) => info!(chars = text.len(), "Reply sent"),
        Err(e) => warn!(error = %e, "Reply not delivered"),
    }
}
