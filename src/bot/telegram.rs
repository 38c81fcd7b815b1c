//! teloxide glue: update routing and the Telegram-backed [`Reply`].

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, info, warn};

use super::command::Command;
use super::handlers::{handle_command, handle_text};
use super::messages::Sender;
use super::reply::{Formatting, Reply};
use super::Services;

/// Replies into the chat the update came from.
pub struct TelegramReply {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramReply {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

impl Reply for TelegramReply {
    async fn reply(&self, text: &str, formatting: Formatting) -> Result<(), String> {
        let mut request = self.bot.send_message(self.chat_id, text);
        if formatting == Formatting::MarkdownV2 {
            request = request.parse_mode(ParseMode::MarkdownV2);
        }

        request.await.map(|_| ()).map_err(|e| {
            let msg = format!("Failed to send to chat {}: {e}", self.chat_id);
            warn!("{}", msg);
            msg
        })
    }
}

/// Commands go to [`handle_command`], other text is echoed, everything else
/// (unknown commands included) is dropped.
pub fn schema() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command_message),
        )
        .branch(dptree::filter(is_plain_text).endpoint(handle_text_message))
}

fn is_plain_text(msg: Message) -> bool {
    msg.text().is_some_and(|text| !text.starts_with('/'))
}

async fn handle_command_message(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<Services>,
) -> ResponseResult<()> {
    info!(chat_id = %msg.chat.id, command = ?cmd, "📨 Command received");

    let sender = msg.from.as_ref().map(|user| Sender {
        id: user.id.0,
        first_name: user.first_name.clone(),
    });
    let reply = TelegramReply::new(bot, msg.chat.id);
    handle_command(&reply, &services, cmd, sender.as_ref()).await;
    Ok(())
}

async fn handle_text_message(bot: Bot, msg: Message) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    debug!(chat_id = %msg.chat.id, chars = text.len(), "Echoing text message");

    let reply = TelegramReply::new(bot, msg.chat.id);
    handle_text(&reply, text).await;
    Ok(())
}
