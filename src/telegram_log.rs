//! tracing layer that forwards warnings and errors to a Telegram chat.
//!
//! Lines are buffered and flushed on an interval so a burst of failures
//! (an API outage hitting every command) becomes a few messages, not one
//! per event.

use std::time::Duration;

use teloxide::prelude::*;
use teloxide::types::ChatId;
use tokio::sync::mpsc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

const FLUSH_INTERVAL: Duration = Duration::from_secs(5);
/// Telegram rejects messages longer than 4096 characters.
const MAX_MESSAGE_CHARS: usize = 4000;
const MAX_BUFFERED_LINES: usize = 50;

pub struct TelegramLogLayer {
    tx: mpsc::UnboundedSender<String>,
}

impl TelegramLogLayer {
    /// Must be called from within a tokio runtime.
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        tokio::spawn(async move {
            let mut buffer: Vec<String> = Vec::new();
            let mut interval = tokio::time::interval(FLUSH_INTERVAL);

            loop {
                tokio::select! {
                    line = rx.recv() => match line {
                        Some(line) => {
                            buffer.push(line);
                            if buffer.len() >= MAX_BUFFERED_LINES {
                                flush(&bot, chat_id, &mut buffer).await;
                            }
                        }
                        None => {
                            flush(&bot, chat_id, &mut buffer).await;
                            break;
                        }
                    },
                    _ = interval.tick() => flush(&bot, chat_id, &mut buffer).await,
                }
            }
        });

        Self { tx }
    }
}

async fn flush(bot: &Bot, chat_id: ChatId, buffer: &mut Vec<String>) {
    if buffer.is_empty() {
        return;
    }
    for chunk in chunk_lines(buffer, MAX_MESSAGE_CHARS) {
        // Not logged through tracing: a failing send would feed back into this layer.
        if let Err(e) = bot.send_message(chat_id, chunk).await {
            eprintln!("Failed to send log to Telegram: {e}");
        }
    }
    buffer.clear();
}

/// Join lines into messages of at most `limit` characters, truncating any
/// single line that is longer than the limit on its own.
fn chunk_lines(lines: &[String], limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for line in lines {
        let line: String = if line.chars().count() > limit {
            let mut truncated: String = line.chars().take(limit.saturating_sub(3)).collect();
            truncated.push_str("...");
            truncated
        } else {
            line.clone()
        };
        let line_chars = line.chars().count();

        if !current.is_empty() && current_chars + 1 + line_chars > limit {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if !current.is_empty() {
            current.push('\n');
            current_chars += 1;
        }
        current.push_str(&line);
        current_chars += line_chars;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl MessageVisitor {
    fn into_line(self, level: Level, target: &str) -> String {
        let icon = if level == Level::ERROR { "❌" } else { "⚠️" };
        if self.fields.is_empty() {
            format!("{icon} [{target}] {}", self.message)
        } else {
            format!("{icon} [{target}] {} ({})", self.message, self.fields.join(", "))
        }
    }
}

impl<S: Subscriber> Layer<S> for TelegramLogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = *metadata.level();

        // Only WARN and ERROR reach the chat
        if level > Level::WARN {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        if self.tx.send(visitor.into_line(level, metadata.target())).is_err() {
            eprintln!("Log channel closed, message dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_lines_share_one_chunk() {
        let chunks = chunk_lines(&lines(&["a", "b", "c"]), 100);
        assert_eq!(chunks, vec!["a\nb\nc".to_string()]);
    }

    #[test]
    fn test_splits_at_limit() {
        let chunks = chunk_lines(&lines(&["aaaa", "bbbb", "cccc"]), 9);
        assert_eq!(chunks, vec!["aaaa\nbbbb".to_string(), "cccc".to_string()]);
        assert!(chunks.iter().all(|c| c.chars().count() <= 9));
    }

    #[test]
    fn test_truncates_oversized_line() {
        let long = "x".repeat(20);
        let chunks = chunk_lines(&[long], 10);
        assert_eq!(chunks, vec!["xxxxxxx...".to_string()]);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let chunks = chunk_lines(&lines(&["ñññ", "ááá"]), 7);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_empty_buffer_has_no_chunks() {
        assert!(chunk_lines(&[], 10).is_empty());
    }

    #[test]
    fn test_line_format() {
        let visitor = MessageVisitor {
            message: "Dictionary API error".to_string(),
            fields: vec!["word=hello".to_string(), "status=503".to_string()],
        };
        assert_eq!(
            visitor.into_line(Level::WARN, "lexibot::dictionary::client"),
            "⚠️ [lexibot::dictionary::client] Dictionary API error (word=hello, status=503)"
        );
    }
}
