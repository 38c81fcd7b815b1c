//! The single outbound operation handlers need from the chat transport.

/// How the transport should interpret reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatting {
    Plain,
    MarkdownV2,
}

/// Sends a reply to whoever issued the command being handled.
pub trait Reply {
    fn reply(&self, text: &str, formatting: Formatting) -> impl Future<Output = Result<(), String>> + Send;
}
