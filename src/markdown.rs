//! MarkdownV2 helpers.
//!
//! Telegram rejects MarkdownV2 messages containing an unescaped reserved
//! character, so every piece of user or API supplied text goes through
//! [`escape`] before it is interpolated into a template.

use std::sync::LazyLock;

use regex::Regex;

static RESERVED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_*\[\]()~`>#+\-=|{}.!]").expect("reserved pattern is valid"));

/// Prefix every MarkdownV2 reserved character with a backslash.
///
/// Backslashes already present are left alone.
pub fn escape(text: &str) -> String {
    RESERVED.replace_all(text, r"\$0").into_owned()
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVED_CHARS: &str = "_*[]()~`>#+-=|{}.!";

    #[test]
    fn test_escapes_every_reserved_char() {
        for c in RESERVED_CHARS.chars() {
            assert_eq!(escape(&c.to_string()), format!("\\{c}"), "char {c:?}");
        }
    }

    #[test]
    fn test_leaves_other_chars_alone() {
        let text = "hola, qué tal? 100% & \"quoted\" 'single' @user $5 ^ / : ¿ñ?";
        assert_eq!(escape(text), text);
    }

    #[test]
    fn test_does_not_escape_backslash() {
        assert_eq!(escape(r"a\b"), r"a\b");
        assert_eq!(escape(r"\."), r"\\.");
    }

    #[test]
    fn test_only_inserts_one_backslash_per_reserved_char() {
        let text = "It was serendipity. (Really!) a-b_c";
        let escaped = escape(text);
        let reserved = text.chars().filter(|c| RESERVED_CHARS.contains(*c)).count();
        assert_eq!(escaped.chars().count(), text.chars().count() + reserved);
        assert_eq!(escaped.replace('\\', ""), text);
    }

    #[test]
    fn test_double_escape_is_detectable() {
        let once = escape("a.b");
        let twice = escape(&once);
        assert_eq!(once, r"a\.b");
        assert_eq!(twice, r"a\\.b");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("serendipity"), "Serendipity");
        assert_eq!(capitalize("sERENDIPITY"), "Serendipity");
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize("ñandú"), "Ñandú");
        assert_eq!(capitalize(""), "");
    }
}
