//! MarkdownV2 templates for dictionary replies.
//!
//! Every function returns text that is ready to send with
//! `ParseMode::MarkdownV2`: interpolated content goes through
//! [`escape`], template punctuation is escaped by hand.

use std::collections::BTreeSet;

use super::extract::DefinitionSummary;
use crate::markdown::{capitalize, escape};

const SEPARATOR: &str = r"\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-\-";

/// Which related-word list a reply is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Synonyms,
    Antonyms,
}

impl Relation {
    fn title(self) -> &'static str {
        match self {
            Relation::Synonyms => "Sinónimos",
            Relation::Antonyms => "Antónimos",
        }
    }

    fn lowercase(self) -> &'static str {
        match self {
            Relation::Synonyms => "sinónimos",
            Relation::Antonyms => "antónimos",
        }
    }
}

/// Bold, escaped, capitalized form of the word the user asked about.
fn headword(word: &str) -> String {
    format!("*{}*", escape(&capitalize(word)))
}

pub fn format_definition(word: &str, summary: &DefinitionSummary) -> String {
    format!(
        "{}\n{}\n🗣️ *Tipo:* {}\n📖 *Definición:* {}\n💡 *Ejemplo:* _{}_",
        headword(word),
        SEPARATOR,
        escape(&capitalize(&summary.part_of_speech)),
        escape(&summary.definition),
        escape(&capitalize(&summary.example)),
    )
}

pub fn format_related(relation: Relation, word: &str, words: &BTreeSet<String>) -> String {
    if words.is_empty() {
        return format!("No encontré {} para {}\\.", relation.lowercase(), headword(word));
    }

    let list = words.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    format!(
        "*{} de {}*:\n{}",
        relation.title(),
        escape(&capitalize(word)),
        escape(&list)
    )
}

pub fn format_searching(word: &str) -> String {
    format!("Buscando definición para {}\\.\\.\\. 📖", headword(word))
}

pub fn format_not_found(word: &str) -> String {
    format!(
        "Lo siento, la palabra {} no fue encontrada en el diccionario\\.",
        headword(word)
    )
}

pub fn format_no_clear_definition(word: &str) -> String {
    format!("No encontré una definición clara para {}\\.", headword(word))
}

pub fn format_no_clear_result(word: &str) -> String {
    format!("No encontré un resultado claro para {}\\.", headword(word))
}

pub fn format_server_error() -> String {
    "Error al consultar el diccionario\\. Intenta de nuevo\\.".to_string()
}

pub fn format_transport_error() -> String {
    "Error de conexión al servidor del diccionario\\.".to_string()
}
