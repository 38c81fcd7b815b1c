//! Dictionary lookups: HTTP client, payload model, field extraction and
//! reply templates.

pub mod client;
pub mod entry;
pub mod extract;
pub mod format;

#[cfg(test)]
mod tests;

pub use client::{DictionaryClient, LookupResult, DEFAULT_DICTIONARY_API_URL};
pub use entry::{Definition, Entry, Meaning};
pub use extract::{extract_antonyms, extract_definition, extract_synonyms, DefinitionSummary};
pub use format::Relation;

/// Render a lookup outcome as the `/definir` reply.
pub fn render_definition(word: &str, result: LookupResult) -> String {
    match result {
        LookupResult::Found(entries) => match extract_definition(&entries) {
            Some(summary) => format::format_definition(word, &summary),
            None => format::format_no_clear_definition(word),
        },
        LookupResult::ParseError(_) => format::format_no_clear_definition(word),
        LookupResult::NotFound => format::format_not_found(word),
        LookupResult::ServerError(_) => format::format_server_error(),
        LookupResult::TransportError(_) => format::format_transport_error(),
    }
}

/// Render a lookup outcome as the `/sinonimos` or `/antonimos` reply.
pub fn render_related(relation: Relation, word: &str, result: LookupResult) -> String {
    match result {
        LookupResult::Found(entries) => {
            let words = match relation {
                Relation::Synonyms => extract_synonyms(&entries),
                Relation::Antonyms => extract_antonyms(&entries),
            };
            format::format_related(relation, word, &words)
        }
        LookupResult::ParseError(_) => format::format_no_clear_result(word),
        LookupResult::NotFound => format::format_not_found(word),
        LookupResult::ServerError(_) => format::format_server_error(),
        LookupResult::TransportError(_) => format::format_transport_error(),
    }
}
