//! Pulls the fields each command needs out of a dictionary payload.

use std::collections::BTreeSet;

use super::entry::{Entry, Meaning};

/// Shown when the first definition carries no example sentence.
pub const NO_EXAMPLE: &str = "Sin ejemplo.";

/// Raw (unescaped) fields rendered by `/definir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionSummary {
    pub part_of_speech: String,
    pub definition: String,
    pub example: String,
}

/// First entry, first meaning, first definition.
///
/// Returns `None` when any of those lists is empty or the part of speech or
/// definition text is missing. A missing example falls back to [`NO_EXAMPLE`].
pub fn extract_definition(entries: &[Entry]) -> Option<DefinitionSummary> {
    let meaning = entries.first()?.meanings().first()?;
    let part_of_speech = meaning.part_of_speech.as_ref()?;
    let first = meaning.definitions().first()?;
    let definition = first.definition.as_ref()?;

    Some(DefinitionSummary {
        part_of_speech: part_of_speech.clone(),
        definition: definition.clone(),
        example: first.example.clone().unwrap_or_else(|| NO_EXAMPLE.to_string()),
    })
}

/// Union of the synonyms of every meaning of every entry.
pub fn extract_synonyms(entries: &[Entry]) -> BTreeSet<String> {
    collect(entries, Meaning::synonyms)
}

/// Union of the antonyms of every meaning of every entry.
pub fn extract_antonyms(entries: &[Entry]) -> BTreeSet<String> {
    collect(entries, Meaning::antonyms)
}

fn collect(entries: &[Entry], field: fn(&Meaning) -> &[String]) -> BTreeSet<String> {
    entries
        .iter()
        .flat_map(Entry::meanings)
        .flat_map(field)
        .cloned()
        .collect()
}
