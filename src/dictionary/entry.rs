//! Response shape of the dictionary API.
//!
//! The API does not promise to populate any field, so everything is optional
//! and tolerates both missing keys and explicit `null`.

use serde::Deserialize;

/// One record for a headword.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Option<Vec<Meaning>>,
}

/// A part-of-speech grouping within an entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meaning {
    #[serde(default, rename = "partOfSpeech")]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Option<Vec<Definition>>,
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
    #[serde(default)]
    pub antonyms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
    #[serde(default)]
    pub antonyms: Option<Vec<String>>,
}

impl Entry {
    pub fn meanings(&self) -> &[Meaning] {
        self.meanings.as_deref().unwrap_or_default()
    }
}

impl Meaning {
    pub fn definitions(&self) -> &[Definition] {
        self.definitions.as_deref().unwrap_or_default()
    }

    pub fn synonyms(&self) -> &[String] {
        self.synonyms.as_deref().unwrap_or_default()
    }

    pub fn antonyms(&self) -> &[String] {
        self.antonyms.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_entry() {
        let json = r#"[{
            "word": "hello",
            "phonetic": "həˈləʊ",
            "phonetics": [{"text": "həˈləʊ", "audio": ""}],
            "origin": "early 19th century",
            "meanings": [{
                "partOfSpeech": "exclamation",
                "definitions": [{
                    "definition": "used as a greeting",
                    "example": "hello there, Katie!",
                    "synonyms": [],
                    "antonyms": []
                }],
                "synonyms": ["hi"],
                "antonyms": ["bye"]
            }]
        }]"#;

        let entries: Vec<Entry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word.as_deref(), Some("hello"));
        let meaning = &entries[0].meanings()[0];
        assert_eq!(meaning.part_of_speech.as_deref(), Some("exclamation"));
        assert_eq!(meaning.definitions()[0].example.as_deref(), Some("hello there, Katie!"));
        assert_eq!(meaning.synonyms(), ["hi".to_string()]);
        assert_eq!(meaning.antonyms(), ["bye".to_string()]);
    }

    #[test]
    fn test_tolerates_missing_and_null_fields() {
        let json = r#"[{}, {"meanings": null}, {"meanings": [{"synonyms": null}]}]"#;

        let entries: Vec<Entry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].meanings().is_empty());
        assert!(entries[1].meanings().is_empty());
        let meaning = &entries[2].meanings()[0];
        assert!(meaning.part_of_speech.is_none());
        assert!(meaning.definitions().is_empty());
        assert!(meaning.synonyms().is_empty());
        assert!(meaning.antonyms().is_empty());
    }

    #[test]
    fn test_rejects_non_array_payload() {
        let json = r#"{"title": "No Definitions Found"}"#;
        assert!(serde_json::from_str::<Vec<Entry>>(json).is_err());
    }
}
