//! End-to-end scenarios for the dictionary pipeline: payload in, reply text
//! out.

use super::*;

fn found(json: &str) -> LookupResult {
    LookupResult::Found(serde_json::from_str(json).unwrap())
}

// =============================================================================
// DEFINE
// =============================================================================

mod define {
    use super::*;

    #[test]
    fn test_serendipity() {
        let result = found(
            r#"[{"word": "serendipity", "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [{"definition": "A pleasant surprise.", "example": "It was serendipity."}]
            }]}]"#,
        );

        let reply = render_definition("Serendipity", result);
        assert!(reply.starts_with("*Serendipity*\n"));
        assert!(reply.contains("*Tipo:* Noun"));
        assert!(reply.contains(r"*Definición:* A pleasant surprise\."));
        assert!(reply.contains(r"*Ejemplo:* _It was serendipity\._"));
    }

    #[test]
    fn test_empty_entry_list_is_no_clear_definition() {
        let reply = render_definition("hello", found("[]"));
        assert_eq!(reply, r"No encontré una definición clara para *Hello*\.");
    }

    #[test]
    fn test_empty_meanings_is_no_clear_definition() {
        let reply = render_definition("hello", found(r#"[{"meanings": []}, {"meanings": []}]"#));
        assert_eq!(reply, r"No encontré una definición clara para *Hello*\.");
    }

    #[test]
    fn test_parse_error_is_no_clear_definition() {
        let reply = render_definition("hello", LookupResult::ParseError("bad".into()));
        assert_eq!(reply, r"No encontré una definición clara para *Hello*\.");
    }

    #[test]
    fn test_not_found_names_the_word() {
        let reply = render_definition("zzyzxq", LookupResult::NotFound);
        assert!(reply.contains("*Zzyzxq*"));
        assert!(reply.contains("no fue encontrada"));
    }
}

// =============================================================================
// RELATED WORDS
// =============================================================================

mod related {
    use super::*;

    const PAYLOAD: &str = r#"[
        {"meanings": [{"synonyms": ["a", "b"], "antonyms": ["z"]}]},
        {"meanings": [{"synonyms": ["b", "c"]}, {"antonyms": ["y", "z"]}]}
    ]"#;

    #[test]
    fn test_synonyms_deduplicated() {
        let reply = render_related(Relation::Synonyms, "word", found(PAYLOAD));
        assert_eq!(reply, "*Sinónimos de Word*:\na, b, c");
    }

    #[test]
    fn test_antonyms_deduplicated() {
        let reply = render_related(Relation::Antonyms, "word", found(PAYLOAD));
        assert_eq!(reply, "*Antónimos de Word*:\ny, z");
    }

    #[test]
    fn test_none_found() {
        let reply = render_related(Relation::Antonyms, "word", found(r#"[{"meanings": [{}]}]"#));
        assert_eq!(reply, r"No encontré antónimos para *Word*\.");
    }

    #[test]
    fn test_parse_error_is_no_clear_result() {
        let reply = render_related(Relation::Synonyms, "word", LookupResult::ParseError("x".into()));
        assert_eq!(reply, r"No encontré un resultado claro para *Word*\.");
    }
}

// =============================================================================
// FAILURES
// =============================================================================

mod failures {
    use super::*;

    #[test]
    fn test_each_failure_has_its_own_reply() {
        let not_found = render_definition("w", LookupResult::NotFound);
        let server = render_definition("w", LookupResult::ServerError(500));
        let transport = render_definition("w", LookupResult::TransportError("refused".into()));

        assert_eq!(server, format::format_server_error());
        assert_eq!(transport, format::format_transport_error());
        assert_ne!(not_found, server);
        assert_ne!(server, transport);
    }

    #[test]
    fn test_failure_replies_do_not_leak_details() {
        let reply = render_related(
            Relation::Synonyms,
            "w",
            LookupResult::TransportError("dns error: secret.internal".into()),
        );
        assert!(!reply.contains("secret"));

        let reply = render_definition("w", LookupResult::ServerError(502));
        assert!(!reply.contains("502"));
    }

    #[test]
    fn test_related_failures_match_define_failures() {
        assert_eq!(
            render_related(Relation::Synonyms, "w", LookupResult::NotFound),
            render_definition("w", LookupResult::NotFound)
        );
        assert_eq!(
            render_related(Relation::Antonyms, "w", LookupResult::ServerError(500)),
            render_definition("w", LookupResult::ServerError(500))
        );
    }
}
