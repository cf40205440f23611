//! Property-based tests - pragmatic approach testing core parse/serialize
//! guarantees across generated documents.

use bmx::{from_str, to_string, Document};
use proptest::prelude::*;

/// Block names: bracket-free, no surrounding spaces, so they survive header
/// trimming unchanged.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_ ]{0,10}[a-zA-Z0-9_]"
}

/// Content built from newline-terminated lines that never start with `[`,
/// the shape the serializer reproduces verbatim.
fn content_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 .,;=_-]{0,24}", 0..5)
        .prop_map(|lines| lines.iter().map(|l| format!("{l}\n")).collect())
}

fn document_strategy() -> impl Strategy<Value = Document> {
    prop::collection::vec((name_strategy(), content_strategy()), 1..8).prop_map(|entries| {
        let mut document = Document::new();
        for (name, content) in entries {
            document.set(name, content);
        }
        document
    })
}

proptest! {
    #[test]
    fn prop_roundtrip(document in document_strategy()) {
        let text = to_string(&document).unwrap();
        let parsed = from_str(&text).unwrap();
        prop_assert_eq!(parsed, document);
    }

    #[test]
    fn prop_order_preserved(document in document_strategy()) {
        let text = to_string(&document).unwrap();
        let parsed = from_str(&text).unwrap();
        prop_assert_eq!(parsed.keys(), document.keys());
    }

    #[test]
    fn prop_set_twice_keeps_position(
        document in document_strategy(),
        content in content_strategy(),
    ) {
        let mut updated = document.clone();
        let target = document.keys()[0].clone();
        updated.set(target.clone(), content.clone());

        prop_assert_eq!(updated.len(), document.len());
        prop_assert_eq!(updated.keys(), document.keys());
        prop_assert_eq!(updated.get(&target).unwrap(), content.as_str());
    }

    #[test]
    fn prop_serialized_blocks_start_with_headers(document in document_strategy()) {
        let text = to_string(&document).unwrap();
        for name in document.keys() {
            let header = format!("[ {} ]\n", name);
            prop_assert!(text.contains(&header));
        }
        prop_assert!(text.starts_with("[ "));
    }

    #[test]
    fn prop_parse_never_panics(input in "[ -~\n]{0,200}") {
        // any printable-ASCII input either parses or reports a typed error
        let _ = from_str(&input);
    }
}
