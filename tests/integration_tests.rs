use bmx::{bmx, from_reader, from_str, to_string, to_writer, Document, Error};
use std::io::Cursor;

#[test]
fn test_parse_two_blocks() {
    let text = "[ config ]\nwidth = 800\nheight = 600\n[ shader ]\nvoid main() { }\n";
    let document = from_str(text).unwrap();

    assert_eq!(document.len(), 2);
    assert_eq!(document.get("config").unwrap(), "width = 800\nheight = 600\n");
    assert_eq!(document.get("shader").unwrap(), "void main() { }\n");
}

#[test]
fn test_order_preservation() {
    let text = "[ c ]\n3\n[ a ]\n1\n[ b ]\n2\n";
    let document = from_str(text).unwrap();
    assert_eq!(document.keys(), vec!["c", "a", "b"]);
}

#[test]
fn test_roundtrip() {
    let text = "[ first ]\nline one\nline two\n[ second ]\n[ third ]\ntail\n";
    let document = from_str(text).unwrap();
    let rendered = to_string(&document).unwrap();
    println!("Rendered BMX:\n{}", rendered);

    assert_eq!(rendered, text);
    assert_eq!(from_str(&rendered).unwrap(), document);
}

#[test]
fn test_set_insert_vs_update() {
    let mut document = Document::new();
    document.set("a".to_string(), "1".to_string());
    document.set("b".to_string(), "2".to_string());
    document.set("a".to_string(), "3".to_string());

    // updating never grows the document or moves the entry
    assert_eq!(document.keys(), vec!["a", "b"]);
    assert_eq!(document.get("a").unwrap(), "3");
}

#[test]
fn test_get_unknown_name() {
    let document = Document::new();
    let err = document.get("ghost").unwrap_err();
    assert!(matches!(err, Error::BlockNotFound(name) if name == "ghost"));
}

#[test]
fn test_remove_preserves_order_of_rest() {
    let mut document = bmx! {
        "a" => "1\n",
        "b" => "2\n",
        "c" => "3\n",
    };

    assert_eq!(document.remove("b").unwrap(), "2\n");
    assert_eq!(document.keys(), vec!["a", "c"]);
    assert!(matches!(document.remove("b"), Err(Error::BlockNotFound(_))));
}

#[test]
fn test_keys_is_a_snapshot() {
    let mut document = bmx! { "a" => "1\n" };
    let keys = document.keys();
    document.set("b".to_string(), "2\n".to_string());
    document.remove("a").unwrap();

    assert_eq!(keys, vec!["a"]);
    assert_eq!(document.keys(), vec!["b"]);
}

#[test]
fn test_contains() {
    let document = bmx! { "a" => "1\n" };
    assert!(document.contains("a"));
    assert!(!document.contains("A"));
    assert!(!document.contains(" a"));
}

#[test]
fn test_serialize_empty_document_fails() {
    let document = Document::new();
    assert!(matches!(to_string(&document), Err(Error::EmptyDocument)));
}

#[test]
fn test_serialize_empty_content() {
    let document = bmx! { "empty" => "" };
    assert_eq!(to_string(&document).unwrap(), "[ empty ]\n");
}

#[test]
fn test_from_reader() {
    let source = Cursor::new(b"[ a ]\nx\n[ b ]\ny\n".to_vec());
    let document = from_reader(source).unwrap();
    assert_eq!(document.keys(), vec!["a", "b"]);
    assert_eq!(document.get("b").unwrap(), "y\n");
}

#[test]
fn test_from_reader_io_failure() {
    struct Broken;

    impl std::io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"))
        }
    }

    let reader = std::io::BufReader::new(Broken);
    let err = from_reader(reader).unwrap_err();
    assert!(matches!(err, Error::Io(msg) if msg.contains("disk on fire")));
}

#[test]
fn test_to_writer_roundtrip() {
    let document = bmx! { "a" => "x\n", "b" => "y\n" };
    let mut buffer = Vec::new();
    to_writer(&mut buffer, &document).unwrap();

    let parsed = from_reader(Cursor::new(buffer)).unwrap();
    assert_eq!(parsed, document);
}

#[test]
fn test_document_equality_is_order_sensitive() {
    let ab = bmx! { "a" => "1\n", "b" => "2\n" };
    let ba = bmx! { "b" => "2\n", "a" => "1\n" };
    assert_ne!(ab, ba);
    assert_eq!(ab, ab.clone());
}

#[test]
fn test_serde_json_roundtrip() {
    let document = bmx! {
        "zeta" => "last name, first position\n",
        "alpha" => "first name, last position\n",
    };

    let json = serde_json::to_string(&document).unwrap();
    println!("Document as JSON: {}", json);
    // serialization walks blocks in insertion order
    assert!(json.starts_with("{\"zeta\""));

    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, document);
}

#[test]
fn test_collect_from_iterator() {
    let document: Document = vec![
        ("a".to_string(), "1\n".to_string()),
        ("b".to_string(), "2\n".to_string()),
    ]
    .into_iter()
    .collect();

    assert_eq!(document.keys(), vec!["a", "b"]);
    let pairs: Vec<(String, String)> = document.into_iter().collect();
    assert_eq!(pairs[0].0, "a");
}
