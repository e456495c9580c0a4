use sdldiff::{parse_file, parse_file_with, parse_str, ParseConfig, ParseError, UNKNOWN_KIND};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_parse_multiple_blocks() {
    let text = "table users {\n  id\n  email\n}\n\ntable orders {\n  id\n}\n";
    let doc = parse_str(text).unwrap();

    assert_eq!(doc.len(), 2);
    let users = doc.get("users").unwrap();
    assert_eq!(users.kind, "table");
    assert_eq!(users.items.len(), 2);
    assert_eq!(doc.get("orders").unwrap().line, 6);
}

#[test]
fn test_items_are_trimmed_verbatim() {
    let doc = parse_str("svc a {\n   key = value  \n\tother line\n}").unwrap();
    let a = doc.get("a").unwrap();
    assert!(a.has_item("key = value"));
    assert!(a.has_item("other line"));
}

#[test]
fn test_extra_header_tokens_ignored() {
    let doc = parse_str("service foo extra tokens {\nport\n}").unwrap();
    let foo = doc.get("foo").unwrap();
    assert_eq!(foo.kind, "service");
    assert_eq!(foo.name, "foo");
}

#[test]
fn test_missing_kind_defaults_to_unknown() {
    let doc = parse_str("  {  \nitem\n}").unwrap();
    assert_eq!(doc.get("").unwrap().kind, UNKNOWN_KIND);
}

#[test]
fn test_empty_input() {
    let doc = parse_str("").unwrap();
    assert!(doc.is_empty());
    assert!(doc.skipped().is_empty());
}

#[test]
fn test_empty_block() {
    let doc = parse_str("service foo {\n}").unwrap();
    assert!(doc.get("foo").unwrap().items.is_empty());
}

#[test]
fn test_last_write_wins_on_duplicate_names() {
    let text = "service foo {\nport\n}\nqueue foo {\nretries\n}\n";
    let doc = parse_str(text).unwrap();

    assert_eq!(doc.len(), 1);
    assert_eq!(doc.overwritten(), 1);
    let foo = doc.get("foo").unwrap();
    assert_eq!(foo.kind, "queue");
    assert!(foo.has_item("retries"));
    assert!(!foo.has_item("port"));
}

#[test]
fn test_same_item_in_different_blocks_is_allowed() {
    let doc = parse_str("a x {\nid\n}\na y {\nid\n}").unwrap();
    assert!(doc.get("x").unwrap().has_item("id"));
    assert!(doc.get("y").unwrap().has_item("id"));
}

#[test]
fn test_duplicate_item_names_block() {
    let err = parse_str("\ntable users {\n id\n name\n id \n}").unwrap_err();
    assert_eq!(err.line(), Some(5));
    let message = err.to_string();
    assert!(message.contains("kind=table"));
    assert!(message.contains("name=users"));
    assert!(message.contains("id"));
}

#[test]
fn test_nesting_rejected_at_line() {
    let err = parse_str("a x {\n1\n}\nb y {\n2\n  c z {\n}\n}").unwrap_err();
    assert!(matches!(err, ParseError::NestedBlock { line: 6 }));
}

#[test]
fn test_dangling_close_rejected_at_line() {
    let err = parse_str("a x {\n}\n\n  }  \n").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedClose { line: 4 }));
}

#[test]
fn test_stray_lines_are_skipped() {
    let doc = parse_str("preamble\na x {\n1\n}\npostscript").unwrap();
    assert_eq!(doc.len(), 1);
    let texts: Vec<&str> = doc.skipped().iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["preamble", "postscript"]);
}

#[test]
fn test_parse_file_with_strict() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "service foo {{").unwrap();
    writeln!(file, "port").unwrap();

    let lenient = parse_file(file.path()).unwrap();
    assert!(lenient.is_empty());

    let err = parse_file_with(file.path(), &ParseConfig { strict: true }).unwrap_err();
    assert!(matches!(err, ParseError::UnterminatedBlock { line: 1, .. }));
}

#[test]
fn test_parse_file_not_found() {
    let err = parse_file(Path::new("/nonexistent/file.sdl")).unwrap_err();
    assert!(matches!(err, ParseError::FileNotFound { .. }));
    assert!(err.to_string().contains("/nonexistent/file.sdl"));
}
