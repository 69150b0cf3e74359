//! Reading and parsing input documents
//!
//! A document is the top-level JSON object of a file. Keys keep the order
//! they have in the file; a key that appears twice keeps its first position
//! and takes the last value.

use crate::error::{ExtractError, Result};
use crate::Document;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read `path` and parse it as a JSON object.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ExtractError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ExtractError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    parse_document(&bytes, path)
}

/// Parse raw bytes as a JSON object. `path` is only used for error reporting.
pub fn parse_document(bytes: &[u8], path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let value: Value = serde_json::from_slice(bytes).map_err(|source| ExtractError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(document) => {
            debug!(attributes = document.len(), "parsed document");
            Ok(document)
        }
        other => Err(ExtractError::NotAnObject {
            path: path.to_path_buf(),
            found: kind_name(&other),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn loads_object_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"ZETA": 1, "ALPHA": [true, null], "MID": {"x": "y"}}"#)
            .unwrap();

        let document = load_document(file.path()).unwrap();
        let keys: Vec<_> = document.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["ZETA", "ALPHA", "MID"]);
        assert_eq!(document["ALPHA"], json!([true, null]));
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match load_document(&path) {
            Err(ExtractError::FileNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(dir.path()).unwrap_err();
        assert!(
            matches!(err, ExtractError::Read { .. }),
            "unexpected error: {:?}",
            err
        );
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = parse_document(b"{\"ID\": ", "broken.json").unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn top_level_must_be_an_object() {
        let err = parse_document(b"[1, 2, 3]", "list.json").unwrap_err();
        match err {
            ExtractError::NotAnObject { found, .. } => assert_eq!(found, "array"),
            other => panic!("expected NotAnObject, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_keys_keep_first_position_and_last_value() {
        let document = parse_document(br#"{"A": 1, "B": 2, "A": 3}"#, "dup.json").unwrap();
        let keys: Vec<_> = document.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(document["A"], json!(3));
    }

    #[test]
    fn non_ascii_content_survives_parsing() {
        let document = parse_document("{\"TITLE\": \"判決 – Zürich\"}".as_bytes(), "u.json")
            .unwrap();
        assert_eq!(document["TITLE"], json!("判決 – Zürich"));
    }

    #[test]
    fn numbers_keep_their_source_text() {
        let document = parse_document(
            br#"{"WIDE": 12345678901234567890123, "HUGE": 1e400, "EXACT": 0.1000000000000000055511151231257827}"#,
            "numbers.json",
        )
        .unwrap();
        assert_eq!(document["WIDE"].to_string(), "12345678901234567890123");
        assert_eq!(document["HUGE"].to_string(), "1e400");
        assert_eq!(
            document["EXACT"].to_string(),
            "0.1000000000000000055511151231257827"
        );
    }
}
