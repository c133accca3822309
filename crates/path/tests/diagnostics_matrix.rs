//! Resolver configuration and the warnings emitted for malformed paths.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use dynamo_attr_path::{build_path_index, PathError, PathOptions, PathResolver};
use dynamo_attr_value::encode_record_json;
use serde_json::json;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture_logs(run: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    captured.text()
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn options_deserialize_into_a_resolver() {
    let options: PathOptions = serde_json::from_value(json!({"delimiter": "/"})).unwrap();
    let resolver = PathResolver::new(options).unwrap();
    assert_eq!(resolver.delimiter(), "/");

    let index = build_path_index(&json!({"a": {"b.c": 1}}));
    assert_eq!(
        resolver.to_array_path(&index, "a/b.c"),
        Some(vec!["a".to_string(), "b.c".to_string()])
    );
}

#[test]
fn missing_options_fall_back_to_dot() {
    let options: PathOptions = serde_json::from_value(json!({})).unwrap();
    assert_eq!(options, PathOptions::default());
    assert_eq!(PathResolver::new(options).unwrap(), PathResolver::default());
}

#[test]
fn empty_delimiter_is_rejected() {
    let options: PathOptions = serde_json::from_value(json!({"delimiter": ""})).unwrap();
    assert_eq!(PathResolver::new(options), Err(PathError::InvalidDelimiter));
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

#[test]
fn malformed_path_emits_a_warning() {
    let logs = capture_logs(|| {
        let resolver = PathResolver::default();
        assert!(!resolver.has_property_at_path(&json!({"a": 1}), &json!(123)));
    });
    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(logs.contains("malformed path argument"), "logs: {logs}");
    assert!(logs.contains("value_at_path"), "logs: {logs}");
}

#[test]
fn unknown_first_field_emits_a_warning() {
    let item = encode_record_json(&json!({"a": 1})).unwrap();
    let logs = capture_logs(|| {
        let resolver = PathResolver::default();
        assert!(!resolver.has_attribute_at_path(&item, "missing.b"));
    });
    assert!(logs.contains("first path token is not a field of the item"), "logs: {logs}");
    assert!(logs.contains("missing"), "logs: {logs}");
}

#[test]
fn well_formed_paths_stay_quiet() {
    let logs = capture_logs(|| {
        let resolver = PathResolver::default();
        assert!(resolver.has_property_at_path(&json!({"a": [1]}), "a.0"));
        assert!(!resolver.has_property_at_path(&json!({"a": [1]}), "a.1"));
    });
    assert!(logs.is_empty(), "logs: {logs}");
}
