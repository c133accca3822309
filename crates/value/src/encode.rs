//! Plain value to attribute node encoding.

use serde_json::Value;

use crate::number::format_f64;
use crate::{classify, AttributeMap, AttributeNode, ClassifiedValue};

/// Encodes a classified value into an attribute node.
///
/// Never fails. Unsupported kinds, non-finite numbers, blank strings and empty
/// containers (including empty binary) become `NULL(true)`. Only the container
/// itself collapses: a list of nulls stays an `L` of `NULL` nodes.
pub fn encode(value: &ClassifiedValue) -> AttributeNode {
    match value {
        ClassifiedValue::String(s) => {
            let trimmed = trim(s);
            if trimmed.is_empty() {
                AttributeNode::Null
            } else {
                AttributeNode::S(trimmed.to_owned())
            }
        }
        ClassifiedValue::Number(n) => format_f64(*n)
            .map(AttributeNode::N)
            .unwrap_or(AttributeNode::Null),
        ClassifiedValue::Boolean(b) => AttributeNode::Bool(*b),
        ClassifiedValue::Null | ClassifiedValue::Unsupported => AttributeNode::Null,
        ClassifiedValue::Binary(bytes) if bytes.is_empty() => AttributeNode::Null,
        ClassifiedValue::Binary(bytes) => AttributeNode::B(bytes.clone()),
        ClassifiedValue::List(items) if items.is_empty() => AttributeNode::Null,
        ClassifiedValue::List(items) => AttributeNode::L(items.iter().map(encode).collect()),
        ClassifiedValue::Map(map) => {
            let encoded: AttributeMap = map
                .iter()
                .map(|(key, val)| (key.clone(), encode(val)))
                .collect();
            if encoded.is_empty() {
                AttributeNode::Null
            } else {
                AttributeNode::M(encoded)
            }
        }
    }
}

/// Classifies and encodes a JSON value.
pub fn encode_json(value: &Value) -> AttributeNode {
    encode(&classify(value))
}

/// Encodes a whole record into a top-level item.
///
/// Returns `None` unless `value` is a map with at least one key.
pub fn encode_record(value: &ClassifiedValue) -> Option<AttributeMap> {
    match encode(value) {
        AttributeNode::M(map) => Some(map),
        _ => None,
    }
}

pub fn encode_record_json(value: &Value) -> Option<AttributeMap> {
    encode_record(&classify(value))
}

/// Returns `attribute` when present, otherwise the canonical `NULL(true)` node.
pub fn attribute_or_null(attribute: Option<AttributeNode>) -> AttributeNode {
    attribute.unwrap_or(AttributeNode::Null)
}

/// Returns `value` when truthy, otherwise `null`.
pub fn object_or_null(value: Value) -> Value {
    if is_truthy(&value) {
        value
    } else {
        Value::Null
    }
}

/// Truthiness as understood by the store's JavaScript clients: `null`,
/// `false`, `0` and `""` are falsy; every container is truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Same character set as `String.prototype.trim`: Unicode whitespace and the
// BOM, but not NEL (U+0085).
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}
