//! Attribute node to plain value decoding.

use serde_json::{Map, Value};

use crate::binary::wrap_binary;
use crate::{AttributeMap, AttributeNode};

/// Converts an attribute node back into a plain JSON value.
///
/// `N` text that does not parse as a JSON number is kept as a string. Binary
/// payloads come back as data URIs, sets as arrays.
pub fn decode(node: &AttributeNode) -> Value {
    match node {
        AttributeNode::S(s) => Value::String(s.clone()),
        AttributeNode::N(n) => decode_number(n),
        AttributeNode::Bool(b) => Value::Bool(*b),
        AttributeNode::Null => Value::Null,
        AttributeNode::B(bytes) => Value::String(wrap_binary(bytes)),
        AttributeNode::L(items) => Value::Array(items.iter().map(decode).collect()),
        AttributeNode::M(map) => decode_record(map),
        AttributeNode::Ss(items) => {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        }
        AttributeNode::Ns(items) => Value::Array(items.iter().map(|n| decode_number(n)).collect()),
        AttributeNode::Bs(items) => Value::Array(
            items
                .iter()
                .map(|bytes| Value::String(wrap_binary(bytes)))
                .collect(),
        ),
    }
}

/// Converts a top-level item back into a JSON object.
pub fn decode_record(item: &AttributeMap) -> Value {
    let mut out = Map::with_capacity(item.len());
    for (key, node) in item {
        out.insert(key.clone(), decode(node));
    }
    Value::Object(out)
}

fn decode_number(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(number @ Value::Number(_)) => number,
        _ => Value::String(text.to_owned()),
    }
}
