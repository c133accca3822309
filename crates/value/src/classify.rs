//! Value classification.

use indexmap::IndexMap;
use serde_json::Value;

use crate::binary::unwrap_binary;

/// The semantic kind of an input value, with its contents.
///
/// Every downstream component (encoder, size accounting) matches on this type
/// instead of inspecting raw input. Maps keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedValue {
    String(String),
    /// Always finite; non-finite input classifies as [`ClassifiedValue::Unsupported`].
    Number(f64),
    Boolean(bool),
    Null,
    Binary(Vec<u8>),
    List(Vec<ClassifiedValue>),
    Map(IndexMap<String, ClassifiedValue>),
    Unsupported,
}

impl ClassifiedValue {
    pub fn as_map(&self) -> Option<&IndexMap<String, ClassifiedValue>> {
        match self {
            ClassifiedValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// Classifies a JSON value. Total: every input maps to exactly one variant.
///
/// Strings holding a binary data URI (see [`crate::binary`]) classify as
/// `Binary`; a data URI with a corrupt payload classifies as `Unsupported`.
pub fn classify(value: &Value) -> ClassifiedValue {
    match value {
        Value::Null => ClassifiedValue::Null,
        Value::Bool(b) => ClassifiedValue::Boolean(*b),
        Value::Number(n) => n
            .as_f64()
            .map(ClassifiedValue::from)
            .unwrap_or(ClassifiedValue::Unsupported),
        Value::String(s) => match unwrap_binary(s) {
            None => ClassifiedValue::String(s.clone()),
            Some(Ok(bytes)) => ClassifiedValue::Binary(bytes),
            Some(Err(_)) => ClassifiedValue::Unsupported,
        },
        Value::Array(items) => ClassifiedValue::List(items.iter().map(classify).collect()),
        Value::Object(map) => ClassifiedValue::Map(
            map.iter()
                .map(|(key, val)| (key.clone(), classify(val)))
                .collect(),
        ),
    }
}

impl From<&Value> for ClassifiedValue {
    fn from(value: &Value) -> Self {
        classify(value)
    }
}

impl From<Value> for ClassifiedValue {
    fn from(value: Value) -> Self {
        classify(&value)
    }
}

impl From<f64> for ClassifiedValue {
    fn from(n: f64) -> Self {
        if n.is_finite() {
            ClassifiedValue::Number(n)
        } else {
            ClassifiedValue::Unsupported
        }
    }
}

impl From<i64> for ClassifiedValue {
    fn from(n: i64) -> Self {
        ClassifiedValue::Number(n as f64)
    }
}

impl From<bool> for ClassifiedValue {
    fn from(b: bool) -> Self {
        ClassifiedValue::Boolean(b)
    }
}

impl From<&str> for ClassifiedValue {
    fn from(s: &str) -> Self {
        ClassifiedValue::String(s.to_owned())
    }
}

impl From<String> for ClassifiedValue {
    fn from(s: String) -> Self {
        ClassifiedValue::String(s)
    }
}

impl From<Vec<u8>> for ClassifiedValue {
    fn from(bytes: Vec<u8>) -> Self {
        ClassifiedValue::Binary(bytes)
    }
}

impl<T: Into<ClassifiedValue>> From<Option<T>> for ClassifiedValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ClassifiedValue::Null)
    }
}
