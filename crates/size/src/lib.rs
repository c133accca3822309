//! Item size accounting under the store's billing rules.
//!
//! Every size primitive takes the field `name` (whose UTF-8 length always
//! counts) together with the value. Containers add a fixed overhead of 3 bytes
//! plus 3 bytes per element. A whole item is billed by summing raw bytes over
//! its top-level fields and rounding up to whole kilobytes exactly once.

mod billing;

pub use billing::{
    billed_size_total, bytes_to_billed_kb, field_sizes, item_size_count, item_size_count_json,
};

use dynamo_attr_value::number::fraction_digits;
use dynamo_attr_value::ClassifiedValue;
use indexmap::IndexMap;
use serde_json::Value;

/// Fixed overhead of a list or map, and of each of its elements.
pub const CONTAINER_OVERHEAD: usize = 3;

/// UTF-8 byte length of a string.
pub fn utf8_size(s: &str) -> usize {
    s.len()
}

/// Byte length of a JSON string value. `None` for anything that is not a string.
pub fn byte_count(value: &Value) -> Option<usize> {
    value.as_str().map(utf8_size)
}

pub fn string_size_count(name: &str, s: &str) -> usize {
    utf8_size(name) + utf8_size(s)
}

/// One byte for the number, plus two bytes for every started pair of
/// fractional digits.
pub fn number_size_count(name: &str, n: f64) -> usize {
    let digits = fraction_digits(n);
    utf8_size(name) + 1 + digits.div_ceil(2) * 2
}

pub fn boolean_size_count(name: &str) -> usize {
    utf8_size(name) + 1
}

pub fn null_size_count(name: &str) -> usize {
    utf8_size(name) + 1
}

pub fn binary_size_count(name: &str, bytes: &[u8]) -> usize {
    utf8_size(name) + bytes.len()
}

/// List elements are sized without a name of their own.
pub fn list_size_count(name: &str, items: &[ClassifiedValue]) -> usize {
    items.iter().fold(
        utf8_size(name) + CONTAINER_OVERHEAD,
        |size, item| size + CONTAINER_OVERHEAD + object_size("", item),
    )
}

/// Map entries are sized with their key as the name.
pub fn map_size_count(name: &str, map: &IndexMap<String, ClassifiedValue>) -> usize {
    map.iter().fold(
        utf8_size(name) + CONTAINER_OVERHEAD,
        |size, (key, val)| size + CONTAINER_OVERHEAD + object_size(key, val),
    )
}

/// Size of a named field holding `value`. Unsupported values contribute nothing.
pub fn object_size(name: &str, value: &ClassifiedValue) -> usize {
    match value {
        ClassifiedValue::String(s) => string_size_count(name, s),
        ClassifiedValue::Number(n) => number_size_count(name, *n),
        ClassifiedValue::Boolean(_) => boolean_size_count(name),
        ClassifiedValue::Null => null_size_count(name),
        ClassifiedValue::Binary(bytes) => binary_size_count(name, bytes),
        ClassifiedValue::List(items) => list_size_count(name, items),
        ClassifiedValue::Map(map) => map_size_count(name, map),
        ClassifiedValue::Unsupported => 0,
    }
}
