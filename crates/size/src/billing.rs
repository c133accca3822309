//! Kilobyte billing of whole items.

use dynamo_attr_value::{classify, ClassifiedValue};
use indexmap::IndexMap;
use serde_json::Value;

use crate::object_size;

const KILOBYTE: f64 = 1024.0;

/// Converts a raw byte total into billed kilobytes.
///
/// The byte total is first expressed in kilobytes at two-decimal precision and
/// then rounded up, so 1025 bytes (1.00 KB) bill as 1 while 1536 bytes bill as 2.
pub fn bytes_to_billed_kb(bytes: usize) -> u64 {
    let kb = (bytes as f64 / KILOBYTE * 100.0).round() / 100.0;
    kb.ceil() as u64
}

/// Billed kilobytes of one item.
///
/// `None` when `item` is not a map or has no fields: no size could be computed.
pub fn item_size_count(item: &ClassifiedValue) -> Option<u64> {
    let map = item.as_map().filter(|map| !map.is_empty())?;
    let bytes = map
        .iter()
        .map(|(key, val)| object_size(key, val))
        .sum::<usize>();
    Some(bytes_to_billed_kb(bytes))
}

pub fn item_size_count_json(item: &Value) -> Option<u64> {
    item_size_count(&classify(item))
}

/// Total billed kilobytes of a batch: each item rounds on its own, then the
/// rounded figures are added. Items without a size are skipped.
pub fn billed_size_total<'a, I>(items: I) -> u64
where
    I: IntoIterator<Item = &'a ClassifiedValue>,
{
    items.into_iter().filter_map(item_size_count).sum()
}

/// Raw byte size of each top-level field, in field order.
pub fn field_sizes(item: &ClassifiedValue) -> Option<IndexMap<String, usize>> {
    let map = item.as_map()?;
    Some(
        map.iter()
            .map(|(key, val)| (key.clone(), object_size(key, val)))
            .collect(),
    )
}
