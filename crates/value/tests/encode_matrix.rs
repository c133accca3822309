//! Attribute encoding matrix: emptiness collapse, nesting and wire output.

use dynamo_attr_value::{
    classify, decode, encode, encode_json, encode_record_json, AttributeNode, ClassifiedValue,
};
use indexmap::IndexMap;
use proptest::prelude::*;
use serde_json::json;

// ---------------------------------------------------------------------------
// Emptiness collapse
// ---------------------------------------------------------------------------

#[test]
fn empty_values_collapse_to_null() {
    assert_eq!(encode_json(&json!("")), AttributeNode::Null);
    assert_eq!(encode_json(&json!("   ")), AttributeNode::Null);
    assert_eq!(encode_json(&json!([])), AttributeNode::Null);
    assert_eq!(encode_json(&json!({})), AttributeNode::Null);
    assert_eq!(encode_json(&json!(null)), AttributeNode::Null);
}

#[test]
fn inner_emptiness_does_not_collapse_outer_list() {
    assert_eq!(
        encode_json(&json!([null])),
        AttributeNode::L(vec![AttributeNode::Null])
    );
    assert_eq!(
        encode_json(&json!(["", [], {}])),
        AttributeNode::L(vec![AttributeNode::Null, AttributeNode::Null, AttributeNode::Null])
    );
}

#[test]
fn map_keeps_keys_with_null_values() {
    let node = encode_json(&json!({"a": "", "b": {}}));
    let map = node.as_map().unwrap();
    assert_eq!(map.len(), 2);
    assert!(map.values().all(AttributeNode::is_null));
}

// ---------------------------------------------------------------------------
// Binary
// ---------------------------------------------------------------------------

#[test]
fn binary_encodes_as_b() {
    assert_eq!(
        encode(&ClassifiedValue::Binary(vec![1, 2])),
        AttributeNode::B(vec![1, 2])
    );
    assert_eq!(encode(&ClassifiedValue::Binary(vec![])), AttributeNode::Null);
    assert_eq!(
        encode_json(&json!("data:application/octet-stream;base64,AQI=")),
        AttributeNode::B(vec![1, 2])
    );
}

// ---------------------------------------------------------------------------
// Nested records
// ---------------------------------------------------------------------------

#[test]
fn nested_record_wire_form() {
    let record = json!({
        "name": " Rick ",
        "age": 70,
        "ratio": 0.5,
        "alive": true,
        "tags": ["a", 1, false],
        "meta": {"portal": {"gun": null}}
    });
    let item = encode_record_json(&record).unwrap();
    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        json!({
            "name": {"S": "Rick"},
            "age": {"N": "70"},
            "ratio": {"N": "0.5"},
            "alive": {"BOOL": true},
            "tags": {"L": [{"S": "a"}, {"N": "1"}, {"BOOL": false}]},
            "meta": {"M": {"portal": {"M": {"gun": {"NULL": true}}}}}
        })
    );
}

#[test]
fn wire_form_reads_back() {
    let wire = json!({"M": {"a": {"L": [{"N": "1"}, {"SS": ["x", "y"]}]}}});
    let node: AttributeNode = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(serde_json::to_value(&node).unwrap(), wire);
    assert_eq!(decode(&node), json!({"a": [1, ["x", "y"]]}));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn classified() -> impl Strategy<Value = ClassifiedValue> {
    let leaf = prop_oneof![
        any::<String>().prop_map(ClassifiedValue::String),
        any::<f64>().prop_map(ClassifiedValue::from),
        any::<bool>().prop_map(ClassifiedValue::Boolean),
        Just(ClassifiedValue::Null),
        Just(ClassifiedValue::Unsupported),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(ClassifiedValue::Binary),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(ClassifiedValue::List),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
                .prop_map(|entries| ClassifiedValue::Map(entries.into_iter().collect::<IndexMap<_, _>>())),
        ]
    })
}

fn has_empty_container(node: &AttributeNode) -> bool {
    match node {
        AttributeNode::L(items) => items.is_empty() || items.iter().any(has_empty_container),
        AttributeNode::M(map) => map.is_empty() || map.values().any(has_empty_container),
        AttributeNode::S(s) => s
            .trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
            .is_empty(),
        _ => false,
    }
}

proptest! {
    #[test]
    fn encoding_is_total_and_never_emits_empty_containers(value in classified()) {
        let node = encode(&value);
        prop_assert!(!has_empty_container(&node));
        if value == ClassifiedValue::Unsupported {
            prop_assert_eq!(node, AttributeNode::Null);
        }
    }

    #[test]
    fn classify_then_encode_matches_json_entry(s in "[ a-z]{0,6}") {
        let value = json!(s);
        prop_assert_eq!(encode(&classify(&value)), encode_json(&value));
    }
}
