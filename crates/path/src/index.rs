//! Path index: the reachable field and list-index names of a plain value.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Index of every descent path through a plain value, keyed by top-level field.
///
/// Built from the value's shape only; it must be rebuilt once the shape changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathIndex {
    fields: IndexMap<String, Vec<PathStep>>,
}

/// One child name (a map key, or a list index in decimal) and what lies beneath it.
///
/// Serializes as a one-entry object `{name: [children...]}`; a leaf has no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub name: String,
    pub children: Vec<PathStep>,
}

impl PathIndex {
    /// Steps beneath a top-level field.
    pub fn get(&self, field: &str) -> Option<&[PathStep]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Every complete path in the index, one token sequence per reachable node,
    /// in traversal order.
    pub fn paths(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        for (field, steps) in &self.fields {
            let mut prefix = vec![field.clone()];
            out.push(prefix.clone());
            collect_paths(steps, &mut prefix, &mut out);
        }
        out
    }
}

impl PathStep {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

fn collect_paths(steps: &[PathStep], prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    for step in steps {
        prefix.push(step.name.clone());
        out.push(prefix.clone());
        collect_paths(&step.children, prefix, out);
        prefix.pop();
    }
}

/// Builds the path index of `value`.
///
/// Top-level entries are the fields of a map, or the decimal indices of a
/// list; a scalar has no entries. Order follows the value; nothing is sorted.
pub fn build_path_index(value: &Value) -> PathIndex {
    let fields = match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, val)| (key.clone(), steps_for(val)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), steps_for(item)))
            .collect(),
        _ => IndexMap::new(),
    };
    PathIndex { fields }
}

fn steps_for(value: &Value) -> Vec<PathStep> {
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| PathStep {
                name: i.to_string(),
                children: steps_for(item),
            })
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, val)| PathStep {
                name: key.clone(),
                children: steps_for(val),
            })
            .collect(),
        _ => Vec::new(),
    }
}

impl Serialize for PathStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.children)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for PathStep {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = IndexMap::<String, Vec<PathStep>>::deserialize(deserializer)?;
        if entries.len() != 1 {
            return Err(D::Error::custom(format!(
                "path step must have exactly one entry, found {}",
                entries.len()
            )));
        }
        let (name, children) = entries
            .into_iter()
            .next()
            .ok_or_else(|| D::Error::custom("path step is empty"))?;
        Ok(PathStep { name, children })
    }
}
