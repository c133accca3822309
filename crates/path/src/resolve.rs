//! Path resolution against a path index, a plain value, or an attribute tree.

use std::borrow::Cow;

use dynamo_attr_value::{AttributeMap, AttributeNode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Path, PathError, PathIndex, PathStep};

pub const DEFAULT_DELIMITER: &str = ".";

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    /// Separator between tokens of a joined path.
    pub delimiter: String,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

/// Outcome of looking a path up in an attribute tree.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeLookup<'a> {
    /// The node at the path. Members of `SS`, `NS` and `BS` sets are returned
    /// as owned `S`, `N` and `B` nodes.
    Found(Cow<'a, AttributeNode>),
    /// The first token resolved but a later one did not.
    NotFound,
    /// The path was malformed or its first token is not a field of the item.
    Invalid,
}

impl<'a> AttributeLookup<'a> {
    pub fn node(&self) -> Option<&AttributeNode> {
        match self {
            AttributeLookup::Found(node) => Some(node.as_ref()),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, AttributeLookup::Found(_))
    }
}

/// Resolves paths using a configured delimiter.
///
/// Every operation is total: malformed path arguments are reported through a
/// `tracing` warning and answered with a failure value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    delimiter: String,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl PathResolver {
    pub fn new(options: PathOptions) -> Result<Self, PathError> {
        Self::with_delimiter(options.delimiter)
    }

    pub fn with_delimiter(delimiter: impl Into<String>) -> Result<Self, PathError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(PathError::InvalidDelimiter);
        }
        Ok(Self { delimiter })
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Splits `path` into tokens.
    pub fn tokens<P>(&self, path: P) -> Result<Vec<String>, PathError>
    where
        P: TryInto<Path, Error = PathError>,
    {
        path.try_into()?.tokens(&self.delimiter)
    }

    fn tokens_or_warn<P>(&self, operation: &'static str, path: P) -> Option<Vec<String>>
    where
        P: TryInto<Path, Error = PathError>,
    {
        match self.tokens(path) {
            Ok(tokens) => Some(tokens),
            Err(error) => {
                tracing::warn!(operation, %error, "malformed path argument");
                None
            }
        }
    }

    /// Walks `path` through `index` and returns the steps beneath its last token.
    ///
    /// Every token must match a step; a token other than the last must also
    /// have children to descend into.
    pub fn resolve_against_index<'i, P>(&self, index: &'i PathIndex, path: P) -> Option<&'i [PathStep]>
    where
        P: TryInto<Path, Error = PathError>,
    {
        let tokens = self.tokens_or_warn("resolve_against_index", path)?;
        walk_index(index, &tokens)
    }

    /// Converts `path` to its joined form, if the index can resolve it.
    pub fn to_string_path<P>(&self, index: &PathIndex, path: P) -> Option<String>
    where
        P: TryInto<Path, Error = PathError>,
    {
        let tokens = self.tokens_or_warn("to_string_path", path)?;
        walk_index(index, &tokens)?;
        Some(tokens.join(&self.delimiter))
    }

    /// Converts `path` to its token form, if the index can resolve it.
    pub fn to_array_path<P>(&self, index: &PathIndex, path: P) -> Option<Vec<String>>
    where
        P: TryInto<Path, Error = PathError>,
    {
        let tokens = self.tokens_or_warn("to_array_path", path)?;
        walk_index(index, &tokens)?;
        Some(tokens)
    }

    /// Checks that every token names an own property of the plain value,
    /// without building an index.
    pub fn has_property_at_path<P>(&self, item: &Value, path: P) -> bool
    where
        P: TryInto<Path, Error = PathError>,
    {
        self.value_at_path(item, path).is_some()
    }

    /// Returns the plain value found at `path`.
    pub fn value_at_path<'a, P>(&self, item: &'a Value, path: P) -> Option<&'a Value>
    where
        P: TryInto<Path, Error = PathError>,
    {
        let tokens = self.tokens_or_warn("value_at_path", path)?;
        tokens
            .iter()
            .try_fold(item, |current, token| match current {
                Value::Object(map) => map.get(token),
                Value::Array(items) => list_index(token, items.len()).map(|i| &items[i]),
                _ => None,
            })
    }

    /// Looks `path` up in an encoded item.
    pub fn resolve_against_attribute_tree<'a, P>(
        &self,
        item: &'a AttributeMap,
        path: P,
    ) -> AttributeLookup<'a>
    where
        P: TryInto<Path, Error = PathError>,
    {
        let Some(tokens) = self.tokens_or_warn("resolve_against_attribute_tree", path) else {
            return AttributeLookup::Invalid;
        };
        let (first, rest) = match tokens.split_first() {
            Some(split) => split,
            None => return AttributeLookup::Invalid,
        };
        let Some(root) = item.get(first) else {
            tracing::warn!(field = %first, "first path token is not a field of the item");
            return AttributeLookup::Invalid;
        };
        walk_attribute(root, rest)
    }

    pub fn has_attribute_at_path<P>(&self, item: &AttributeMap, path: P) -> bool
    where
        P: TryInto<Path, Error = PathError>,
    {
        self.resolve_against_attribute_tree(item, path).is_found()
    }
}

fn walk_index<'i>(index: &'i PathIndex, tokens: &[String]) -> Option<&'i [PathStep]> {
    let (first, rest) = tokens.split_first()?;
    let mut steps = index.get(first)?;
    for (i, token) in rest.iter().enumerate() {
        let step = steps.iter().find(|step| step.name == *token)?;
        let is_last = i + 1 == rest.len();
        if !is_last && step.is_leaf() {
            return None;
        }
        steps = step.children.as_slice();
    }
    Some(steps)
}

fn walk_attribute<'a>(root: &'a AttributeNode, tokens: &[String]) -> AttributeLookup<'a> {
    let mut node = root;
    for (i, token) in tokens.iter().enumerate() {
        if node.is_scalar() {
            return AttributeLookup::NotFound;
        }
        let next = match node {
            AttributeNode::M(map) => map.get(token),
            AttributeNode::L(items) => list_index(token, items.len()).map(|idx| &items[idx]),
            AttributeNode::Ss(_) | AttributeNode::Ns(_) | AttributeNode::Bs(_) => {
                // Set members are leaves, so only a final token can select one.
                if i + 1 != tokens.len() {
                    return AttributeLookup::NotFound;
                }
                return match set_member(node, token) {
                    Some(member) => AttributeLookup::Found(Cow::Owned(member)),
                    None => AttributeLookup::NotFound,
                };
            }
            _ => None,
        };
        match next {
            Some(child) => node = child,
            None => return AttributeLookup::NotFound,
        }
    }
    AttributeLookup::Found(Cow::Borrowed(node))
}

fn set_member(set: &AttributeNode, token: &str) -> Option<AttributeNode> {
    let len = set.indexed_len()?;
    let idx = list_index(token, len)?;
    match set {
        AttributeNode::Ss(items) => Some(AttributeNode::S(items[idx].clone())),
        AttributeNode::Ns(items) => Some(AttributeNode::N(items[idx].clone())),
        AttributeNode::Bs(items) => Some(AttributeNode::B(items[idx].clone())),
        _ => None,
    }
}

/// Parses a canonical decimal list index (`"0"`, `"12"`, not `"01"` or `"+1"`)
/// that is in range for a list of `len` elements.
fn list_index(token: &str, len: usize) -> Option<usize> {
    let idx = token.parse::<usize>().ok()?;
    (idx < len && idx.to_string() == token).then_some(idx)
}
