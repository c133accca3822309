//! Tagged attribute nodes and their JSON wire form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::binary::{from_base64, to_base64};
use crate::AttributeError;

/// A top-level item: field name to attribute node, in insertion order.
pub type AttributeMap = IndexMap<String, AttributeNode>;

/// One attribute value, carrying exactly one wire tag.
///
/// The encoder emits `S`, `N`, `BOOL`, `NULL`, `B`, `L` and `M`. The set tags
/// (`SS`, `NS`, `BS`) are only produced by reading wire data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireAttribute", try_from = "WireAttribute")]
pub enum AttributeNode {
    S(String),
    /// Decimal number in string form.
    N(String),
    Bool(bool),
    /// `{"NULL": true}`. There is no false form.
    Null,
    B(Vec<u8>),
    L(Vec<AttributeNode>),
    M(AttributeMap),
    Ss(Vec<String>),
    Ns(Vec<String>),
    Bs(Vec<Vec<u8>>),
}

impl AttributeNode {
    /// The wire tag of this node.
    pub fn tag(&self) -> &'static str {
        match self {
            AttributeNode::S(_) => "S",
            AttributeNode::N(_) => "N",
            AttributeNode::Bool(_) => "BOOL",
            AttributeNode::Null => "NULL",
            AttributeNode::B(_) => "B",
            AttributeNode::L(_) => "L",
            AttributeNode::M(_) => "M",
            AttributeNode::Ss(_) => "SS",
            AttributeNode::Ns(_) => "NS",
            AttributeNode::Bs(_) => "BS",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeNode::Null)
    }

    /// Scalar tags have no children to descend into.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            AttributeNode::S(_)
                | AttributeNode::N(_)
                | AttributeNode::Bool(_)
                | AttributeNode::Null
                | AttributeNode::B(_)
        )
    }

    pub fn as_map(&self) -> Option<&AttributeMap> {
        match self {
            AttributeNode::M(map) => Some(map),
            _ => None,
        }
    }

    /// Number of indexable children for list and set tags, `None` otherwise.
    pub fn indexed_len(&self) -> Option<usize> {
        match self {
            AttributeNode::L(items) => Some(items.len()),
            AttributeNode::Ss(items) | AttributeNode::Ns(items) => Some(items.len()),
            AttributeNode::Bs(items) => Some(items.len()),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
enum WireAttribute {
    S(String),
    N(String),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "NULL")]
    Null(bool),
    B(String),
    L(Vec<AttributeNode>),
    M(AttributeMap),
    #[serde(rename = "SS")]
    Ss(Vec<String>),
    #[serde(rename = "NS")]
    Ns(Vec<String>),
    #[serde(rename = "BS")]
    Bs(Vec<String>),
}

impl From<AttributeNode> for WireAttribute {
    fn from(node: AttributeNode) -> Self {
        match node {
            AttributeNode::S(s) => WireAttribute::S(s),
            AttributeNode::N(n) => WireAttribute::N(n),
            AttributeNode::Bool(b) => WireAttribute::Bool(b),
            AttributeNode::Null => WireAttribute::Null(true),
            AttributeNode::B(bytes) => WireAttribute::B(to_base64(&bytes)),
            AttributeNode::L(items) => WireAttribute::L(items),
            AttributeNode::M(map) => WireAttribute::M(map),
            AttributeNode::Ss(items) => WireAttribute::Ss(items),
            AttributeNode::Ns(items) => WireAttribute::Ns(items),
            AttributeNode::Bs(items) => {
                WireAttribute::Bs(items.iter().map(|b| to_base64(b)).collect())
            }
        }
    }
}

impl TryFrom<WireAttribute> for AttributeNode {
    type Error = AttributeError;

    fn try_from(wire: WireAttribute) -> Result<Self, Self::Error> {
        Ok(match wire {
            WireAttribute::S(s) => AttributeNode::S(s),
            WireAttribute::N(n) => AttributeNode::N(n),
            WireAttribute::Bool(b) => AttributeNode::Bool(b),
            WireAttribute::Null(true) => AttributeNode::Null,
            WireAttribute::Null(false) => return Err(AttributeError::NullNotTrue),
            WireAttribute::B(text) => AttributeNode::B(
                from_base64(&text).map_err(|_| AttributeError::InvalidBinary { tag: "B" })?,
            ),
            WireAttribute::L(items) => AttributeNode::L(items),
            WireAttribute::M(map) => AttributeNode::M(map),
            WireAttribute::Ss(items) => AttributeNode::Ss(items),
            WireAttribute::Ns(items) => AttributeNode::Ns(items),
            WireAttribute::Bs(items) => AttributeNode::Bs(
                items
                    .iter()
                    .map(|text| from_base64(text))
                    .collect::<Result<_, _>>()
                    .map_err(|_| AttributeError::InvalidBinary { tag: "BS" })?,
            ),
        })
    }
}
