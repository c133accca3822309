//! Value classification and attribute tagging for key-value document store items.
//!
//! A plain value ([`serde_json::Value`], or a [`ClassifiedValue`] built directly)
//! is classified once into a closed sum type and then encoded into the store's
//! tagged [`AttributeNode`] form. Encoding is total: anything that cannot be
//! represented collapses into `NULL(true)`.

mod attribute;
mod classify;
mod decode;
mod encode;
mod error;

pub mod binary;
pub mod number;

pub use attribute::{AttributeMap, AttributeNode};
pub use classify::{classify, ClassifiedValue};
pub use decode::{decode, decode_record};
pub use encode::{
    attribute_or_null, encode, encode_json, encode_record, encode_record_json, is_truthy,
    object_or_null,
};
pub use error::AttributeError;
