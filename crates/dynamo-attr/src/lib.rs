//! Attribute encoding, size billing and path addressing for key-value
//! document stores.
//!
//! This crate re-exports the three core crates and adds the thin boundary
//! helpers that sit around them: a response envelope, a paged batch writer
//! and a table-status wait loop. The core never calls these helpers.

pub mod batch;
pub mod cli;
pub mod ready;
pub mod response;

pub use dynamo_attr_path as path;
pub use dynamo_attr_size as size;
pub use dynamo_attr_value as value;

pub use dynamo_attr_path::{build_path_index, AttributeLookup, Path, PathIndex, PathResolver};
pub use dynamo_attr_size::{item_size_count, item_size_count_json};
pub use dynamo_attr_value::{
    classify, decode, encode, encode_json, encode_record, encode_record_json, AttributeMap,
    AttributeNode, ClassifiedValue,
};

pub use batch::{write_in_pages, BatchError, BatchOptions, BatchWriteClient, WriteRequest};
pub use ready::{wait_for_status, TableStatusSource, WaitError, WaitOptions};
pub use response::{respond, ResponseEnvelope};
