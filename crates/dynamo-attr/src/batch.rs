//! Paged batch writes of plain records.
//!
//! Records are shaped (`version` defaulted, `id` taken from `name`), encoded
//! into items and handed to a [`BatchWriteClient`] one page at a time.

use dynamo_attr_value::{encode_record_json, AttributeMap};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Largest number of write requests the store accepts in one batch.
pub const MAX_BATCH_WRITE_ITEMS: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    pub page_size: usize,
    /// Value written to `version` when a record has none.
    pub default_version: i64,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            page_size: MAX_BATCH_WRITE_ITEMS,
            default_version: 1,
        }
    }
}

/// One entry of a batch write, in the store's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WriteRequest {
    #[serde(rename = "PutRequest")]
    Put {
        #[serde(rename = "Item")]
        item: AttributeMap,
    },
}

/// Sends one page of write requests to a table.
pub trait BatchWriteClient {
    type Error: std::error::Error + 'static;

    fn batch_write(&mut self, table: &str, requests: Vec<WriteRequest>) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum BatchError<E>
where
    E: std::error::Error + 'static,
{
    #[error("page size must be between 1 and {max}, got {0}", max = MAX_BATCH_WRITE_ITEMS)]
    InvalidPageSize(usize),
    #[error("record {index} is not a non-empty object")]
    NotARecord { index: usize },
    #[error("batch write starting at record {offset} failed")]
    Client {
        offset: usize,
        #[source]
        source: E,
    },
}

/// Writes `records[offset..]` page by page and returns how many were written.
///
/// A page is validated in full before it is sent, so a bad record stops the
/// run without sending its page.
pub fn write_in_pages<C>(
    client: &mut C,
    table: &str,
    records: &[Value],
    offset: usize,
    options: &BatchOptions,
) -> Result<usize, BatchError<C::Error>>
where
    C: BatchWriteClient,
{
    let page_size = options.page_size;
    if page_size == 0 || page_size > MAX_BATCH_WRITE_ITEMS {
        return Err(BatchError::InvalidPageSize(page_size));
    }

    let mut written = 0;
    let mut start = offset;
    while start < records.len() {
        let end = (start + page_size).min(records.len());
        let requests = records[start..end]
            .iter()
            .enumerate()
            .map(|(i, record)| {
                shape_record(record, options.default_version)
                    .map(|item| WriteRequest::Put { item })
                    .ok_or(BatchError::NotARecord { index: start + i })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(table, start, count = requests.len(), "writing batch page");
        client
            .batch_write(table, requests)
            .map_err(|source| BatchError::Client {
                offset: start,
                source,
            })?;

        written += end - start;
        start = end;
    }
    Ok(written)
}

/// Defaults `version`, derives `id` from `name`, then encodes the record.
pub fn shape_record(record: &Value, default_version: i64) -> Option<AttributeMap> {
    let mut fields = record.as_object()?.clone();
    if fields.get("version").map_or(true, Value::is_null) {
        fields.insert("version".to_string(), Value::from(default_version));
    }
    if fields.get("id").map_or(true, Value::is_null) {
        if let Some(name) = fields.get("name").cloned() {
            fields.insert("id".to_string(), name);
        }
    }
    encode_record_json(&Value::Object(fields))
}
