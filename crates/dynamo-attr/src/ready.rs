//! Waiting for a table to reach a status before continuing.

use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reports the current status of a table (e.g. `ACTIVE`).
pub trait TableStatusSource {
    type Error: std::error::Error + 'static;

    fn table_status(&mut self, table: &str) -> Result<String, Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitOptions {
    pub max_attempts: u32,
    pub interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            max_attempts: 25,
            interval_ms: 20_000,
        }
    }
}

#[derive(Debug, Error)]
pub enum WaitError<E>
where
    E: std::error::Error + 'static,
{
    #[error("table {table} did not reach status {status} after {attempts} attempts")]
    TimedOut {
        table: String,
        status: String,
        attempts: u32,
    },
    #[error("failed to read table status")]
    Source(#[source] E),
}

/// Polls `source` until `table` reports `status`, then hands the source,
/// table and `data` to `continuation` and returns its result.
pub fn wait_for_status<S, D, T, F>(
    source: &mut S,
    table: &str,
    status: &str,
    options: &WaitOptions,
    data: D,
    continuation: F,
) -> Result<T, WaitError<S::Error>>
where
    S: TableStatusSource,
    F: FnOnce(&mut S, &str, D) -> T,
{
    for attempt in 1..=options.max_attempts {
        let current = source.table_status(table).map_err(WaitError::Source)?;
        if current == status {
            tracing::debug!(table, status, attempt, "table reached status");
            return Ok(continuation(source, table, data));
        }
        tracing::debug!(table, current = %current, wanted = status, attempt, "waiting for table");
        if attempt < options.max_attempts {
            thread::sleep(Duration::from_millis(options.interval_ms));
        }
    }
    Err(WaitError::TimedOut {
        table: table.to_string(),
        status: status.to_string(),
        attempts: options.max_attempts,
    })
}
