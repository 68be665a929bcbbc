//! Persistent ticket counter.
//!
//! The counter lives in a single JSON file of the shape `{"count": n}` that
//! is fully rewritten on every save. There is no locking: the bot runs as a
//! single process and concurrent saves are last-write-wins, which is a known
//! and accepted limitation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::AppError;

/// Category under which ticket channels are created. Fixed for this
/// deployment, not configurable.
pub const TICKET_CATEGORY_ID: u64 = 1476424956827930766;

/// Default relative path of the counter file.
pub const TICKETS_FILE: &str = "tickets.json";

/// On-disk shape of the counter file.
#[derive(Serialize, Deserialize)]
struct TicketCount {
    count: u64,
}

/// Store for the persistent ticket counter.
///
/// Reads and writes a single non-negative integer. The backing file is
/// created lazily with a count of zero on first read. I/O and parse failures
/// propagate to the caller; there is no retry or partial-write recovery.
pub struct TicketStore {
    path: PathBuf,
}

impl TicketStore {
    /// Creates a store backed by the given file path.
    ///
    /// # Arguments
    /// - `path` - Location of the counter file
    ///
    /// # Returns
    /// - `TicketStore` - Store using the provided path; the file itself is
    ///   only touched on first access
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the current ticket count.
    ///
    /// If the backing file does not exist it is created with `{"count": 0}`
    /// and zero is returned. No validation is performed beyond JSON parsing,
    /// so a corrupted file surfaces as a parse error.
    ///
    /// # Returns
    /// - `Ok(u64)` - The stored count (zero for a fresh store)
    /// - `Err(AppError::IoErr)` - The file could not be read or initialized
    /// - `Err(AppError::JsonErr)` - The file contents are not valid JSON
    pub fn count(&self) -> Result<u64, AppError> {
        if !self.path.exists() {
            self.write_count(0)?;
            return Ok(0);
        }

        let raw = fs::read_to_string(&self.path)?;
        let record: TicketCount = serde_json::from_str(&raw)?;

        Ok(record.count)
    }

    /// Overwrites the stored count.
    ///
    /// The file is fully replaced, never appended to; the persisted value
    /// always reflects the last successful save.
    ///
    /// # Arguments
    /// - `count` - The new counter value
    ///
    /// # Returns
    /// - `Ok(())` - The count was persisted
    /// - `Err(AppError::IoErr)` - The file could not be written
    pub fn save(&self, count: u64) -> Result<(), AppError> {
        self.write_count(count)
    }

    fn write_count(&self, count: u64) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(&TicketCount { count })?;
        fs::write(&self.path, raw)?;

        Ok(())
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new(TICKETS_FILE)
    }
}
