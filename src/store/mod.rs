//! Record storage for per-day overtime entries.
//!
//! The engine itself never touches storage; callers own a [`RecordStore`]
//! and pass record values into the calculation functions. Two
//! implementations are provided: [`MemoryStore`] for in-process use and
//! [`JsonFileStore`] for simple local persistence.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::EngineResult;
use crate::models::{DayKey, OvertimeRecord};

/// A key-value store of overtime records, keyed by day.
///
/// The store enforces the "hours must be positive" invariant: putting a
/// record with zero hours deletes any existing entry for that day, and
/// negative hours are rejected. A stored record therefore always has
/// positive hours.
pub trait RecordStore {
    /// Returns the record for the given day, if any.
    fn get(&self, key: &DayKey) -> Option<&OvertimeRecord>;

    /// Inserts or overwrites the record for its day.
    ///
    /// A record with zero hours removes the existing entry instead of
    /// being stored. Negative hours are an
    /// [`crate::error::EngineError::InvalidArgument`].
    fn put(&mut self, record: OvertimeRecord) -> EngineResult<()>;

    /// Removes the record for the given day. Returns true if one existed.
    fn remove(&mut self, key: &DayKey) -> bool;

    /// Returns all records in the given year and month, sorted by day.
    fn records_for_month(&self, year: i32, month: u32) -> Vec<OvertimeRecord>;

    /// Returns the number of stored records.
    fn len(&self) -> usize;

    /// Returns true if the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
