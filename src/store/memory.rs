//! In-memory record store.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayKey, OvertimeRecord};

use super::RecordStore;

/// An in-memory [`RecordStore`] backed by a `BTreeMap`.
///
/// The map is keyed by [`DayKey`], whose ordering is chronological, so
/// iteration is already date-sorted.
///
/// # Example
///
/// ```
/// use overtime_engine::models::{DayKey, OvertimeRecord};
/// use overtime_engine::store::{MemoryStore, RecordStore};
/// use rust_decimal::Decimal;
///
/// let mut store = MemoryStore::new();
/// let key = DayKey::new(2025, 1, 6).unwrap();
/// store.put(OvertimeRecord::new(key, Decimal::from(2), false)).unwrap();
///
/// assert_eq!(store.len(), 1);
/// assert!(store.get(&key).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<DayKey, OvertimeRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over all records in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &OvertimeRecord> {
        self.records.values()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &DayKey) -> Option<&OvertimeRecord> {
        self.records.get(key)
    }

    fn put(&mut self, record: OvertimeRecord) -> EngineResult<()> {
        if record.hours < Decimal::ZERO {
            return Err(EngineError::InvalidArgument {
                field: "hours".to_string(),
                message: format!("must not be negative, got {}", record.hours),
            });
        }

        // Zero hours mean "no entry": clearing a day deletes its record.
        if record.hours == Decimal::ZERO {
            self.records.remove(&record.day_key);
            return Ok(());
        }

        self.records.insert(record.day_key, record);
        Ok(())
    }

    fn remove(&mut self, key: &DayKey) -> bool {
        self.records.remove(key).is_some()
    }

    fn records_for_month(&self, year: i32, month: u32) -> Vec<OvertimeRecord> {
        self.records
            .values()
            .filter(|record| record.day_key.in_month(year, month))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
