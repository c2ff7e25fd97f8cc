//! JSON-file-backed record store.
//!
//! The Rust counterpart of the original browser-local storage: a flat JSON
//! object mapping canonical `YYYY-MM-DD` keys to `{hours, is_holiday}`
//! entries. Mutations happen in memory; [`JsonFileStore::save`] persists
//! the current state.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayKey, OvertimeRecord};

use super::memory::MemoryStore;
use super::RecordStore;

/// On-disk entry shape; the day lives in the map key.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    hours: Decimal,
    is_holiday: bool,
}

/// A [`RecordStore`] persisted to a JSON file.
///
/// # File format
///
/// ```json
/// {
///   "2025-01-06": { "hours": "2.0", "is_holiday": false },
///   "2025-01-12": { "hours": "8.0", "is_holiday": true }
/// }
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_engine::models::{DayKey, OvertimeRecord};
/// use overtime_engine::store::{JsonFileStore, RecordStore};
/// use rust_decimal::Decimal;
///
/// let mut store = JsonFileStore::open("overtime-records.json")?;
/// let key = DayKey::new(2025, 1, 6).unwrap();
/// store.put(OvertimeRecord::new(key, Decimal::from(2), false))?;
/// store.save()?;
/// # Ok::<(), overtime_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Opens a store at the given path, loading existing records.
    ///
    /// A missing file is treated as an empty store; the file is created on
    /// the first [`JsonFileStore::save`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StoreIo`] if the file exists but cannot be
    /// read, [`EngineError::ConfigParseError`] if it is not valid JSON,
    /// [`EngineError::MalformedDateKey`] or [`EngineError::InvalidDate`]
    /// if a key does not name a real date, and
    /// [`EngineError::InvalidArgument`] if an entry carries negative hours.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut inner = MemoryStore::new();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| EngineError::StoreIo {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let entries: BTreeMap<String, StoredEntry> =
                serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;

            for (key, entry) in entries {
                let day_key = DayKey::parse(&key)?;
                inner.put(OvertimeRecord::new(day_key, entry.hours, entry.is_holiday))?;
            }

            info!(
                path = %path.display(),
                records = inner.len(),
                "Loaded overtime records"
            );
        }

        Ok(Self { path, inner })
    }

    /// Writes the current records to the store file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StoreIo`] if the file cannot be written.
    pub fn save(&self) -> EngineResult<()> {
        let entries: BTreeMap<String, StoredEntry> = self
            .inner
            .iter()
            .map(|record| {
                (
                    record.day_key.to_string(),
                    StoredEntry {
                        hours: record.hours,
                        is_holiday: record.is_holiday,
                    },
                )
            })
            .collect();

        let json = serde_json::to_string_pretty(&entries).map_err(|e| EngineError::StoreIo {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        fs::write(&self.path, json).map_err(|e| EngineError::StoreIo {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(
            path = %self.path.display(),
            records = self.inner.len(),
            "Saved overtime records"
        );
        Ok(())
    }

    /// Returns the path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn get(&self, key: &DayKey) -> Option<&OvertimeRecord> {
        self.inner.get(key)
    }

    fn put(&mut self, record: OvertimeRecord) -> EngineResult<()> {
        self.inner.put(record)
    }

    fn remove(&mut self, key: &DayKey) -> bool {
        self.inner.remove(key)
    }

    fn records_for_month(&self, year: i32, month: u32) -> Vec<OvertimeRecord> {
        self.inner.records_for_month(year, month)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
