//! Income record store
//!
//! Keeps the records in memory in file order and mirrors every mutation to the
//! backing text file straight away.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::display::income::{format_deletable_list, format_income_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::IncomeRecord;

use super::file_io::{append_line, read_lines, truncate, write_lines_atomic};

/// Ordered income records synchronized with a text file
#[derive(Debug)]
pub struct IncomeStore {
    path: PathBuf,
    records: Vec<IncomeRecord>,
}

impl IncomeStore {
    /// Open the store at `path` and load its records.
    ///
    /// A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let mut store = Self {
            path: path.into(),
            records: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Reload all records from the backing file, skipping blank lines
    ///
    /// On error the in-memory records are left as they were.
    pub fn load(&mut self) -> LedgerResult<()> {
        let mut records = Vec::new();

        for (number, line) in read_lines(&self.path)?.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            if !line.contains('"') {
                warn!(line = number + 1, "Record line has no quoted source; loading partially");
            }

            let record = IncomeRecord::decode(line).map_err(|e| LedgerError::CorruptLine {
                path: self.path.display().to_string(),
                line: number + 1,
                reason: match e {
                    LedgerError::Parse(reason) => reason,
                    other => other.to_string(),
                },
            })?;
            records.push(record);
        }

        debug!(path = %self.path.display(), count = records.len(), "Loaded income records");
        self.records = records;
        Ok(())
    }

    /// Append a record to the store and to the end of the backing file
    pub fn add(&mut self, record: IncomeRecord) -> LedgerResult<()> {
        append_line(&self.path, &record.encode())?;
        debug!(record = %record, "Appended income record");
        self.records.push(record);
        Ok(())
    }

    /// Remove every record and truncate the backing file
    pub fn delete_all(&mut self) -> LedgerResult<()> {
        truncate(&self.path)?;
        debug!(removed = self.records.len(), "Deleted all income records");
        self.records.clear();
        Ok(())
    }

    /// Remove the record at a 0-based `index` and rewrite the backing file.
    ///
    /// Returns `None` without touching anything if `index` is out of range.
    pub fn delete_by_index(&mut self, index: usize) -> LedgerResult<Option<IncomeRecord>> {
        if index >= self.records.len() {
            debug!(index, len = self.records.len(), "Delete index out of range");
            return Ok(None);
        }

        let removed = self.records.remove(index);
        if let Err(e) = write_lines_atomic(&self.path, &self.records) {
            self.records.insert(index, removed);
            return Err(e);
        }

        debug!(index, record = %removed, "Deleted income record");
        Ok(Some(removed))
    }

    /// All records in file order
    pub fn records(&self) -> &[IncomeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Listing of all records, or the empty-list message
    pub fn display_all(&self, currency: &str) -> String {
        format_income_list(&self.records, currency)
    }

    /// Listing shown before asking which record to delete
    pub fn show_deletable(&self, currency: &str) -> String {
        format_deletable_list(&self.records, currency)
    }
}
