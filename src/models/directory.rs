//! The contact directory: an insertion-ordered collection keyed by name.

use super::record::ContactRecord;
use crate::domain::{Name, ValidationError};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Whether `Directory::upsert` created a record or found an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added,
    Updated,
}

/// Raised when a directory is rebuilt from records that repeat a name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Duplicate contact name: {0}")]
pub struct DuplicateNameError(pub String);

/// All contacts of one session.
///
/// Records are kept in insertion order; `index` maps each name to its
/// position in `records` and always agrees with `record.name()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: Vec<ContactRecord>,
    index: HashMap<String, usize>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a directory from records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNameError` if two records share a name.
    pub fn from_records(
        records: impl IntoIterator<Item = ContactRecord>,
    ) -> Result<Self, DuplicateNameError> {
        let mut directory = Self::new();
        for record in records {
            let key = record.name().as_str().to_string();
            if directory.index.contains_key(&key) {
                return Err(DuplicateNameError(key));
            }
            directory.index.insert(key, directory.records.len());
            directory.records.push(record);
        }
        Ok(directory)
    }

    /// Return the record for `name`, creating it first if needed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` when a new record would get a
    /// blank name. Existing records are matched exactly and never fail.
    pub fn upsert(&mut self, name: &str) -> Result<(&mut ContactRecord, Upsert), ValidationError> {
        if let Some(&pos) = self.index.get(name) {
            return Ok((&mut self.records[pos], Upsert::Updated));
        }

        let record = ContactRecord::new(Name::new(name)?);
        let pos = self.records.len();
        self.index.insert(name.to_string(), pos);
        self.records.push(record);
        Ok((&mut self.records[pos], Upsert::Added))
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        match self.index.get(name) {
            Some(&pos) => Some(&mut self.records[pos]),
            None => None,
        }
    }

    /// All records in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// All names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose next birthday is between `today` and `within_days`
    /// days from now, both ends inclusive.
    ///
    /// Results follow directory order, not proximity.
    pub fn upcoming_birthdays(&self, within_days: u32, today: NaiveDate) -> Vec<&ContactRecord> {
        self.records
            .iter()
            .filter(|record| {
                record
                    .days_to_next_birthday(today)
                    .is_some_and(|days| days <= within_days)
            })
            .collect()
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
