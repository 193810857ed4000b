//! One homogeneous, insertion-ordered collection of records.

use crate::model::record::{Record, RecordId};
use crate::store::{StoreError, StoreResult, TableId};
use std::collections::HashSet;
use uuid::Uuid;

/// Rows of one table plus every identifier the table has ever held.
///
/// `issued` only grows, so identifiers are never handed out twice even after
/// deletes, resets or restores.
#[derive(Debug)]
pub struct Table<R> {
    rows: Vec<R>,
    issued: HashSet<RecordId>,
}

impl<R: Record> Table<R> {
    pub(crate) fn empty() -> Self {
        Self {
            rows: Vec::new(),
            issued: HashSet::new(),
        }
    }

    pub(crate) fn rows(&self) -> &[R] {
        &self.rows
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }

    pub(crate) fn get(&self, index: usize) -> &R {
        &self.rows[index]
    }

    pub(crate) fn set(&mut self, index: usize, record: R) {
        self.rows[index] = record;
    }

    pub(crate) fn push(&mut self, record: R) {
        self.issued.insert(record.id().to_string());
        self.rows.push(record);
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns a fresh identifier that this table has never held.
    pub(crate) fn issue_id(&mut self) -> RecordId {
        loop {
            let candidate = Uuid::new_v4().to_string();
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Replaces all rows. Rows must already have passed [`check_rows`].
    pub(crate) fn replace(&mut self, rows: Vec<R>) {
        self.issued.extend(rows.iter().map(|row| row.id().to_string()));
        self.rows = rows;
    }
}

/// Rejects duplicate identifiers and rows that break model invariants.
pub(crate) fn check_rows<R: Record>(table: TableId, rows: &[R]) -> StoreResult<()> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        if !seen.insert(row.id()) {
            return Err(StoreError::DuplicateId {
                table,
                id: row.id().to_string(),
            });
        }
        row.validate().map_err(|source| StoreError::InvalidRecord {
            table,
            id: row.id().to_string(),
            source,
        })?;
    }
    Ok(())
}
