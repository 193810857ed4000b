//! Generic CRUD/query engine over one store table.
//!
//! # Responsibility
//! - Provide the same operations for every table, typed by the record.
//! - Stamp identity and timestamps; callers never supply them.
//!
//! # Invariants
//! - Reads return copies; callers never hold references into a table.
//! - `update` keeps `id`, `createdAt` and position; `updatedAt` never decreases.
//! - A write declined by validation leaves the table untouched.
//! - Absent ids are `None`/`false`/not counted, never errors.

use crate::model::record::{now, now_after, Record, RecordMeta};
use crate::repo::query::{matches_text, Filter, Page, Pagination};
use crate::repo::{RepoError, RepoResult};
use crate::store::{Entity, Store, Table};
use log::{debug, warn};
use std::marker::PhantomData;
use std::sync::MutexGuard;

/// Typed handle on the table bound to `R`.
pub struct Repository<'s, R: Entity> {
    store: &'s Store,
    _record: PhantomData<fn() -> R>,
}

impl<R: Entity> Clone for Repository<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Entity> Copy for Repository<'_, R> {}

impl<'s, R: Entity> Repository<'s, R> {
    pub fn new(store: &'s Store) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Every record in insertion order.
    pub fn get_all(&self) -> Vec<R> {
        self.table().rows().to_vec()
    }

    pub fn get_by_id(&self, id: &str) -> Option<R> {
        let table = self.table();
        table.position(id).map(|index| table.get(index).clone())
    }

    pub fn exists(&self, id: &str) -> bool {
        self.table().position(id).is_some()
    }

    pub fn count(&self) -> usize {
        self.table().len()
    }

    /// Stores a new record with a fresh id and `createdAt == updatedAt == now`.
    pub fn create(&self, draft: R::Draft) -> RepoResult<R> {
        let mut table = self.table();
        let id = table.issue_id();
        let record = R::from_draft(RecordMeta::new(id, now()), draft);
        if let Err(err) = record.validate() {
            warn!(
                "event=record_create module=repo status=declined table={} reason={}",
                R::TABLE,
                err
            );
            return Err(RepoError::Validation(err));
        }

        table.push(record.clone());
        debug!(
            "event=record_create module=repo status=ok table={} id={}",
            R::TABLE,
            record.id()
        );
        Ok(record)
    }

    /// Shallow-merges `patch` over the record with `id`.
    ///
    /// Returns `Ok(None)` when no such record exists.
    pub fn update(&self, id: &str, patch: R::Patch) -> RepoResult<Option<R>> {
        self.modify(id, |record| record.apply_patch(patch))
    }

    /// Removes the record with `id`. Returns whether a record was removed.
    pub fn delete(&self, id: &str) -> bool {
        let removed = self.table().remove(id);
        debug!(
            "event=record_delete module=repo table={} id={} removed={}",
            R::TABLE,
            id,
            removed
        );
        removed
    }

    /// Deletes each id independently; returns how many records were removed.
    pub fn bulk_delete<I, S>(&self, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = self.table();
        let removed = ids
            .into_iter()
            .filter(|id| table.remove(id.as_ref()))
            .count();
        debug!(
            "event=record_bulk_delete module=repo table={} removed={}",
            R::TABLE,
            removed
        );
        removed
    }

    /// Free-text search over the entity's declared search fields.
    pub fn search(&self, query: &str) -> Vec<R> {
        self.search_fields(query, R::SEARCH_FIELDS)
    }

    /// Case-insensitive substring search over `fields`. An empty query
    /// returns every record.
    pub fn search_fields(&self, query: &str, fields: &[R::Field]) -> Vec<R> {
        let needle = query.to_lowercase();
        self.table()
            .rows()
            .iter()
            .filter(|record| matches_text(*record, &needle, fields))
            .cloned()
            .collect()
    }

    pub fn filter(&self, filter: &Filter<R::Field>) -> Vec<R> {
        self.table()
            .rows()
            .iter()
            .filter(|record| filter.matches(*record))
            .cloned()
            .collect()
    }

    /// Filters (when given) then slices `[(page - 1) * limit, page * limit)`.
    ///
    /// A page past the end yields empty `data`.
    pub fn paginate(
        &self,
        page: usize,
        limit: usize,
        filter: Option<&Filter<R::Field>>,
    ) -> Page<R> {
        let table = self.table();
        let matching: Vec<&R> = table
            .rows()
            .iter()
            .filter(|record| filter.map_or(true, |filter| filter.matches(*record)))
            .collect();

        let pagination = Pagination::new(page, limit, matching.len());
        let (start, end) = pagination.bounds();
        Page {
            data: matching[start..end]
                .iter()
                .map(|record| (*record).clone())
                .collect(),
            pagination,
        }
    }

    /// Applies `change` to a copy of the record, restores its identity,
    /// refreshes `updatedAt`, validates, then writes it back in place.
    pub(crate) fn modify<F>(&self, id: &str, change: F) -> RepoResult<Option<R>>
    where
        F: FnOnce(&mut R),
    {
        let mut table = self.table();
        let Some(index) = table.position(id) else {
            debug!(
                "event=record_update module=repo status=not_found table={} id={}",
                R::TABLE,
                id
            );
            return Ok(None);
        };

        let previous = table.get(index).meta().clone();
        let mut next = table.get(index).clone();
        change(&mut next);
        {
            let meta = next.meta_mut();
            meta.id = previous.id;
            meta.created_at = previous.created_at;
            meta.updated_at = now_after(previous.updated_at);
        }

        if let Err(err) = next.validate() {
            warn!(
                "event=record_update module=repo status=declined table={} id={} reason={}",
                R::TABLE,
                id,
                err
            );
            return Err(RepoError::Validation(err));
        }

        table.set(index, next.clone());
        debug!(
            "event=record_update module=repo status=ok table={} id={}",
            R::TABLE,
            id
        );
        Ok(Some(next))
    }

    /// Ids present in this table, in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.table()
            .rows()
            .iter()
            .map(|record| record.id().to_string())
            .collect()
    }

    fn table(&self) -> MutexGuard<'s, Table<R>> {
        self.store.lock::<R>()
    }
}
