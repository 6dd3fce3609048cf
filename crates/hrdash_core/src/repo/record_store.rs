//! Record repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide insert/update/remove/list over one entity collection.
//! - Assign fresh, monotonically increasing ids on insert.
//!
//! # Invariants
//! - `list()` returns records in insertion order; sorting is a view concern.
//! - A failed insert, update or remove leaves the collection untouched.

use crate::model::RecordId;
use crate::schema::Entity;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error surfaced as a non-blocking notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    NotFound(RecordId),
    /// Every id up to `RecordId::MAX` has been handed out.
    IdsExhausted,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::IdsExhausted => write!(f, "no record ids left to assign"),
        }
    }
}

impl Error for StoreError {}

/// Repository interface for one entity collection.
pub trait RecordRepository<T: Entity> {
    /// All records in insertion order.
    fn list(&self) -> &[T];

    fn get(&self, id: RecordId) -> Option<&T>;

    /// Appends `record` under a fresh id and returns the stored copy.
    ///
    /// Any id already on `record` is treated as a placeholder. Fails with
    /// `IdsExhausted`, leaving the collection untouched, once no fresh id
    /// remains.
    fn insert(&mut self, record: T) -> StoreResult<T>;

    /// Replaces the record with `id` in place, keeping `id`.
    fn update(&mut self, id: RecordId, record: T) -> StoreResult<T>;

    /// Removes the record with `id` and returns it.
    fn remove(&mut self, id: RecordId) -> StoreResult<T>;
}

/// Volatile, ordered record collection.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
    /// `None` once the id space is used up.
    next_id: Option<RecordId>,
}

impl<T: Entity> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Builds a store from existing records with already-assigned ids.
    ///
    /// The id generator continues above the highest seeded id.
    pub fn with_records(records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .map(T::id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1).map(|next| next.max(1)));
        Self { records, next_id }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: RecordId) -> StoreResult<usize> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl<T: Entity> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> RecordRepository<T> for RecordStore<T> {
    fn list(&self) -> &[T] {
        &self.records
    }

    fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    fn insert(&mut self, mut record: T) -> StoreResult<T> {
        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        record.set_id(id);
        self.next_id = id.checked_add(1);
        self.records.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, id: RecordId, mut record: T) -> StoreResult<T> {
        let index = self.position(id)?;
        record.set_id(id);
        self.records[index] = record.clone();
        Ok(record)
    }

    fn remove(&mut self, id: RecordId) -> StoreResult<T> {
        let index = self.position(id)?;
        Ok(self.records.remove(index))
    }
}
