//! Stage record store
//!
//! Owns the seeded sequence of [`StageRecord`]s plus the active-selection
//! id. Records are held behind `Arc` so an update clones only the record
//! it targets; every other record keeps its allocation, which is what
//! lets renderers treat untouched records as identical between frames.
//!
//! The store is owned exclusively by the application struct and mutated
//! only from inside the input handler, so writes are serialized by
//! ownership rather than locks.

use std::sync::Arc;

use crate::catalog::Dataset;
use crate::error::{Result, StageViewError};
use crate::types::StageRecord;

/// In-memory store of stage records with at most one active selection
pub struct StageStore {
    records: Vec<Arc<StageRecord>>,
    active: Option<String>,
}

impl StageStore {
    /// Build a store from a validated dataset, preserving seed order.
    ///
    /// Duplicate ids are rejected here: with two records answering to the
    /// same id, targeted updates would be ambiguous.
    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for record in &dataset.stages {
            if !seen.insert(record.id.clone()) {
                return Err(StageViewError::Catalog(format!(
                    "duplicate stage id '{}'",
                    record.id
                )));
            }
        }
        Ok(Self {
            records: dataset.stages.into_iter().map(Arc::new).collect(),
            active: None,
        })
    }

    /// All records in seed order. The order never changes.
    pub fn records(&self) -> &[Arc<StageRecord>] {
        &self.records
    }

    /// Number of seeded records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id of the active record, if any
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active record, if any
    pub fn active(&self) -> Option<&Arc<StageRecord>> {
        let id = self.active.as_deref()?;
        self.records.iter().find(|r| r.id == id)
    }

    /// Set the active record. `None` closes any open detail view. An id
    /// not present in the store leaves the previous selection unchanged.
    pub fn select(&mut self, id: Option<&str>) {
        match id {
            None => self.active = None,
            Some(id) if self.records.iter().any(|r| r.id == id) => {
                self.active = Some(id.to_string());
            }
            Some(id) => {
                tracing::warn!(id, "select targeted a missing stage id");
            }
        }
    }

    /// Replace the record matching `id` with the result of applying
    /// `transform` to a copy of it. All other records keep their `Arc`
    /// allocation untouched. A missing id is a warn-level no-op; the UI
    /// only ever calls this with an id it just displayed.
    pub fn update<F>(&mut self, id: &str, transform: F)
    where
        F: FnOnce(&mut StageRecord),
    {
        let Some(slot) = self.records.iter_mut().find(|r| r.id == id) else {
            tracing::warn!(id, "update targeted a missing stage id");
            return;
        };
        let mut record = (**slot).clone();
        transform(&mut record);
        *slot = Arc::new(record);
    }

    /// Replace the whole record set from a freshly loaded dataset,
    /// closing any open detail view. Used when the user swaps the seed
    /// catalog for another file.
    pub fn replace_with(&mut self, other: StageStore) {
        self.records = other.records;
        self.active = None;
    }
}
