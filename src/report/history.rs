//! Report History
//!
//! Append-only, newest-first collection of every report the user has
//! generated, mirrored to durable storage on each change. The storage
//! backend is injected through [`HistoryStorage`], so tests run against an
//! in-memory fake and the app against a JSON file.
//!
//! All mutation goes through `&mut self` on [`HistoryStore`], which
//! serializes writers in single-threaded use. If the store is ever shared
//! across threads, wrap it in a mutex: the load-append-persist sequence is
//! a critical section, and two concurrent appends reading the same stale
//! list would silently drop a report.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::normalize::Report;

/// History persistence failure
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("history storage I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("history storage encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Durable storage backend for the report history
pub trait HistoryStorage {
    /// Load the persisted history, newest-first; empty when nothing has
    /// been persisted yet
    fn load(&self) -> Result<Vec<Report>, StorageError>;

    /// Replace the persisted history with `entries`
    fn persist(&self, entries: &[Report]) -> Result<(), StorageError>;
}

/// JSON-file storage, the app's durable local storage analog
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Report>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn persist(&self, entries: &[Report]) -> Result<(), StorageError> {
        let encoded = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}

/// In-memory storage fake for deterministic tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<Vec<Report>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the fake currently holds, for assertions
    pub fn snapshot(&self) -> Vec<Report> {
        self.entries.borrow().clone()
    }
}

impl HistoryStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Report>, StorageError> {
        Ok(self.entries.borrow().clone())
    }

    fn persist(&self, entries: &[Report]) -> Result<(), StorageError> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}

/// Newest-first report history backed by a storage implementation
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    entries: Vec<Report>,
}

impl<S: HistoryStorage> HistoryStore<S> {
    /// Open the store, loading whatever the backend already holds
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let entries = storage.load()?;
        tracing::debug!(count = entries.len(), "loaded report history");
        Ok(Self { storage, entries })
    }

    /// Prepend a report and mirror the new list to storage.
    ///
    /// The append is unconditional (duplicates are filtered at read time,
    /// not refused here) and fire-and-forget with respect to persistence: a
    /// persist failure is logged and the in-memory entry kept, accepting
    /// the one-entry loss window on crash.
    pub fn append(&mut self, report: Report) {
        self.entries.insert(0, report);
        if let Err(err) = self.storage.persist(&self.entries) {
            tracing::warn!(error = %err, "failed to persist report history");
        }
    }

    /// Drop all history, in memory and in storage
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.storage.persist(&self.entries)
    }

    /// Full history, newest first, duplicates included
    pub fn entries(&self) -> &[Report] {
        &self.entries
    }

    /// History as rendered in lists: first occurrence of each id wins,
    /// entries without a pot name are dropped.
    pub fn display_entries(&self) -> Vec<&Report> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        self.entries
            .iter()
            .filter(|report| report.has_pot_name())
            .filter(|report| seen.insert(report.id.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
