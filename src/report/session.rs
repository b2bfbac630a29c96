//! Report Session
//!
//! Ties normalization to the history side effect: each ingested raw record
//! becomes the current report and is appended to the persisted history. The
//! current-report pointer is what the result screen and PDF export read;
//! it may reference a transient report before the backend persists the row.

use serde_json::Value;

use super::history::{HistoryStorage, HistoryStore, StorageError};
use super::normalize::{normalize_record, Report};

/// Current report + history pipeline over an injected storage backend
#[derive(Debug)]
pub struct ReportSession<S> {
    history: HistoryStore<S>,
    current: Option<Report>,
}

impl<S: HistoryStorage> ReportSession<S> {
    /// Open a session over existing history
    pub fn open(storage: S) -> Result<Self, StorageError> {
        Ok(Self {
            history: HistoryStore::open(storage)?,
            current: None,
        })
    }

    /// Normalize one raw record, make it current, append it to history.
    ///
    /// Returns the new current report. Never fails: normalization is total
    /// and persistence failures are absorbed by the store.
    pub fn ingest(&mut self, raw: &Value) -> &Report {
        let report = normalize_record(raw);
        self.history.append(report.clone());
        self.current.insert(report)
    }

    /// The report the result screen is showing, if any
    pub fn current(&self) -> Option<&Report> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// Drop the history and the current pointer
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.current = None;
        self.history.clear()
    }
}
