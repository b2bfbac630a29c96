//! Report Normalization & History
//!
//! The app sees soil reports in three shapes: freshly-returned inference
//! responses, persisted database rows (short snake_case columns), and
//! previously-normalized in-memory state (camelCase). Everything downstream
//! of this module consumes exactly one shape: the canonical [`Report`].
//!
//! ## Architecture
//! - `record.rs` - key probing over raw JSON records
//! - `normalize.rs` - canonical `Report` + the normalization rules
//! - `history.rs` - newest-first report history with injectable storage
//! - `session.rs` - current-report pointer, normalize-then-append pipeline

pub mod history;
pub mod normalize;
pub mod record;
pub mod session;

// Re-export public API
pub use history::{HistoryStorage, HistoryStore, JsonFileStorage, MemoryStorage, StorageError};
pub use normalize::{normalize_record, Report};
pub use record::RawRecord;
pub use session::ReportSession;
