//! Soil Report Core
//!
//! Classification and report-normalization logic for the soil-analysis and
//! crop-recommendation app:
//! - `classify/`: deterministic threshold classifiers for pH, N, P, K
//! - `texture`: soil-texture whitelist sanitization + bulk densities
//! - `units`: mg/kg -> kg/ha conversion and agronomic plausibility ranges
//! - `report/`: normalization of heterogeneous backend/app records into one
//!   canonical `Report`, plus the persisted report history
//!
//! Screens, navigation, auth, image upload and the remote inference service
//! live outside this crate; it only sees the records they produce.

pub mod classify;
pub mod report;
pub mod texture;
pub mod units;

// Re-export commonly used types
pub use classify::{
    classify_nitrogen, classify_ph, classify_phosphorus, classify_potassium, Category,
    ExtractionMethod, NutrientLevel, PhCategory, Severity,
};
pub use report::{
    normalize_record, HistoryStorage, HistoryStore, JsonFileStorage, MemoryStorage, Report,
    ReportSession, StorageError,
};
pub use texture::{sanitize_texture, SoilTexture, NOT_DETECTED};
pub use units::{mgkg_to_kgha, within_agronomic_range, ConvertedNpk};
