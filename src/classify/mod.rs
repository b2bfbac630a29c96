//! Nutrient and pH Classification
//!
//! Pure threshold classifiers that map raw sensor readings into discrete
//! categories with a shared four-tier severity/color vocabulary. Stateless
//! and total over `f64`: every finite input lands in exactly one category,
//! and non-finite inputs are treated as off-scale-low readings (critical
//! tier) rather than rejected.
//!
//! ## Architecture
//! - `severity.rs` - shared severity tiers + display colors
//! - `ph.rs` - 7-category pH scale
//! - `nitrogen.rs` - single-threshold-table nitrogen levels
//! - `phosphorus.rs` - pH-dependent extraction method (Olsen vs Bray-1)
//! - `potassium.rs` - single-threshold-table potassium levels

pub mod nitrogen;
pub mod ph;
pub mod phosphorus;
pub mod potassium;
pub mod severity;

// Re-export public API
pub use nitrogen::classify_nitrogen;
pub use ph::{classify_ph, PhCategory};
pub use phosphorus::{classify_phosphorus, ExtractionMethod};
pub use potassium::classify_potassium;
pub use severity::{Category, NutrientLevel, Severity};
