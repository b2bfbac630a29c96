//! Potassium Classification
//!
//! Single threshold table, kg/ha-equivalent readings. The published table
//! steps at 0.1 offsets (30.1, 15.1), so e.g. 30.0 is Moderately Low while
//! 30.1 is Moderately High.

use super::severity::NutrientLevel;

/// Classify a potassium reading.
///
/// Thresholds: >50 High, [30.1,50] Moderately High, [15.1,30.1) Moderately
/// Low, else Low. Non-finite readings land in Low (critical tier).
pub fn classify_potassium(k: f64) -> NutrientLevel {
    if !k.is_finite() {
        return NutrientLevel::Low;
    }

    if k > 50.0 {
        NutrientLevel::High
    } else if k >= 30.1 {
        NutrientLevel::ModeratelyHigh
    } else if k >= 15.1 {
        NutrientLevel::ModeratelyLow
    } else {
        NutrientLevel::Low
    }
}
