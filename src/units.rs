//! Nutrient Unit Conversion & Plausibility
//!
//! Sensors report N/P/K in mg/kg; the crop-recommendation model was trained
//! on kg/ha. Conversion assumes a 30 cm sampling depth and the bulk density
//! of the classified soil texture:
//!
//!   soil mass (kg/ha) = bulk density * 30 * 1e5
//!   nutrient (kg/ha)  = nutrient (mg/kg) * soil mass / 1e6
//!
//! Readings far outside agronomic ranges get no crop recommendation instead
//! of a garbage one; the ranges here mirror the backend's guards.

use crate::texture::SoilTexture;

/// Sampling depth assumed by the conversion, in cm
const SAMPLING_DEPTH_CM: f64 = 30.0;

/// Agronomic plausibility range for converted N/P/K, kg/ha
pub const NPK_RANGE: std::ops::RangeInclusive<f64> = 0.0..=500.0;

/// Agronomic plausibility range for pH
pub const PH_RANGE: std::ops::RangeInclusive<f64> = 3.5..=9.5;

/// N/P/K readings converted to kg/ha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedNpk {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

/// Convert mg/kg readings to kg/ha for a known soil texture.
///
/// Returns `None` when the texture label is not in the whitelist (no bulk
/// density to assume); callers then fall back to the raw readings.
pub fn mgkg_to_kgha(n: f64, p: f64, k: f64, texture_label: &str) -> Option<ConvertedNpk> {
    let texture = SoilTexture::from_label(texture_label)?;
    let soil_mass = texture.bulk_density() * SAMPLING_DEPTH_CM * 1e5;
    let factor = soil_mass / 1e6;
    Some(ConvertedNpk {
        n: n * factor,
        p: p * factor,
        k: k * factor,
    })
}

/// Check converted readings against the agronomic plausibility ranges.
///
/// Outside these ranges the model's training data says nothing useful, so
/// the app reports "No suitable crops" rather than a recommendation.
pub fn within_agronomic_range(npk: &ConvertedNpk, ph: f64) -> bool {
    NPK_RANGE.contains(&npk.n)
        && NPK_RANGE.contains(&npk.p)
        && NPK_RANGE.contains(&npk.k)
        && PH_RANGE.contains(&ph)
}
