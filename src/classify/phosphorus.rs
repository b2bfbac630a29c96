//! Phosphorus Classification
//!
//! Phosphorus availability depends on the laboratory extraction method, and
//! the appropriate method depends on soil pH: alkaline soils (pH > 7) are
//! read against Olsen thresholds, acidic/neutral soils against Bray-1. The
//! same raw reading can therefore classify differently in different soils.

use super::severity::NutrientLevel;

/// Laboratory extraction method assumed for a phosphorus reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionMethod {
    /// Bicarbonate extraction, standard for alkaline soils
    Olsen,

    /// Acid-fluoride extraction, standard for acidic soils
    Bray1,
}

impl ExtractionMethod {
    /// Pick the extraction method for a soil's pH
    pub fn for_ph(ph: f64) -> Self {
        if ph > 7.0 {
            ExtractionMethod::Olsen
        } else {
            ExtractionMethod::Bray1
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            ExtractionMethod::Olsen => "Olsen",
            ExtractionMethod::Bray1 => "Bray-1",
        }
    }

    /// Classify a phosphorus reading against this method's thresholds.
    ///
    /// Olsen: >15 High, [10,15] Moderately High, [5,10) Moderately Low.
    /// Bray-1: >20 High, [15,20] Moderately High, [10,15) Moderately Low.
    /// Below the lowest band, and for non-finite readings: Low.
    pub fn classify(&self, p: f64) -> NutrientLevel {
        if !p.is_finite() {
            return NutrientLevel::Low;
        }

        let (high, moderate, low) = match self {
            ExtractionMethod::Olsen => (15.0, 10.0, 5.0),
            ExtractionMethod::Bray1 => (20.0, 15.0, 10.0),
        };

        if p > high {
            NutrientLevel::High
        } else if p >= moderate {
            NutrientLevel::ModeratelyHigh
        } else if p >= low {
            NutrientLevel::ModeratelyLow
        } else {
            NutrientLevel::Low
        }
    }
}

/// Classify a phosphorus reading given the companion soil pH.
///
/// The pH only selects the extraction-method thresholds; it is not part of
/// the returned category.
pub fn classify_phosphorus(p: f64, ph: f64) -> NutrientLevel {
    ExtractionMethod::for_ph(ph).classify(p)
}
