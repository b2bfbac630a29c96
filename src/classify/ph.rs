//! Soil pH Classification
//!
//! Seven-category scale from Extremely Acidic to Extremely Alkaline. The
//! published agronomy table lists closed intervals with 0.1-wide seams
//! between them ([4.6,5.5], [5.6,6.5], ...); the implementation uses ordered
//! half-open comparisons at the .6 boundaries so every real value, seam
//! points included, resolves to exactly one category. Seam points (e.g.
//! 5.55) join their more acidic neighbor. All listed boundary values land in
//! the interval the table assigns them.

use super::severity::{Category, Severity};

/// pH category on the seven-step acidity/alkalinity scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhCategory {
    /// pH < 4.6 - toxic to most crops
    ExtremelyAcidic,

    /// [4.6, 5.5] - most crops struggle
    StronglyAcidic,

    /// [5.6, 6.5] - fine for acid-tolerant crops
    Acidic,

    /// [6.6, 7.5] - the healthy band for most crops
    Neutral,

    /// [7.6, 8.5] - fine for alkaline-tolerant crops
    Alkaline,

    /// [8.6, 9.1] - most crops struggle
    StronglyAlkaline,

    /// pH > 9.1 - toxic to most crops
    ExtremelyAlkaline,
}

impl PhCategory {
    pub fn display_text(&self) -> &'static str {
        match self {
            PhCategory::ExtremelyAcidic => "Extremely Acidic",
            PhCategory::StronglyAcidic => "Strongly Acidic",
            PhCategory::Acidic => "Acidic",
            PhCategory::Neutral => "Neutral",
            PhCategory::Alkaline => "Alkaline",
            PhCategory::StronglyAlkaline => "Strongly Alkaline",
            PhCategory::ExtremelyAlkaline => "Extremely Alkaline",
        }
    }

    /// Severity is symmetric around Neutral: one step out is moderately
    /// high, two steps is moderately low, the extremes are critical.
    pub fn severity(&self) -> Severity {
        match self {
            PhCategory::Neutral => Severity::Healthy,
            PhCategory::Acidic | PhCategory::Alkaline => Severity::ModeratelyHigh,
            PhCategory::StronglyAcidic | PhCategory::StronglyAlkaline => Severity::ModeratelyLow,
            PhCategory::ExtremelyAcidic | PhCategory::ExtremelyAlkaline => Severity::Critical,
        }
    }

    pub fn category(&self) -> Category {
        Category::new(self.display_text(), self.severity())
    }

    /// All categories, acid to alkaline
    pub fn all() -> &'static [PhCategory] {
        &[
            PhCategory::ExtremelyAcidic,
            PhCategory::StronglyAcidic,
            PhCategory::Acidic,
            PhCategory::Neutral,
            PhCategory::Alkaline,
            PhCategory::StronglyAlkaline,
            PhCategory::ExtremelyAlkaline,
        ]
    }
}

/// Classify a soil pH reading.
///
/// Total over `f64`: values outside the 0-14 scale are not rejected, and a
/// non-finite reading is treated as off-scale acid (critical tier).
pub fn classify_ph(ph: f64) -> PhCategory {
    if !ph.is_finite() {
        return PhCategory::ExtremelyAcidic;
    }

    if ph < 4.6 {
        PhCategory::ExtremelyAcidic
    } else if ph < 5.6 {
        PhCategory::StronglyAcidic
    } else if ph < 6.6 {
        PhCategory::Acidic
    } else if ph < 7.6 {
        PhCategory::Neutral
    } else if ph < 8.6 {
        PhCategory::Alkaline
    } else if ph <= 9.1 {
        PhCategory::StronglyAlkaline
    } else {
        PhCategory::ExtremelyAlkaline
    }
}
