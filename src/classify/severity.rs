//! Shared Severity Vocabulary
//!
//! Every classifier in this module resolves to one of four severity tiers,
//! each with a fixed display color. Using the same four tiers for all four
//! measurement types gives the dashboard one uniform visual language: a red
//! chip means "act now" whether it is pH or potassium.

use serde::{Deserialize, Serialize};

/// Display severity tier shared by all measurement categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// In the healthy band for this measurement
    Healthy,

    /// Above the healthy band, not yet harmful
    ModeratelyHigh,

    /// Below the healthy band, supplementation advised
    ModeratelyLow,

    /// Off the healthy scale in either direction
    Critical,
}

impl Severity {
    /// Hex color used by the dashboard chips and the PDF export
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Healthy => "#4CAF50",
            Severity::ModeratelyHigh => "#FFC107",
            Severity::ModeratelyLow => "#FF9800",
            Severity::Critical => "#F44336",
        }
    }

    /// Friendly color name for plain-text rendering
    pub fn color_name(&self) -> &'static str {
        match self {
            Severity::Healthy => "green",
            Severity::ModeratelyHigh => "yellow",
            Severity::ModeratelyLow => "orange",
            Severity::Critical => "red",
        }
    }
}

/// Classification result: human-readable label + severity color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub severity: Severity,
}

impl Category {
    pub(crate) fn new(label: &'static str, severity: Severity) -> Self {
        Self { label, severity }
    }

    /// Hex color for this category's severity tier
    pub fn color(&self) -> &'static str {
        self.severity.color()
    }
}

/// Level vocabulary shared by the three nutrient classifiers (N, P, K)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutrientLevel {
    High,
    ModeratelyHigh,
    ModeratelyLow,
    Low,
}

impl NutrientLevel {
    pub fn display_text(&self) -> &'static str {
        match self {
            NutrientLevel::High => "High",
            NutrientLevel::ModeratelyHigh => "Moderately High",
            NutrientLevel::ModeratelyLow => "Moderately Low",
            NutrientLevel::Low => "Low",
        }
    }

    /// A high nutrient reading is the healthy tier in this app's scale;
    /// everything below it steps down the severity ladder.
    pub fn severity(&self) -> Severity {
        match self {
            NutrientLevel::High => Severity::Healthy,
            NutrientLevel::ModeratelyHigh => Severity::ModeratelyHigh,
            NutrientLevel::ModeratelyLow => Severity::ModeratelyLow,
            NutrientLevel::Low => Severity::Critical,
        }
    }

    pub fn category(&self) -> Category {
        Category::new(self.display_text(), self.severity())
    }
}
