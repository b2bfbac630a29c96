//! Canonical Report & Normalization Rules
//!
//! One function, [`normalize_record`], reconciles every record shape the app
//! encounters into the canonical [`Report`]:
//!
//! - backend/database rows: short snake_case keys (`n`, `p`, `k`,
//!   `ph_level`, `pot_name`, `prediction`, `recommended_crop`, `avoids`,
//!   `image_url`, `created_at`)
//! - in-memory app state: descriptive camelCase keys (`nitrogen`,
//!   `phosphorus`, `potassium`, `phLevel`, `potName`, `soilTexture`,
//!   `recommendedCrop`, `avoid`, `soilImage`, `generatedAt`)
//!
//! The canonical field names are themselves among the candidate keys, so
//! normalizing an already-normalized report is a no-op. Normalization never
//! fails: every field has a documented default and malformed values fall to
//! it instead of propagating an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::RawRecord;
use crate::classify::{
    classify_nitrogen, classify_ph, classify_phosphorus, classify_potassium, NutrientLevel,
    PhCategory,
};
use crate::texture::sanitize_texture;

/// Pot name used when no source key supplies one
pub const DEFAULT_POT_NAME: &str = "Unnamed Pot";

/// Recommendation used when no source key supplies one
pub const NO_RECOMMENDATION: &str = "No recommendation";

/// Canonical soil report, the only shape downstream code consumes.
///
/// Serializes with camelCase keys (the in-memory app-state shape), which is
/// what makes normalization idempotent. Constructed once by
/// [`normalize_record`], read-only thereafter; new data supersedes a report
/// by normalizing a fresh record, never by mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Stable identity for list dedup; backend row id or a generated token
    pub id: String,

    /// User-assigned pot/plot grouping key
    pub pot_name: String,

    /// Nitrogen reading
    pub nitrogen: f64,

    /// Phosphorus reading
    pub phosphorus: f64,

    /// Potassium reading
    pub potassium: f64,

    /// Soil pH, unitless 0-14 scale
    pub ph_level: f64,

    /// Whitelisted texture label or the "Not detected" sentinel
    pub soil_texture: String,

    /// Crop the model recommends, or "No recommendation"
    pub recommended_crop: String,

    /// Companion crops for the recommendation
    pub companions: Vec<String>,

    /// Crops to keep away from the recommendation
    pub avoid: Vec<String>,

    /// Classifier confidence in [0,1]; None when the source omitted it or
    /// supplied a non-numeric value (never coerced, never treated as zero)
    pub confidence: Option<f64>,

    /// URL of the soil sample photo, if one was taken
    pub soil_image: Option<String>,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn ph_category(&self) -> PhCategory {
        classify_ph(self.ph_level)
    }

    pub fn nitrogen_level(&self) -> NutrientLevel {
        classify_nitrogen(self.nitrogen)
    }

    pub fn phosphorus_level(&self) -> NutrientLevel {
        classify_phosphorus(self.phosphorus, self.ph_level)
    }

    pub fn potassium_level(&self) -> NutrientLevel {
        classify_potassium(self.potassium)
    }

    /// Reports without a pot name are hidden from history lists
    pub fn has_pot_name(&self) -> bool {
        !self.pot_name.trim().is_empty()
    }
}

/// Fresh identity token for records the backend has not assigned an id yet.
///
/// Epoch millis stringified, matching the ids the app minted before
/// persistence; good enough for list dedup, superseded by the row id once
/// the backend stores the report.
fn generated_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Normalize one raw record of any accepted shape into a canonical report.
pub fn normalize_record(raw: &Value) -> Report {
    let record = RawRecord::new(raw);

    let report = Report {
        id: record
            .field(&["id"])
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(generated_id),
        pot_name: record.string(&["pot_name", "potName"], DEFAULT_POT_NAME),
        nitrogen: record.number(&["n", "N", "nitrogen"]),
        phosphorus: record.number(&["p", "P", "phosphorus"]),
        potassium: record.number(&["k", "K", "potassium"]),
        ph_level: record.number(&["ph_level", "ph", "phLevel"]),
        soil_texture: sanitize_texture(record.field(&[
            "prediction",
            "soil_texture",
            "soilTexture",
        ])),
        recommended_crop: record.string(
            &["recommended_crop", "recommendedCrop"],
            NO_RECOMMENDATION,
        ),
        companions: record.string_list(&["companions"]),
        avoid: record.string_list(&["avoids", "avoid"]),
        confidence: record.number_opt(&["confidence", "conf"]),
        soil_image: record.string_opt(&["image_url", "imageUrl", "soilImage"]),
        generated_at: record.timestamp(&["created_at", "generatedAt"]),
    };

    tracing::debug!(
        id = %report.id,
        pot = %report.pot_name,
        texture = %report.soil_texture,
        "normalized raw record"
    );

    report
}
