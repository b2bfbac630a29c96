//! Soil Texture Whitelist
//!
//! The remote image classifier returns free-form texture labels ("Loamy",
//! "loamy_Trained" cleaned upstream, or "No Soil Detected" when it is
//! unsure). Only four textures are meaningful to the rest of the app; any
//! other value, including null or a non-string, sanitizes to the
//! "Not detected" sentinel. Every texture also carries the bulk density the
//! backend uses for mg/kg -> kg/ha conversion.

use serde_json::Value;

/// Sentinel label for anything outside the texture whitelist.
///
/// A legitimate, displayable value, not a failure signal.
pub const NOT_DETECTED: &str = "Not detected";

/// Whitelisted soil texture classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilTexture {
    Sandy,
    Loamy,
    Clay,
    Silt,
}

impl SoilTexture {
    /// Canonical display form, as stored in reports
    pub fn display_text(&self) -> &'static str {
        match self {
            SoilTexture::Sandy => "Sandy",
            SoilTexture::Loamy => "Loamy",
            SoilTexture::Clay => "Clay",
            SoilTexture::Silt => "Silt",
        }
    }

    /// Bulk density in g/cm3, used for unit conversion
    pub fn bulk_density(&self) -> f64 {
        match self {
            SoilTexture::Sandy => 1.6,
            SoilTexture::Loamy => 1.3,
            SoilTexture::Clay => 1.15,
            SoilTexture::Silt => 1.25,
        }
    }

    /// Case-insensitive, whitespace-tolerant whitelist match
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "sandy" => Some(SoilTexture::Sandy),
            "loamy" => Some(SoilTexture::Loamy),
            "clay" => Some(SoilTexture::Clay),
            "silt" => Some(SoilTexture::Silt),
            _ => None,
        }
    }

    /// All whitelisted textures
    pub fn all() -> &'static [SoilTexture] {
        &[
            SoilTexture::Sandy,
            SoilTexture::Loamy,
            SoilTexture::Clay,
            SoilTexture::Silt,
        ]
    }
}

/// Normalize a raw texture value to a member of {whitelist ∪ sentinel}.
///
/// Accepts the raw JSON value so missing keys, nulls and non-strings all
/// take the same path as unrecognized labels.
pub fn sanitize_texture(raw: Option<&Value>) -> String {
    let label = raw.and_then(Value::as_str).unwrap_or("");
    match SoilTexture::from_label(label) {
        Some(texture) => texture.display_text().to_string(),
        None => NOT_DETECTED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(sanitize_texture(Some(&json!("loamy"))), "Loamy");
        assert_eq!(sanitize_texture(Some(&json!("LOAMY"))), "Loamy");
        assert_eq!(sanitize_texture(Some(&json!(" Loamy "))), "Loamy");
        assert_eq!(sanitize_texture(Some(&json!("Sandy"))), "Sandy");
    }

    #[test]
    fn test_unrecognized_and_non_string() {
        assert_eq!(sanitize_texture(Some(&json!("Rocky"))), NOT_DETECTED);
        assert_eq!(sanitize_texture(Some(&json!("No Soil Detected"))), NOT_DETECTED);
        assert_eq!(sanitize_texture(Some(&Value::Null)), NOT_DETECTED);
        assert_eq!(sanitize_texture(Some(&json!(42))), NOT_DETECTED);
        assert_eq!(sanitize_texture(None), NOT_DETECTED);
    }

    #[test]
    fn test_sentinel_is_stable() {
        // The sentinel itself is not in the whitelist, so re-sanitizing a
        // sanitized value is a no-op.
        assert_eq!(sanitize_texture(Some(&json!(NOT_DETECTED))), NOT_DETECTED);
    }

    #[test]
    fn test_bulk_densities() {
        assert_eq!(SoilTexture::Sandy.bulk_density(), 1.6);
        assert_eq!(SoilTexture::Loamy.bulk_density(), 1.3);
        assert_eq!(SoilTexture::Clay.bulk_density(), 1.15);
        assert_eq!(SoilTexture::Silt.bulk_density(), 1.25);
    }
}
