//! Nitrogen Classification
//!
//! Single threshold table, kg/ha-equivalent readings.

use super::severity::NutrientLevel;

/// Classify a nitrogen reading.
///
/// Thresholds: >=23 High, [18,23) Moderately High, [10.5,18) Moderately Low,
/// else Low. Non-finite readings land in Low (critical tier).
pub fn classify_nitrogen(n: f64) -> NutrientLevel {
    if !n.is_finite() {
        return NutrientLevel::Low;
    }

    if n >= 23.0 {
        NutrientLevel::High
    } else if n >= 18.0 {
        NutrientLevel::ModeratelyHigh
    } else if n >= 10.5 {
        NutrientLevel::ModeratelyLow
    } else {
        NutrientLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_nitrogen(23.0), NutrientLevel::High);
        assert_eq!(classify_nitrogen(22.999), NutrientLevel::ModeratelyHigh);
        assert_eq!(classify_nitrogen(18.0), NutrientLevel::ModeratelyHigh);
        assert_eq!(classify_nitrogen(17.999), NutrientLevel::ModeratelyLow);
        assert_eq!(classify_nitrogen(10.5), NutrientLevel::ModeratelyLow);
        assert_eq!(classify_nitrogen(10.499), NutrientLevel::Low);
        assert_eq!(classify_nitrogen(0.0), NutrientLevel::Low);
    }

    #[test]
    fn test_non_finite_is_low() {
        assert_eq!(classify_nitrogen(f64::NAN), NutrientLevel::Low);
    }
}
