//! Raw Record Key Probing
//!
//! A thin wrapper over a raw JSON record that resolves each logical field by
//! trying candidate keys in a fixed priority order. An explicit `null` counts
//! as absent, so a database row with `"image_url": null` falls through to
//! the next candidate or the default, the same as a missing key.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Borrowed view over one raw record of unknown shape
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    value: &'a Value,
}

impl<'a> RawRecord<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// First present, non-null value among the candidate keys
    pub fn field(&self, keys: &[&str]) -> Option<&'a Value> {
        let map = self.value.as_object()?;
        keys.iter()
            .filter_map(|key| map.get(*key))
            .find(|v| !v.is_null())
    }

    /// Resolve a string field, falling back to `default`.
    ///
    /// A present non-string value counts as absent; a present empty string
    /// is kept as-is (the read-time display filter handles empty pot names).
    pub fn string(&self, keys: &[&str], default: &str) -> String {
        self.field(keys)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string())
    }

    /// Resolve a numeric field.
    ///
    /// Only number-typed JSON is accepted; strings, booleans and other
    /// malformed values take the 0.0 default uniformly, so the classifiers
    /// always receive a finite number.
    pub fn number(&self, keys: &[&str]) -> f64 {
        self.field(keys).and_then(Value::as_f64).unwrap_or(0.0)
    }

    /// Resolve an optional numeric field without coercion.
    ///
    /// A present value of any non-number type resolves to `None` rather
    /// than a guessed number.
    pub fn number_opt(&self, keys: &[&str]) -> Option<f64> {
        self.field(keys).and_then(Value::as_f64)
    }

    /// Resolve a list-of-strings field.
    ///
    /// Always yields an actual sequence: a missing key, a non-array value,
    /// and an empty array all normalize to `[]`; non-string elements inside
    /// an array are skipped.
    pub fn string_list(&self, keys: &[&str]) -> Vec<String> {
        self.field(keys)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resolve an optional string field with no default
    pub fn string_opt(&self, keys: &[&str]) -> Option<String> {
        self.field(keys).and_then(Value::as_str).map(str::to_string)
    }

    /// Resolve an RFC 3339 timestamp field, defaulting to now.
    ///
    /// Unparseable timestamps take the default rather than failing the
    /// whole record.
    pub fn timestamp(&self, keys: &[&str]) -> DateTime<Utc> {
        self.field(keys)
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(Utc::now)
    }
}
