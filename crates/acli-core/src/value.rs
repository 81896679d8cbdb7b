//! Scalar configuration values and textual coercion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single configuration value.
///
/// The mapping only ever holds these four scalar kinds. The untagged
/// representation keeps the file format plain JSON scalars; anything else
/// in the file (arrays, objects, null) fails to deserialize and is
/// reported as corruption by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ConfigValue {
    /// Short label for the value's kind, shown in the `list` table.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "int",
            ConfigValue::Float(_) => "float",
            ConfigValue::Str(_) => "str",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(n) => write!(f, "{}", n),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Convert user-supplied text into the most specific matching scalar.
///
/// Rules, in order, first match wins:
/// 1. `"true"`/`"false"` (case-insensitive) become a boolean;
/// 2. a non-empty run of decimal digits (no sign) becomes an integer;
/// 3. if removing every `.` leaves a non-empty run of digits, the text is
///    tried as a float, keeping the original string when the parse fails
///    (so `"1.2.3"` stays a string);
/// 4. anything else stays a string.
///
/// Coercion never fails; worst case the input comes back unchanged. Only
/// plain text goes through here - values already structurally typed
/// (JSON-decoded ones) are never re-coerced.
pub fn coerce(raw: &str) -> ConfigValue {
    let lower = raw.to_lowercase();
    if lower == "true" || lower == "false" {
        return ConfigValue::Bool(lower == "true");
    }

    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = raw.parse::<i64>() {
            return ConfigValue::Int(n);
        }
        // digits too large for i64 fall through to the float rule
    }

    let without_dots: String = raw.chars().filter(|c| *c != '.').collect();
    if !without_dots.is_empty() && without_dots.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(x) = raw.parse::<f64>() {
            return ConfigValue::Float(x);
        }
    }

    ConfigValue::Str(raw.to_string())
}
