//! Decoding of create/update request bodies.
//!
//! Bodies are decoded once, permissively: anything that is not a JSON object
//! becomes an empty payload, and each field is cast into the shape the
//! validator works with.

use serde_json::Value as JsonValue;

/// A numeric field as received from the client.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NumericField {
    /// Missing from the body or `null`.
    #[default]
    Absent,
    /// The empty string.
    Blank,
    Number(f64),
    /// Present but not a decimal number.
    Invalid,
}

impl NumericField {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            NumericField::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, NumericField::Absent)
    }
}

/// Movie fields decoded from a request body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieInput {
    /// Trimmed, empty when missing.
    pub title: String,
    /// Trimmed, empty when missing.
    pub genre: String,
    pub year: NumericField,
    pub rating: NumericField,
    pub watched: bool,
}

impl MovieInput {
    /// Decodes a raw request body. Malformed JSON yields an empty payload.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<JsonValue>(body) {
            Ok(value) => Self::from_json(&value),
            Err(_) => Self::default(),
        }
    }

    pub fn from_json(value: &JsonValue) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            title: text_of(obj.get("title")),
            genre: text_of(obj.get("genre")),
            year: numeric_of(obj.get("year")),
            rating: numeric_of(obj.get("rating")),
            watched: flag_of(obj.get("watched")),
        }
    }
}

fn text_of(value: Option<&JsonValue>) -> String {
    match value {
        Some(JsonValue::String(s)) => s.trim().to_string(),
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(JsonValue::Bool(true)) => "1".to_string(),
        _ => String::new(),
    }
}

fn numeric_of(value: Option<&JsonValue>) -> NumericField {
    match value {
        None | Some(JsonValue::Null) => NumericField::Absent,
        Some(JsonValue::Number(n)) => n
            .as_f64()
            .map_or(NumericField::Invalid, NumericField::Number),
        Some(JsonValue::String(s)) if s.is_empty() => NumericField::Blank,
        Some(JsonValue::String(s)) => {
            parse_decimal(s).map_or(NumericField::Invalid, NumericField::Number)
        }
        Some(_) => NumericField::Invalid,
    }
}

/// Accepts plain decimal notation only; `f64::from_str` alone would also take
/// `inf` and `NaN`.
fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let has_digit = s.bytes().any(|b| b.is_ascii_digit());
    let allowed = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !has_digit || !allowed {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn flag_of(value: Option<&JsonValue>) -> bool {
    match value {
        Some(JsonValue::Bool(b)) => *b,
        Some(JsonValue::Number(n)) => n.as_f64() == Some(1.0),
        Some(JsonValue::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "on" | "yes"
        ),
        _ => false,
    }
}
