//! `snmpget`-style response parsing.
//!
//! A response line looks like `OID = TYPE: VALUE`, for example
//! `PowerNet-MIB::upsAdvInputLineVoltage.0 = Gauge32: 228`. Normalization keeps
//! only the value, typed as an integer or float when it parses as one.

use crate::model::SnmpValue;
use regex::Regex;
use std::sync::LazyLock;

/// Type tags that may prefix the value part of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Integer,
    String,
    Gauge32,
    Counter32,
    Opaque,
    Oid,
}

impl TypeTag {
    /// Tags in the order they are stripped
    pub const ALL: [Self; 6] = [
        Self::Integer,
        Self::String,
        Self::Gauge32,
        Self::Counter32,
        Self::Opaque,
        Self::Oid,
    ];

    /// Literal prefix, including the trailing colon
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER:",
            Self::String => "STRING:",
            Self::Gauge32 => "Gauge32:",
            Self::Counter32 => "Counter32:",
            Self::Opaque => "Opaque:",
            Self::Oid => "OID:",
        }
    }

    /// Strip this tag and any whitespace following it
    fn strip<'a>(&self, value: &'a str) -> &'a str {
        value
            .strip_prefix(self.prefix())
            .map_or(value, str::trim_start)
    }
}

/// Normalize one raw metric value.
///
/// Numbers and empty text come back unchanged. Text containing `=` is treated
/// as a response line: the part after the first `=` is stripped of its type
/// tag and surrounding quotes, then parsed as a float (when it contains a `.`)
/// or an integer (a float when the integer overflows `i64`), falling back to
/// the cleaned text. Text without `=` is only trimmed. Never fails.
#[must_use]
pub fn normalize(raw: &SnmpValue) -> SnmpValue {
    match raw {
        SnmpValue::Text(text) if !text.is_empty() => normalize_text(text),
        other => other.clone(),
    }
}

/// Normalize an optional raw value; missing values stay missing.
#[must_use]
pub fn normalize_opt(raw: Option<&SnmpValue>) -> Option<SnmpValue> {
    raw.map(normalize)
}

fn normalize_text(text: &str) -> SnmpValue {
    match text.split_once('=') {
        Some((_oid, value_part)) => parse_value_part(value_part),
        None => SnmpValue::text(text.trim()),
    }
}

fn parse_value_part(value_part: &str) -> SnmpValue {
    let value = TypeTag::ALL
        .iter()
        .fold(value_part.trim(), |acc, tag| tag.strip(acc));
    let value = strip_quotes(value);

    parse_number(value).unwrap_or_else(|| SnmpValue::text(value))
}

/// Remove one leading and one trailing quote character, if present.
fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix(['"', '\''])
        .unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

fn parse_number(value: &str) -> Option<SnmpValue> {
    let candidate = value.trim();
    if candidate.contains('.') {
        return candidate.parse::<f64>().ok().map(SnmpValue::Float);
    }
    match candidate.parse::<i64>() {
        Ok(n) => Some(SnmpValue::Integer(n)),
        // counters past i64 range are still numbers
        Err(_) if is_integer_literal(candidate) => {
            candidate.parse::<f64>().ok().map(SnmpValue::Float)
        }
        Err(_) => None,
    }
}

fn is_integer_literal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

static NUMERIC_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?[0-9]*\.?[0-9]+").expect("static regex"));

/// Extract a number from a metric value.
///
/// Numeric values are widened to `f64`. Text is searched for the first signed
/// integer or decimal literal (`"228 V"` yields `228.0`). Returns `None` when
/// the value is missing or holds no number.
#[must_use]
pub fn extract_numeric(value: Option<&SnmpValue>) -> Option<f64> {
    match value? {
        SnmpValue::Integer(v) => Some(*v as f64),
        SnmpValue::Float(v) => Some(*v),
        SnmpValue::Text(text) => NUMERIC_LITERAL
            .find(text)
            .and_then(|m| m.as_str().parse::<f64>().ok()),
    }
}
