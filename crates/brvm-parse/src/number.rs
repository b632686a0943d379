//! Numeric normalization for French-locale figures.
//!
//! The exchange formats numbers as `12 345,67` (space-grouped thousands,
//! comma decimal point) and percentages as `0,42%`. Anything that does not
//! reduce to a finite number becomes `None`.

/// Requested numeric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// Decimal value.
    Float,
    /// Whole value.
    Int,
}

/// A normalized number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Decimal value.
    Float(f64),
    /// Whole value.
    Int(i64),
}

impl Number {
    /// Returns the value as `f64`.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Float(v) => v,
            Self::Int(v) => v as f64,
        }
    }
}

/// Parses locale-formatted text into a number of the requested kind.
///
/// Returns `None` for empty, whitespace-only or malformed input; never panics.
///
/// # Example
///
/// ```
/// use brvm_parse::{Number, NumberKind, parse_number};
///
/// assert_eq!(parse_number("12 345,67", NumberKind::Float), Some(Number::Float(12345.67)));
/// assert_eq!(parse_number("1 200", NumberKind::Int), Some(Number::Int(1200)));
/// assert_eq!(parse_number("abc", NumberKind::Float), None);
/// ```
#[must_use]
pub fn parse_number(text: &str, kind: NumberKind) -> Option<Number> {
    match kind {
        NumberKind::Float => parse_float(text).map(Number::Float),
        NumberKind::Int => parse_int(text).map(Number::Int),
    }
}

/// Parses a decimal figure such as `12 345,67` or `5,2%`.
///
/// Whitespace of any kind (including non-breaking spaces) is removed, the
/// comma becomes the decimal point and one trailing `%` is dropped. Signs are
/// kept, with U+2212 MINUS SIGN read as `-`.
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    let mut cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            ',' => '.',
            '\u{2212}' => '-',
            other => other,
        })
        .collect();

    if cleaned.ends_with('%') {
        cleaned.pop();
    }
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a whole figure such as `1 234` or `1,234`.
///
/// Whitespace and commas are treated as thousands separators.
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| if c == '\u{2212}' { '-' } else { c })
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<i64>().ok()
}
