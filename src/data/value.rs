//! data::value: loosely-typed cells and their coercion rules.
//!
//! Tabular data reaches the library as columns of heterogeneous cells
//! (numbers, free text, blanks). [`RawValue`] models one such cell and owns
//! the two coercions used at the boundary:
//!
//! - numeric coercion ([`RawValue::as_numeric`]) for samples, where anything
//!   that is not a finite number becomes missing, and
//! - categorical coercion ([`RawValue::as_category`]) for contingency tables,
//!   where missing cells are kept as the explicit [`UNKNOWN_CATEGORY`].

/// Label given to missing cells in categorical columns.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One cell of a raw column.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Missing,
}

impl RawValue {
    /// Coerce to a finite `f64`, or `None` when the cell counts as missing.
    ///
    /// Text is trimmed and parsed with `str::parse::<f64>`; NaN and ±∞ are
    /// treated as missing whether they arrive as numbers or as text.
    pub fn as_numeric(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(v) => *v,
            RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
            RawValue::Missing => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Coerce to a category label.
    ///
    /// Text is kept verbatim unless blank; numbers use their shortest
    /// `Display` form (`2.0` → `"2"`); blank text, NaN and `Missing` map to
    /// [`UNKNOWN_CATEGORY`].
    pub fn as_category(&self) -> String {
        match self {
            RawValue::Text(s) if !s.trim().is_empty() => s.clone(),
            RawValue::Number(v) if !v.is_nan() => v.to_string(),
            _ => UNKNOWN_CATEGORY.to_string(),
        }
    }

    /// `true` for cells that carry no value at all (missing, blank, NaN).
    pub fn is_missing(&self) -> bool {
        match self {
            RawValue::Missing => true,
            RawValue::Number(v) => v.is_nan(),
            RawValue::Text(s) => s.trim().is_empty(),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}
