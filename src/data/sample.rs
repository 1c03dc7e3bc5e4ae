//! data::sample: numeric samples built from raw columns.
//!
//! Purpose
//! -------
//! Provide the strongly-typed numeric inputs of the hypothesis tests:
//! [`Sample`] for one variable of one group and [`PairedSample`] for two
//! row-aligned variables. Both are built through an explicit coercion step
//! so the statistical core never inspects runtime types.
//!
//! Key behaviors
//! -------------
//! - `Sample::from_raw` applies [`RawValue::as_numeric`] to every cell and
//!   drops the missing ones independently.
//! - `PairedSample::from_raw` coerces both columns and drops a row from
//!   both variables whenever either side is missing.
//! - Descriptive helpers (`mean`, `variance`) use `ndarray`'s summary
//!   statistics on the cleaned values.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every stored value is finite.
//! - The two arrays of a `PairedSample` always have the same length.
//! - Minimum sizes are NOT enforced here; each test checks its own minimum
//!   and reports `StatsError::InsufficientData`.

use crate::data::value::RawValue;
use crate::statistical_tests::errors::{StatsError, StatsResult};
use ndarray::{Array1, ArrayView1};

/// Sample: finite observations of one variable for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Array1<f64>,
}

impl Sample {
    /// Build a sample from raw cells, dropping everything that does not
    /// coerce to a finite number.
    pub fn from_raw(raw: &[RawValue]) -> Sample {
        Sample { values: raw.iter().filter_map(RawValue::as_numeric).collect() }
    }

    /// Build a sample from floats, dropping NaN and ±∞.
    pub fn from_f64s(values: &[f64]) -> Sample {
        Sample { values: values.iter().copied().filter(|v| v.is_finite()).collect() }
    }

    /// Number of usable observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cleaned observations in input order.
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    /// Arithmetic mean, or `None` for an empty sample.
    pub fn mean(&self) -> Option<f64> {
        self.values.mean()
    }

    /// Unbiased variance (divisor n − 1), or `None` when `len() < 2`.
    pub fn variance(&self) -> Option<f64> {
        (self.values.len() >= 2).then(|| self.values.var(1.0))
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Sample::from_f64s(&values)
    }
}

impl From<&[f64]> for Sample {
    fn from(values: &[f64]) -> Self {
        Sample::from_f64s(values)
    }
}

/// PairedSample: two row-aligned variables with pairwise missing-row removal.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSample {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl PairedSample {
    /// Coerce two raw columns and keep only rows where both sides are
    /// finite numbers.
    ///
    /// Errors
    /// ------
    /// - `StatsError::LengthMismatch` when the raw columns are not
    ///   row-aligned (different lengths).
    pub fn from_raw(x: &[RawValue], y: &[RawValue]) -> StatsResult<PairedSample> {
        if x.len() != y.len() {
            return Err(StatsError::LengthMismatch { expected: x.len(), actual: y.len() });
        }
        let (xs, ys): (Vec<f64>, Vec<f64>) = x
            .iter()
            .zip(y)
            .filter_map(|(a, b)| Some((a.as_numeric()?, b.as_numeric()?)))
            .unzip();
        Ok(PairedSample { x: Array1::from(xs), y: Array1::from(ys) })
    }

    /// Same as [`PairedSample::from_raw`] for float columns; NaN and ±∞
    /// count as missing.
    pub fn from_f64s(x: &[f64], y: &[f64]) -> StatsResult<PairedSample> {
        if x.len() != y.len() {
            return Err(StatsError::LengthMismatch { expected: x.len(), actual: y.len() });
        }
        let (xs, ys): (Vec<f64>, Vec<f64>) = x
            .iter()
            .zip(y)
            .filter(|(a, b)| a.is_finite() && b.is_finite())
            .map(|(a, b)| (*a, *b))
            .unzip();
        Ok(PairedSample { x: Array1::from(xs), y: Array1::from(ys) })
    }

    /// Number of complete pairs.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sample_from_raw_drops_non_numeric_cells() {
        // Arrange
        let raw = vec![
            RawValue::from(1.0),
            RawValue::from("2"),
            RawValue::from("n/a"),
            RawValue::Missing,
            RawValue::from(f64::NAN),
            RawValue::from(3_i64),
        ];

        // Act
        let sample = Sample::from_raw(&raw);

        // Assert
        assert_eq!(sample.values().to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn sample_variance_is_unbiased() {
        let sample = Sample::from(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert_relative_eq!(sample.mean().unwrap(), 5.0);
        assert_relative_eq!(sample.variance().unwrap(), 32.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn sample_variance_needs_two_values() {
        assert_eq!(Sample::from(vec![1.0]).variance(), None);
        assert_eq!(Sample::from(Vec::<f64>::new()).mean(), None);
    }

    #[test]
    // Purpose
    // -------
    // Rows missing in either variable must be dropped from both, so the
    // remaining pairs stay aligned.
    //
    // Given
    // -----
    // - x = [1, "a", 3, 4], y = [10, 20, missing, 40].
    //
    // Expect
    // ------
    // - Only rows 0 and 3 survive: x = [1, 4], y = [10, 40].
    fn paired_sample_drops_rows_jointly() {
        // Arrange
        let x = vec![RawValue::from(1.0), RawValue::from("a"), RawValue::from(3.0), RawValue::from(4.0)];
        let y = vec![RawValue::from(10.0), RawValue::from(20.0), RawValue::Missing, RawValue::from(40.0)];

        // Act
        let pairs = PairedSample::from_raw(&x, &y).expect("columns are aligned");

        // Assert
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.x().to_vec(), vec![1.0, 4.0]);
        assert_eq!(pairs.y().to_vec(), vec![10.0, 40.0]);
    }

    #[test]
    fn paired_sample_rejects_ragged_columns() {
        let result = PairedSample::from_f64s(&[1.0, 2.0, 3.0], &[1.0, 2.0]);

        match result {
            Err(StatsError::LengthMismatch { expected: 3, actual: 2 }) => (),
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }
}
