//! statistical_tests::correlation: Pearson and Spearman correlation tests.
//!
//! Purpose
//! -------
//! Measure the association between two row-aligned numeric variables and
//! test the null hypothesis of zero correlation.
//!
//! Key behaviors
//! -------------
//! - Pearson: r = Sxy / √(Sxx·Syy) on centred values.
//! - Spearman: Pearson r computed on average ranks (tied values share the
//!   mean of the ranks they span).
//! - Two-sided p-value from t = r·√((n − 2)/(1 − r²)) on n − 2 degrees of
//!   freedom for both methods; |r| = 1 gives p = 0 exactly.
//!
//! Invariants & assumptions
//! ------------------------
//! - At least 3 complete pairs remain after pairwise missing-row removal
//!   (performed by [`PairedSample`]).
//! - r is clamped to [−1, 1] against rounding.
//! - r is scale-invariant: each variable is divided by its largest
//!   magnitude before centring, so values near the f64 range neither
//!   overflow the sums of squares nor collapse r to 0.
//! - A constant variable makes r undefined and is reported as
//!   `StatsError::ConstantInput`.

use crate::data::PairedSample;
use crate::diagnostics;
use crate::statistical_tests::{
    errors::{StatsError, StatsResult},
    options::CorrelationMethod,
    outcome::{FieldValue, TestOutcome},
    validation::require_min_len,
};
use ndarray::{Array1, ArrayView1};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// CorrelationOutcome: correlation coefficient and its significance.
///
/// Fields
/// ------
/// - `n`: complete pairs used.
/// - `r`: correlation coefficient in [−1, 1].
/// - `pvalue`: two-sided p-value for H₀: ρ = 0.
/// - `method`: the method actually applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationOutcome {
    n: usize,
    r: f64,
    pvalue: f64,
    method: CorrelationMethod,
}

impl CorrelationOutcome {
    /// Correlate the two variables of `pairs`.
    ///
    /// Errors
    /// ------
    /// - `StatsError::InsufficientData` (`group = "pairs"`) when fewer than
    ///   3 complete pairs are available.
    /// - `StatsError::ConstantInput` when either variable is constant.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use eda_stats::data::PairedSample;
    /// use eda_stats::statistical_tests::{CorrelationMethod, CorrelationOutcome};
    ///
    /// let pairs = PairedSample::from_f64s(&[1.0, 2.0, 3.0, 4.0], &[1.0, 3.0, 2.0, 5.0]).unwrap();
    /// let outcome = CorrelationOutcome::correlation(&pairs, CorrelationMethod::Spearman).unwrap();
    /// assert!((outcome.r() - 0.8).abs() < 1e-12);
    /// ```
    pub fn correlation(
        pairs: &PairedSample, method: CorrelationMethod,
    ) -> StatsResult<CorrelationOutcome> {
        let outcome = run(pairs, method)
            .inspect_err(|err| diagnostics::record_rejection(Self::NAME, err))?;
        diagnostics::record_outcome(Self::NAME, outcome.n, Some(outcome.r), outcome.pvalue);
        Ok(outcome)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    /// Method actually applied. An unrecognised name given to
    /// [`CorrelationMethod::from_name`] falls back to Pearson and is
    /// reported as `Pearson` here, not as the caller's string.
    pub fn method(&self) -> CorrelationMethod {
        self.method
    }
}

impl TestOutcome for CorrelationOutcome {
    const NAME: &'static str = "correlation";

    fn statistic(&self) -> Option<f64> {
        Some(self.r)
    }

    fn dof(&self) -> Option<f64> {
        Some(self.n as f64 - 2.0)
    }

    fn pvalue(&self) -> f64 {
        self.pvalue
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("n", FieldValue::Int(self.n as i64)),
            ("r", FieldValue::Float(self.r)),
            ("pvalue", FieldValue::Float(self.pvalue)),
            ("method", FieldValue::Text(self.method.to_string())),
        ]
    }
}

fn run(pairs: &PairedSample, method: CorrelationMethod) -> StatsResult<CorrelationOutcome> {
    let n = pairs.len();
    require_min_len("pairs", n, 3)?;

    let r = match method {
        CorrelationMethod::Pearson => pearson_r(pairs.x(), pairs.y())?,
        CorrelationMethod::Spearman => {
            pearson_r(average_ranks(pairs.x()).view(), average_ranks(pairs.y()).view())?
        }
    };
    let pvalue = zero_correlation_pvalue(r, n)?;

    Ok(CorrelationOutcome { n, r, pvalue, method })
}

/// Pearson product-moment coefficient, clamped to [−1, 1].
fn pearson_r(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> StatsResult<f64> {
    let dx = unit_deviations(x).ok_or(StatsError::ConstantInput { variable: "x" })?;
    let dy = unit_deviations(y).ok_or(StatsError::ConstantInput { variable: "y" })?;

    let sxx = dx.dot(&dx);
    let syy = dy.dot(&dy);
    if sxx == 0.0 {
        return Err(StatsError::ConstantInput { variable: "x" });
    }
    if syy == 0.0 {
        return Err(StatsError::ConstantInput { variable: "y" });
    }
    Ok((dx.dot(&dy) / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Deviations from the mean after dividing by max |v|, so every sum of
/// products stays within a few multiples of n whatever the magnitude of
/// the data. `None` when all values are zero.
fn unit_deviations(values: ArrayView1<'_, f64>) -> Option<Array1<f64>> {
    let scale = values.fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 {
        return None;
    }
    let scaled = values.mapv(|v| v / scale);
    let mean = scaled.sum() / scaled.len() as f64;
    Some(scaled.mapv(|v| v - mean))
}

/// Two-sided p-value of H₀: ρ = 0 via the t transform on n − 2 df.
fn zero_correlation_pvalue(r: f64, n: usize) -> StatsResult<f64> {
    if r.abs() == 1.0 {
        return Ok(0.0);
    }
    let df = (n - 2) as f64;
    let t = r * (df / (1.0 - r * r)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| StatsError::Distribution { reason: e.to_string() })?;
    Ok((2.0 * dist.sf(t.abs())).clamp(0.0, 1.0))
}

/// 1-based ranks; tied values receive the mean of the ranks they occupy.
fn average_ranks(values: ArrayView1<'_, f64>) -> Array1<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = Array1::<f64>::zeros(values.len());
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // positions start..end (0-based) hold ranks start+1..=end
        let rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        start = end;
    }
    ranks
}
