//! statistical_tests::f_test: F-test for equality of two variances.
//!
//! Purpose
//! -------
//! Test whether two independent, normally distributed populations share
//! the same variance, from one sample of each.
//!
//! Key behaviors
//! -------------
//! - Compute both unbiased sample variances s₁², s₂².
//! - Put the larger variance in the numerator so that F ≥ 1, and take the
//!   degrees of freedom (dfn, dfd) from the numerator and denominator
//!   samples respectively, not from the positional order.
//! - Report the two-sided p-value 2·min(P(F' ≥ F), P(F' ≤ F)) under
//!   F(dfn, dfd), clamped to [0, 1].
//!
//! Invariants & assumptions
//! ------------------------
//! - Each sample holds at least 2 finite observations.
//! - Neither variance is exactly zero; a zero variance makes the ratio
//!   meaningless and is reported as `StatsError::ZeroVariance`.
//! - Both variances and F are finite. Values whose squared deviations
//!   overflow are reported as `StatsError::NonFinite` instead of yielding
//!   F = ∞ with p = 0.
//! - `n1`, `var1` always describe the first positional input, even when
//!   the second sample supplies the numerator of F.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the reference scenario (variances 1 and 4, n = 10
//!   each), swap invariance, F ≥ 1, and every degenerate-input error.

use crate::data::Sample;
use crate::diagnostics;
use crate::statistical_tests::{
    errors::{StatsError, StatsResult},
    outcome::{FieldValue, TestOutcome},
    validation::require_min_len,
};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// FTestOutcome: result of the two-sample variance-ratio test.
///
/// Fields
/// ------
/// - `n1`, `n2`: observations in the first and second sample.
/// - `var1`, `var2`: unbiased variances of the first and second sample.
/// - `f`: larger variance over smaller variance (F ≥ 1).
/// - `dfn`, `dfd`: numerator and denominator degrees of freedom.
/// - `pvalue`: two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FTestOutcome {
    n1: usize,
    n2: usize,
    var1: f64,
    var2: f64,
    f: f64,
    dfn: usize,
    dfd: usize,
    pvalue: f64,
}

impl FTestOutcome {
    /// Run the F-test on two samples.
    ///
    /// Errors
    /// ------
    /// - `StatsError::InsufficientData` when either sample has fewer than 2
    ///   observations (`group` is `"x"` or `"y"`).
    /// - `StatsError::ZeroVariance` when either sample is constant.
    /// - `StatsError::NonFinite` when a variance or the ratio overflows.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use eda_stats::data::Sample;
    /// use eda_stats::statistical_tests::FTestOutcome;
    ///
    /// let x = Sample::from(vec![1.0, 2.0, 3.0, 4.0]);
    /// let y = Sample::from(vec![2.0, 4.0, 6.0, 8.0]);
    /// let outcome = FTestOutcome::f_test(&x, &y).unwrap();
    /// assert!((outcome.f() - 4.0).abs() < 1e-12);
    /// assert_eq!((outcome.dfn(), outcome.dfd()), (3, 3));
    /// ```
    pub fn f_test(x: &Sample, y: &Sample) -> StatsResult<FTestOutcome> {
        let outcome =
            run(x, y).inspect_err(|err| diagnostics::record_rejection(Self::NAME, err))?;
        diagnostics::record_outcome(Self::NAME, x.len() + y.len(), Some(outcome.f), outcome.pvalue);
        Ok(outcome)
    }

    pub fn n1(&self) -> usize {
        self.n1
    }

    pub fn n2(&self) -> usize {
        self.n2
    }

    pub fn var1(&self) -> f64 {
        self.var1
    }

    pub fn var2(&self) -> f64 {
        self.var2
    }

    /// Variance ratio, larger over smaller.
    pub fn f(&self) -> f64 {
        self.f
    }

    pub fn dfn(&self) -> usize {
        self.dfn
    }

    pub fn dfd(&self) -> usize {
        self.dfd
    }

    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }
}

impl TestOutcome for FTestOutcome {
    const NAME: &'static str = "f_test";

    fn statistic(&self) -> Option<f64> {
        Some(self.f)
    }

    /// Numerator degrees of freedom; the denominator one is [`FTestOutcome::dfd`].
    fn dof(&self) -> Option<f64> {
        Some(self.dfn as f64)
    }

    fn pvalue(&self) -> f64 {
        self.pvalue
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("n1", FieldValue::Int(self.n1 as i64)),
            ("n2", FieldValue::Int(self.n2 as i64)),
            ("var1", FieldValue::Float(self.var1)),
            ("var2", FieldValue::Float(self.var2)),
            ("F", FieldValue::Float(self.f)),
            ("dfn", FieldValue::Int(self.dfn as i64)),
            ("dfd", FieldValue::Int(self.dfd as i64)),
            ("pvalue", FieldValue::Float(self.pvalue)),
        ]
    }
}

fn run(x: &Sample, y: &Sample) -> StatsResult<FTestOutcome> {
    require_min_len("x", x.len(), 2)?;
    require_min_len("y", y.len(), 2)?;

    let var1 = nonzero_variance(x, "x")?;
    let var2 = nonzero_variance(y, "y")?;
    let (n1, n2) = (x.len(), y.len());

    let (f, dfn, dfd) =
        if var1 >= var2 { (var1 / var2, n1 - 1, n2 - 1) } else { (var2 / var1, n2 - 1, n1 - 1) };
    if !f.is_finite() {
        return Err(StatsError::NonFinite { quantity: "F" });
    }

    let dist = FisherSnedecor::new(dfn as f64, dfd as f64)
        .map_err(|e| StatsError::Distribution { reason: e.to_string() })?;
    let pvalue = (2.0 * dist.sf(f).min(dist.cdf(f))).clamp(0.0, 1.0);

    Ok(FTestOutcome { n1, n2, var1, var2, f, dfn, dfd, pvalue })
}

#[inline]
fn nonzero_variance(sample: &Sample, group: &'static str) -> StatsResult<f64> {
    match sample.variance() {
        Some(v) if !v.is_finite() => {
            Err(StatsError::NonFinite { quantity: if group == "x" { "var(x)" } else { "var(y)" } })
        }
        Some(v) if v > 0.0 => Ok(v),
        Some(_) => Err(StatsError::ZeroVariance { group }),
        None => Err(StatsError::InsufficientData { group, needed: 2, found: sample.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // Ten points with mean 0 and unbiased variance exactly `target`.
    fn sample_with_variance(target: f64) -> Sample {
        let base = [-4.5_f64, -3.5, -2.5, -1.5, -0.5, 0.5, 1.5, 2.5, 3.5, 4.5];
        let base_var = 82.5 / 9.0;
        let scale = (target / base_var).sqrt();
        Sample::from(base.iter().map(|v| v * scale).collect::<Vec<f64>>())
    }

    #[test]
    // Purpose
    // -------
    // Check the reference scenario: variances 1 and 4 with ten
    // observations each.
    //
    // Given
    // -----
    // - x with variance 1, y with variance 4, n = 10 each.
    //
    // Expect
    // ------
    // - F = 4, dfn = dfd = 9.
    // - var1/var2 keep the positional order (1 and 4).
    // - p = 2·P(F(9, 9) ≥ 4) ≈ 0.0510.
    fn f_test_variance_one_versus_four() {
        // Arrange
        let x = sample_with_variance(1.0);
        let y = sample_with_variance(4.0);

        // Act
        let outcome = FTestOutcome::f_test(&x, &y).expect("valid samples");

        // Assert
        assert_relative_eq!(outcome.f(), 4.0, epsilon = 1e-10);
        assert_eq!((outcome.dfn(), outcome.dfd()), (9, 9));
        assert_relative_eq!(outcome.var1(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(outcome.var2(), 4.0, epsilon = 1e-10);
        assert_relative_eq!(outcome.pvalue(), 0.051_003_260_7, epsilon = 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // The degrees of freedom follow the numerator sample, not the
    // positional order.
    //
    // Given
    // -----
    // - x: 3 observations with small spread; y: 5 observations with large
    //   spread.
    //
    // Expect
    // ------
    // - y supplies the numerator: dfn = 4, dfd = 2.
    fn f_test_degrees_of_freedom_follow_numerator() {
        let x = Sample::from(vec![1.0, 1.1, 0.9]);
        let y = Sample::from(vec![-10.0, 0.0, 10.0, 20.0, -20.0]);

        let outcome = FTestOutcome::f_test(&x, &y).unwrap();

        assert_eq!((outcome.n1(), outcome.n2()), (3, 5));
        assert_eq!((outcome.dfn(), outcome.dfd()), (4, 2));
        assert!(outcome.f() >= 1.0);
    }

    #[test]
    fn f_test_zero_variance_is_degenerate() {
        let x = Sample::from(vec![2.0, 2.0, 2.0]);
        let y = Sample::from(vec![1.0, 2.0, 3.0]);

        match FTestOutcome::f_test(&x, &y) {
            Err(StatsError::ZeroVariance { group }) => assert_eq!(group, "x"),
            other => panic!("expected ZeroVariance, got {other:?}"),
        }
    }

    #[test]
    fn f_test_single_observation_is_insufficient() {
        let x = Sample::from(vec![1.0, 2.0]);
        let y = Sample::from(vec![5.0]);

        match FTestOutcome::f_test(&x, &y) {
            Err(StatsError::InsufficientData { group, needed, found }) => {
                assert_eq!((group, needed, found), ("y", 2, 1));
            }
            other => panic!("expected InsufficientData, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Finite inputs whose squared deviations overflow must be rejected
    // rather than reported as an infinitely significant ratio.
    //
    // Given
    // -----
    // - x = [1e200, −1e200, 3e200] (variance overflows), y = [1, 2, 4].
    //
    // Expect
    // ------
    // - `NonFinite` naming var(x), classified as degenerate input.
    fn f_test_overflowing_variance_is_rejected() {
        // Arrange
        let x = Sample::from(vec![1e200, -1e200, 3e200]);
        let y = Sample::from(vec![1.0, 2.0, 4.0]);

        // Act
        let result = FTestOutcome::f_test(&x, &y);

        // Assert
        match result {
            Err(err @ StatsError::NonFinite { quantity: "var(x)" }) => {
                assert_eq!(err.kind(), crate::statistical_tests::ErrorKind::DegenerateInput);
            }
            other => panic!("expected NonFinite for var(x), got {other:?}"),
        }
        assert!(matches!(
            FTestOutcome::f_test(&y, &x),
            Err(StatsError::NonFinite { quantity: "var(y)" })
        ));
    }

    #[test]
    fn f_test_overflowing_ratio_is_rejected() {
        let x = Sample::from(vec![1e150, -1e150, 0.0]);
        let y = Sample::from(vec![1e-155, -1e-155, 0.0]);

        assert!(matches!(
            FTestOutcome::f_test(&x, &y),
            Err(StatsError::NonFinite { quantity: "F" })
        ));
    }

    proptest! {
        #[test]
        fn f_test_is_at_least_one_and_swap_invariant(
            x in prop::collection::vec(-100.0_f64..100.0, 2..30),
            y in prop::collection::vec(-100.0_f64..100.0, 2..30)
        ) {
            let (sx, sy) = (Sample::from(x), Sample::from(y));
            let (Ok(forward), Ok(backward)) = (FTestOutcome::f_test(&sx, &sy), FTestOutcome::f_test(&sy, &sx)) else {
                return Ok(());
            };

            prop_assert!(forward.f() >= 1.0);
            prop_assert!((0.0..=1.0).contains(&forward.pvalue()));
            prop_assert!((forward.pvalue() - backward.pvalue()).abs() < 1e-12);
            prop_assert_eq!(forward.var1(), backward.var2());
            prop_assert_eq!(forward.n1(), backward.n2());
        }
    }
}
