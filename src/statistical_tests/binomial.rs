//! statistical_tests::binomial: exact binomial test of a success rate.
//!
//! Purpose
//! -------
//! Test whether an observed success count `k` out of `n` trials is
//! consistent with a baseline success probability `p0`, using exact
//! Binomial(n, p0) probabilities rather than a normal approximation.
//!
//! Key behaviors
//! -------------
//! - `Less`: p = P(X ≤ k).
//! - `Greater`: p = P(X ≥ k).
//! - `TwoSided`: p = ∑ P(X = i) over every outcome i that is no more likely
//!   than the observed one, P(X = i) ≤ P(X = k)·(1 + 1e−7). The relative
//!   tolerance makes outcomes whose probability ties with the observed one
//!   (up to rounding in the pmf) count as "at least as extreme".
//!   The sum is never formed term by term: a binary search on the far side
//!   of the mode locates the tie boundary and both tails come from the cdf,
//!   so the cost is O(log n) and large `n` keeps full precision.
//!
//! Invariants & assumptions
//! ------------------------
//! - `rate == k / n` exactly and `pvalue ∈ [0, 1]`.
//! - The two-sided p-value is symmetric under (k, n, p0) → (n − k, n, 1 − p0).
//!
//! Conventions
//! -----------
//! - Counts are `i64` so that out-of-domain caller input (negative counts)
//!   is representable and rejected by validation instead of by the type.

use crate::diagnostics;
use crate::statistical_tests::{
    errors::{StatsError, StatsResult},
    options::Alternative,
    outcome::{FieldValue, TestOutcome},
    validation::validate_binomial_args,
};
use statrs::distribution::{Binomial, Discrete, DiscreteCDF};

/// Relative tolerance used to decide that two outcome probabilities tie.
const TIE_TOLERANCE: f64 = 1e-7;

/// BinomialOutcome: result of an exact binomial test.
///
/// Fields
/// ------
/// - `k`, `n`, `p0`: the validated inputs.
/// - `rate`: observed success rate `k / n`.
/// - `pvalue`: exact p-value for the chosen `alternative`.
/// - `alternative`: direction of the alternative hypothesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialOutcome {
    k: i64,
    n: i64,
    p0: f64,
    rate: f64,
    pvalue: f64,
    alternative: Alternative,
}

impl BinomialOutcome {
    /// Run the exact binomial test.
    ///
    /// Parameters
    /// ----------
    /// - `k`: `i64`
    ///   Observed successes, `0 ≤ k ≤ n`.
    /// - `n`: `i64`
    ///   Trials, `n > 0`.
    /// - `p0`: `f64`
    ///   Baseline success probability, `0 ≤ p0 ≤ 1`.
    /// - `alternative`: [`Alternative`]
    ///   Direction of the alternative hypothesis.
    ///
    /// Returns
    /// -------
    /// `StatsResult<BinomialOutcome>`
    ///   The observed rate and exact p-value, or the first violated
    ///   precondition.
    ///
    /// Errors
    /// ------
    /// - `StatsError::NonPositiveTrials`, `StatsError::SuccessesOutOfRange`,
    ///   `StatsError::InvalidProbability` from [`validate_binomial_args`].
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use eda_stats::statistical_tests::{Alternative, BinomialOutcome};
    ///
    /// let outcome = BinomialOutcome::binomial_test(60, 100, 0.5, Alternative::TwoSided).unwrap();
    /// assert_eq!(outcome.rate(), 0.6);
    /// assert!((0.0..=1.0).contains(&outcome.pvalue()));
    /// ```
    pub fn binomial_test(
        k: i64, n: i64, p0: f64, alternative: Alternative,
    ) -> StatsResult<BinomialOutcome> {
        let outcome = run(k, n, p0, alternative)
            .inspect_err(|err| diagnostics::record_rejection(Self::NAME, err))?;
        diagnostics::record_outcome(Self::NAME, n as usize, None, outcome.pvalue);
        Ok(outcome)
    }

    pub fn k(&self) -> i64 {
        self.k
    }

    pub fn n(&self) -> i64 {
        self.n
    }

    pub fn p0(&self) -> f64 {
        self.p0
    }

    /// Observed success rate `k / n`.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    pub fn alternative(&self) -> Alternative {
        self.alternative
    }
}

impl TestOutcome for BinomialOutcome {
    const NAME: &'static str = "binomial";

    fn statistic(&self) -> Option<f64> {
        None
    }

    fn dof(&self) -> Option<f64> {
        None
    }

    fn pvalue(&self) -> f64 {
        self.pvalue
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("k", FieldValue::Int(self.k)),
            ("n", FieldValue::Int(self.n)),
            ("p0", FieldValue::Float(self.p0)),
            ("rate", FieldValue::Float(self.rate)),
            ("pvalue", FieldValue::Float(self.pvalue)),
            ("alternative", FieldValue::Text(self.alternative.to_string())),
        ]
    }
}

fn run(k: i64, n: i64, p0: f64, alternative: Alternative) -> StatsResult<BinomialOutcome> {
    validate_binomial_args(k, n, p0)?;
    // Validation guarantees 0 ≤ k ≤ n and n > 0.
    let (k_u, n_u) = (k as u64, n as u64);
    let dist = Binomial::new(p0, n_u)
        .map_err(|e| StatsError::Distribution { reason: e.to_string() })?;

    let pvalue = match alternative {
        Alternative::Less => dist.cdf(k_u),
        Alternative::Greater => upper_tail(&dist, k_u),
        Alternative::TwoSided => two_sided(&dist, k_u, n_u, p0),
    };

    Ok(BinomialOutcome {
        k,
        n,
        p0,
        rate: k as f64 / n as f64,
        pvalue: pvalue.clamp(0.0, 1.0),
        alternative,
    })
}

/// P(X ≥ k) = P(X > k − 1); equals 1 for k = 0.
#[inline]
fn upper_tail(dist: &Binomial, k: u64) -> f64 {
    if k == 0 { 1.0 } else { dist.sf(k - 1) }
}

/// Sum of the probabilities of all outcomes no more likely than `k`.
///
/// The pmf is unimodal around n·p0, so only the side opposite `k` needs a
/// search: a binary search there finds the boundary outcome, and both tails
/// come from the cdf/sf. O(log n) pmf evaluations.
fn two_sided(dist: &Binomial, k: u64, n: u64, p0: f64) -> f64 {
    let center = n as f64 * p0;
    let k_f = k as f64;
    if k_f == center {
        return 1.0;
    }
    let threshold = dist.pmf(k) * (1.0 + TIE_TOLERANCE);
    let qualifies = |i: u64| dist.pmf(i) <= threshold;

    if k_f < center {
        // pmf is non-increasing on [⌈n·p0⌉, n]; find the first qualifying outcome.
        let (mut lo, mut hi) = ((center.ceil() as u64).min(n), n + 1);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if qualifies(mid) { hi = mid } else { lo = mid + 1 }
        }
        let upper = if lo <= n { upper_tail(dist, lo) } else { 0.0 };
        dist.cdf(k) + upper
    } else {
        // pmf is non-decreasing on [0, ⌊n·p0⌋]; find the last qualifying outcome.
        let top = (center.floor() as u64).min(n);
        let (mut lo, mut hi) = (0_u64, top + 1);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if qualifies(mid) { lo = mid + 1 } else { hi = mid }
        }
        let lower = if lo > 0 { dist.cdf(lo - 1) } else { 0.0 };
        lower + upper_tail(dist, k)
    }
}
