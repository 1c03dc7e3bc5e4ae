//! statistical_tests: classical hypothesis tests for exploratory analysis.
//!
//! Purpose
//! -------
//! Collect the test routines offered to an exploratory-data-analysis front
//! end together with their shared infrastructure: error type, input
//! guards, option types, and a uniform view over results.
//!
//! Key behaviors
//! -------------
//! - Expose one outcome type per test, each built by an associated
//!   constructor:
//!   - [`BinomialOutcome::binomial_test`]: exact binomial test of a rate.
//!   - [`FTestOutcome::f_test`]: equality of two variances.
//!   - [`TTestOutcome::t_test`]: equality of two means (Welch or pooled).
//!   - [`CorrelationOutcome::correlation`]: Pearson or Spearman.
//!   - [`ChiSquareOutcome::chi_square_independence`] and
//!     [`ChiSquareOutcome::chi_square`]: independence of two categorical
//!     variables.
//! - Every outcome implements [`TestOutcome`], so callers can render any
//!   result as ordered `(name, value)` fields or ask
//!   [`TestOutcome::is_significant`] against a [`Significance`] level.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs arrive already coerced through [`crate::data`]: missing and
//!   non-numeric cells have been dropped from samples, and missing
//!   categories are labelled `"Unknown"` in contingency tables.
//! - Every routine validates before computing and reports failures via
//!   [`StatsResult`]; no routine returns a partial result or panics on user
//!   input.
//! - Reported p-values lie in [0, 1].
//!
//! Conventions
//! -----------
//! - Sample variances are unbiased (n − 1 denominator).
//! - Error messages name the offending group, column, or parameter, and
//!   [`StatsError::kind`] classifies them as invalid argument, insufficient
//!   data, or degenerate input.
//! - At the Python boundary every [`StatsError`] becomes a `ValueError`
//!   carrying the `Display` message.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use eda_stats::data::Sample;
//! use eda_stats::statistical_tests::prelude::*;
//!
//! let x = Sample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! let y = Sample::from(vec![6.0, 7.0, 8.0, 9.0, 10.0]);
//! let outcome = TTestOutcome::t_test(&x, &y, false)?;
//! assert!(outcome.is_significant(Significance::default()));
//! # Ok::<(), StatsError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Each test module checks its reference scenario against exact values,
//!   every error branch, and the algebraic properties of its statistic
//!   with `proptest`.

pub mod binomial;
pub mod chi_square;
pub mod correlation;
pub mod errors;
pub mod f_test;
pub mod options;
pub mod outcome;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::binomial::BinomialOutcome;
pub use self::chi_square::ChiSquareOutcome;
pub use self::correlation::CorrelationOutcome;
pub use self::errors::{ErrorKind, StatsError, StatsResult};
pub use self::f_test::FTestOutcome;
pub use self::options::{Alternative, CorrelationMethod, Significance};
pub use self::outcome::{FieldValue, TestOutcome};
pub use self::t_test::TTestOutcome;

// ---- Optional convenience prelude for downstream crates -------------------
//
//     use eda_stats::statistical_tests::prelude::*;

pub mod prelude {
    pub use super::errors::{StatsError, StatsResult};
    pub use super::options::{Alternative, CorrelationMethod, Significance};
    pub use super::outcome::TestOutcome;
    pub use super::{
        BinomialOutcome, ChiSquareOutcome, CorrelationOutcome, FTestOutcome, TTestOutcome,
    };
}
