//! statistical_tests::outcome: the common face of every test result.
//!
//! Each test returns its own outcome struct with typed accessors. The
//! [`TestOutcome`] trait adds the uniform view a caller needs to render any
//! result generically: the headline statistic, its degrees of freedom, the
//! p-value, and the full list of named fields, tables included.

use crate::data::{ContingencyTable, ExpectedTable};
use crate::statistical_tests::options::Significance;

/// One named field of a test outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    /// Labelled observed counts.
    Counts(ContingencyTable),
    /// Labelled expected counts, same labels as the observed table.
    Expected(ExpectedTable),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Counts(t) => write!(f, "{}", t.counts()),
            FieldValue::Expected(t) => write!(f, "{}", t.values()),
        }
    }
}

/// Uniform read-only view over a hypothesis-test outcome.
///
/// Required:
/// - `NAME`: short machine name of the test (`"binomial"`, `"f_test"`, ...).
/// - `statistic()`: headline test statistic, `None` for tests without one
///   (the exact binomial test).
/// - `dof()`: degrees of freedom of the reference distribution, when the
///   test has a single one.
/// - `pvalue()`: p-value in `[0, 1]`.
/// - `fields()`: every field of the result record as `(name, value)`
///   pairs, in a stable order. Tables travel as [`FieldValue::Counts`] and
///   [`FieldValue::Expected`] so nothing is reachable only through the
///   concrete type's accessors.
///
/// Provided:
/// - `is_significant(level)`: `level.rejects(self.pvalue())`.
pub trait TestOutcome {
    const NAME: &'static str;

    fn statistic(&self) -> Option<f64>;
    fn dof(&self) -> Option<f64>;
    fn pvalue(&self) -> f64;
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;

    fn is_significant(&self, level: Significance) -> bool {
        level.rejects(self.pvalue())
    }
}
