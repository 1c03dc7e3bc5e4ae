//! statistical_tests::chi_square: Pearson χ² test of independence.
//!
//! Purpose
//! -------
//! Test whether two categorical variables are independent from their
//! cross-tabulated counts.
//!
//! Key behaviors
//! -------------
//! - Cross-tabulate two frame columns (missing cells count as
//!   [`UNKNOWN_CATEGORY`](crate::data::UNKNOWN_CATEGORY)) or accept an
//!   explicit [`ContingencyTable`].
//! - Expected counts Eᵢⱼ = Rᵢ·Cⱼ / N; statistic χ² = Σ (Oᵢⱼ − Eᵢⱼ)² / Eᵢⱼ
//!   with no continuity correction, on (r − 1)(c − 1) degrees of freedom.
//! - The outcome keeps both the observed and the expected tables so callers
//!   can render them alongside the statistic.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both axes hold at least two categories; smaller tables are rejected
//!   with `StatsError::TableTooSmall` before any arithmetic.
//! - Every expected count is strictly positive; a zero margin is reported
//!   as `StatsError::ZeroExpectedCount` naming the first offending cell.

use crate::data::{ContingencyTable, ExpectedTable, Frame};
use crate::diagnostics;
use crate::statistical_tests::{
    errors::{StatsError, StatsResult},
    outcome::{FieldValue, TestOutcome},
    validation::require_table_shape,
};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// ChiSquareOutcome: χ² statistic with its observed and expected tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareOutcome {
    table: ContingencyTable,
    expected: ExpectedTable,
    chi2: f64,
    pvalue: f64,
    dof: usize,
}

impl ChiSquareOutcome {
    /// Cross-tabulate `row_col` against `col_col` and test independence.
    ///
    /// Errors
    /// ------
    /// - `StatsError::UnknownColumn` when either column is absent.
    /// - Everything [`ChiSquareOutcome::chi_square`] reports.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use eda_stats::data::{Frame, RawValue};
    /// use eda_stats::statistical_tests::ChiSquareOutcome;
    ///
    /// let col = |cells: &[&str]| cells.iter().map(|&c| RawValue::from(c)).collect::<Vec<_>>();
    /// let frame = Frame::new()
    ///     .with_column("sex", col(&["f", "m", "f", "m"]))
    ///     .and_then(|f| f.with_column("smoker", col(&["y", "y", "n", "n"])))
    ///     .unwrap();
    ///
    /// let outcome = ChiSquareOutcome::chi_square_independence(&frame, "sex", "smoker").unwrap();
    /// assert_eq!(outcome.dof(), 1);
    /// assert_eq!(outcome.chi2(), 0.0);
    /// ```
    pub fn chi_square_independence(
        frame: &Frame, row_col: &str, col_col: &str,
    ) -> StatsResult<ChiSquareOutcome> {
        let table = frame
            .crosstab(row_col, col_col)
            .inspect_err(|err| diagnostics::record_rejection(Self::NAME, err))?;
        Self::chi_square(&table)
    }

    /// Test independence on an already tabulated set of counts.
    ///
    /// Errors
    /// ------
    /// - `StatsError::TableTooSmall` when an axis has fewer than 2
    ///   categories.
    /// - `StatsError::ZeroExpectedCount` when a row or column total is 0.
    pub fn chi_square(table: &ContingencyTable) -> StatsResult<ChiSquareOutcome> {
        let outcome =
            run(table).inspect_err(|err| diagnostics::record_rejection(Self::NAME, err))?;
        diagnostics::record_outcome(
            Self::NAME,
            table.total() as usize,
            Some(outcome.chi2),
            outcome.pvalue,
        );
        Ok(outcome)
    }

    /// Observed counts.
    pub fn table(&self) -> &ContingencyTable {
        &self.table
    }

    /// Counts expected under independence.
    pub fn expected(&self) -> &ExpectedTable {
        &self.expected
    }

    pub fn chi2(&self) -> f64 {
        self.chi2
    }

    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    pub fn dof(&self) -> usize {
        self.dof
    }
}

impl TestOutcome for ChiSquareOutcome {
    const NAME: &'static str = "chi_square";

    fn statistic(&self) -> Option<f64> {
        Some(self.chi2)
    }

    fn dof(&self) -> Option<f64> {
        Some(self.dof as f64)
    }

    fn pvalue(&self) -> f64 {
        self.pvalue
    }

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("table", FieldValue::Counts(self.table.clone())),
            ("expected", FieldValue::Expected(self.expected.clone())),
            ("chi2", FieldValue::Float(self.chi2)),
            ("pvalue", FieldValue::Float(self.pvalue)),
            ("dof", FieldValue::Int(self.dof as i64)),
        ]
    }
}

fn run(table: &ContingencyTable) -> StatsResult<ChiSquareOutcome> {
    let (rows, cols) = table.shape();
    require_table_shape(rows, cols)?;

    let expected = table.expected();
    if let Some(((i, j), _)) = expected.values().indexed_iter().find(|(_, e)| **e <= 0.0) {
        return Err(StatsError::ZeroExpectedCount {
            row: table.row_labels()[i].clone(),
            col: table.col_labels()[j].clone(),
        });
    }

    let chi2: f64 = table
        .counts()
        .iter()
        .zip(expected.values().iter())
        .map(|(&o, &e)| {
            let diff = o as f64 - e;
            diff * diff / e
        })
        .sum();
    let dof = (rows - 1) * (cols - 1);

    let dist = ChiSquared::new(dof as f64)
        .map_err(|e| StatsError::Distribution { reason: e.to_string() })?;
    let pvalue = dist.sf(chi2).clamp(0.0, 1.0);

    Ok(ChiSquareOutcome { table: table.clone(), expected, chi2, pvalue, dof })
}
