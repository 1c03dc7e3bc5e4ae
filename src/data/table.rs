//! data::table: labelled contingency tables.
//!
//! [`ContingencyTable`] holds observed counts of two categorical variables
//! cross-tabulated against each other; [`ExpectedTable`] holds the counts
//! expected under independence with the same labels and shape.
//!
//! Labels are sorted lexicographically when a table is built from raw
//! columns, and missing cells are counted under
//! [`UNKNOWN_CATEGORY`](crate::data::value::UNKNOWN_CATEGORY) rather than
//! dropped.

use crate::data::value::RawValue;
use crate::statistical_tests::errors::{StatsError, StatsResult};
use ndarray::{Array1, Array2, Axis};
use std::collections::BTreeMap;

/// Observed counts per (row category, column category) cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    counts: Array2<u64>,
}

impl ContingencyTable {
    /// Cross-tabulate two row-aligned categorical columns.
    ///
    /// Errors
    /// ------
    /// - `StatsError::LengthMismatch` when the columns differ in length.
    pub fn from_columns(rows: &[RawValue], cols: &[RawValue]) -> StatsResult<ContingencyTable> {
        if rows.len() != cols.len() {
            return Err(StatsError::LengthMismatch { expected: rows.len(), actual: cols.len() });
        }

        let row_keys: Vec<String> = rows.iter().map(RawValue::as_category).collect();
        let col_keys: Vec<String> = cols.iter().map(RawValue::as_category).collect();
        let row_index = label_index(&row_keys);
        let col_index = label_index(&col_keys);

        let mut counts = Array2::<u64>::zeros((row_index.len(), col_index.len()));
        for (r, c) in row_keys.iter().zip(&col_keys) {
            counts[[row_index[r], col_index[c]]] += 1;
        }

        Ok(ContingencyTable {
            row_labels: row_index.into_keys().collect(),
            col_labels: col_index.into_keys().collect(),
            counts,
        })
    }

    /// Wrap an explicit count matrix with its labels.
    ///
    /// Errors
    /// ------
    /// - `StatsError::LengthMismatch` when the number of labels on an axis
    ///   differs from the matrix extent on that axis.
    pub fn from_counts(
        row_labels: Vec<String>, col_labels: Vec<String>, counts: Array2<u64>,
    ) -> StatsResult<ContingencyTable> {
        let (n_rows, n_cols) = counts.dim();
        if row_labels.len() != n_rows {
            return Err(StatsError::LengthMismatch { expected: n_rows, actual: row_labels.len() });
        }
        if col_labels.len() != n_cols {
            return Err(StatsError::LengthMismatch { expected: n_cols, actual: col_labels.len() });
        }
        Ok(ContingencyTable { row_labels, col_labels, counts })
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.counts.dim()
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    pub fn counts(&self) -> &Array2<u64> {
        &self.counts
    }

    /// Count in the cell labelled `(row, col)`, if both labels exist.
    pub fn get(&self, row: &str, col: &str) -> Option<u64> {
        let r = self.row_labels.iter().position(|l| l == row)?;
        let c = self.col_labels.iter().position(|l| l == col)?;
        Some(self.counts[[r, c]])
    }

    pub fn row_totals(&self) -> Array1<u64> {
        self.counts.sum_axis(Axis(1))
    }

    pub fn col_totals(&self) -> Array1<u64> {
        self.counts.sum_axis(Axis(0))
    }

    pub fn total(&self) -> u64 {
        self.counts.sum()
    }

    /// Counts expected under independence of the two margins:
    /// row total × column total / grand total per cell.
    ///
    /// An empty table (grand total 0) yields an all-zero table.
    pub fn expected(&self) -> ExpectedTable {
        let total = self.total() as f64;
        let rows = self.row_totals().mapv(|v| v as f64);
        let cols = self.col_totals().mapv(|v| v as f64);
        let values = Array2::from_shape_fn(self.shape(), |(i, j)| {
            if total > 0.0 { rows[i] * cols[j] / total } else { 0.0 }
        });
        ExpectedTable {
            row_labels: self.row_labels.clone(),
            col_labels: self.col_labels.clone(),
            values,
        }
    }
}

/// Expected counts under the independence null, labelled like the
/// [`ContingencyTable`] it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedTable {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    values: Array2<f64>,
}

impl ExpectedTable {
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let r = self.row_labels.iter().position(|l| l == row)?;
        let c = self.col_labels.iter().position(|l| l == col)?;
        Some(self.values[[r, c]])
    }
}

// Sorted distinct labels mapped to their dense index.
fn label_index(keys: &[String]) -> BTreeMap<String, usize> {
    let mut index: BTreeMap<String, usize> = keys.iter().map(|k| (k.clone(), 0)).collect();
    for (position, slot) in index.values_mut().enumerate() {
        *slot = position;
    }
    index
}
