//! data::frame: named raw columns and the extraction steps callers use.
//!
//! Purpose
//! -------
//! Model the in-memory dataset a caller holds (e.g. an uploaded CSV) as an
//! ordered set of equally long [`RawValue`] columns, and provide the
//! extraction steps that feed the tests: group filtering for the two-sample
//! tests, pairwise extraction for correlation, and cross-tabulation for
//! chi-square.
//!
//! Key behaviors
//! -------------
//! - Group labels are compared through [`RawValue::as_category`], so a
//!   numeric group column (`1.0`, `2.0`) is addressed as `"1"`, `"2"`.
//! - [`Frame::group_labels`] lists the distinct non-missing labels, sorted.
//! - Extraction never mutates the frame; every result owns its data.
//!
//! Invariants & assumptions
//! ------------------------
//! - All columns have the same number of rows; [`Frame::with_column`]
//!   rejects a column of a different length.
//! - Column names are unique; adding an existing name replaces the column.

use crate::data::{
    sample::{PairedSample, Sample},
    table::ContingencyTable,
    value::RawValue,
};
use crate::statistical_tests::errors::{StatsError, StatsResult};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    values: Vec<RawValue>,
}

/// Frame: an ordered collection of named, row-aligned raw columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<Column>,
}

impl Frame {
    pub fn new() -> Frame {
        Frame::default()
    }

    /// Add (or replace) a column.
    ///
    /// Errors
    /// ------
    /// - `StatsError::LengthMismatch` when the frame already has rows and
    ///   `values.len()` differs from that row count.
    pub fn with_column(
        mut self, name: impl Into<String>, values: Vec<RawValue>,
    ) -> StatsResult<Frame> {
        let name = name.into();
        let others = self.columns.iter().filter(|c| c.name != name);
        if let Some(expected) = others.map(|c| c.values.len()).next() {
            if expected != values.len() {
                return Err(StatsError::LengthMismatch { expected, actual: values.len() });
            }
        }
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(column) => column.values = values,
            None => self.columns.push(Column { name, values }),
        }
        Ok(self)
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Raw cells of the named column.
    pub fn column(&self, name: &str) -> StatsResult<&[RawValue]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| StatsError::UnknownColumn { name: name.to_string() })
    }

    /// Distinct non-missing labels of a grouping column, sorted.
    pub fn group_labels(&self, group_col: &str) -> StatsResult<Vec<String>> {
        let labels: BTreeSet<String> = self
            .column(group_col)?
            .iter()
            .filter(|v| !v.is_missing())
            .map(RawValue::as_category)
            .collect();
        Ok(labels.into_iter().collect())
    }

    /// Numeric sample of `value_col` restricted to rows whose `group_col`
    /// label equals `label`.
    pub fn group_sample(&self, group_col: &str, label: &str, value_col: &str) -> StatsResult<Sample> {
        let groups = self.column(group_col)?;
        let values = self.column(value_col)?;
        let selected: Vec<RawValue> = groups
            .iter()
            .zip(values)
            .filter(|(g, _)| !g.is_missing() && g.as_category() == label)
            .map(|(_, v)| v.clone())
            .collect();
        Ok(Sample::from_raw(&selected))
    }

    /// Numeric sample of a whole column.
    pub fn sample(&self, value_col: &str) -> StatsResult<Sample> {
        Ok(Sample::from_raw(self.column(value_col)?))
    }

    /// Row-aligned pair of numeric columns with pairwise missing-row removal.
    pub fn paired(&self, x_col: &str, y_col: &str) -> StatsResult<PairedSample> {
        PairedSample::from_raw(self.column(x_col)?, self.column(y_col)?)
    }

    /// Contingency table of two categorical columns.
    pub fn crosstab(&self, row_col: &str, col_col: &str) -> StatsResult<ContingencyTable> {
        ContingencyTable::from_columns(self.column(row_col)?, self.column(col_col)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells<T: Into<RawValue> + Clone>(values: &[T]) -> Vec<RawValue> {
        values.iter().cloned().map(Into::into).collect()
    }

    fn ab_frame() -> Frame {
        Frame::new()
            .with_column("group", cells(&["A", "B", "A", "B", "A"]))
            .and_then(|f| f.with_column("value", cells(&[1.0, 10.0, 2.0, 20.0, 3.0])))
            .expect("columns are aligned")
    }

    #[test]
    fn with_column_rejects_ragged_columns() {
        let result = ab_frame().with_column("short", cells(&[1.0, 2.0]));

        assert!(matches!(result, Err(StatsError::LengthMismatch { expected: 5, actual: 2 })));
    }

    #[test]
    fn with_column_replaces_existing_name() {
        let frame = ab_frame().with_column("value", cells(&[0.0; 5])).expect("same length");

        assert_eq!(frame.column_names(), vec!["group", "value"]);
        assert_eq!(frame.sample("value").unwrap().mean(), Some(0.0));
    }

    #[test]
    fn column_reports_unknown_names() {
        match ab_frame().column("missing") {
            Err(StatsError::UnknownColumn { name }) => assert_eq!(name, "missing"),
            other => panic!("expected UnknownColumn, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that group filtering selects exactly the rows of one label.
    //
    // Given
    // -----
    // - group = [A, B, A, B, A], value = [1, 10, 2, 20, 3].
    //
    // Expect
    // ------
    // - Labels [A, B]; group A → [1, 2, 3]; group B → [10, 20].
    fn group_sample_filters_rows_by_label() {
        // Arrange
        let frame = ab_frame();

        // Act
        let labels = frame.group_labels("group").unwrap();
        let a = frame.group_sample("group", "A", "value").unwrap();
        let b = frame.group_sample("group", "B", "value").unwrap();

        // Assert
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(a.values().to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(b.values().to_vec(), vec![10.0, 20.0]);
    }

    #[test]
    fn group_labels_skip_missing_cells() {
        let frame = Frame::new()
            .with_column("g", vec![RawValue::from(2.0), RawValue::Missing, RawValue::from(1.0)])
            .unwrap();

        assert_eq!(frame.group_labels("g").unwrap(), vec!["1", "2"]);
        assert_eq!(frame.n_rows(), 3);
    }
}
