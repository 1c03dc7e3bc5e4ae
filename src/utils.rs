#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use numpy::IntoPyArray;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::{PyAny, PyDict, PyString},
};

#[cfg(feature = "python-bindings")]
use crate::{
    data::{ContingencyTable, RawValue},
    statistical_tests::{Alternative, FieldValue, TestOutcome},
};

/// Convert a one-dimensional Python column into raw cells.
///
/// Accepts lists, tuples, numpy arrays and pandas Series (the latter two
/// through their `tolist` method). `None` becomes `Missing`, strings stay
/// text, anything convertible to `float` becomes a number (NaN is kept as a
/// number here and coerced to missing downstream), and any other object is
/// kept as its `str()` text.
#[cfg(feature = "python-bindings")]
pub fn extract_raw_values<'py>(raw_data: &Bound<'py, PyAny>) -> PyResult<Vec<RawValue>> {
    if raw_data.is_instance_of::<PyString>() {
        return Err(PyTypeError::new_err("expected a 1-D sequence, got str"));
    }
    let column = if raw_data.hasattr("tolist")? {
        raw_data.call_method0("tolist")?
    } else {
        raw_data.clone()
    };
    let items: Vec<Bound<'py, PyAny>> = column.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D list, tuple, numpy.ndarray, or pandas.Series")
    })?;

    items.iter().map(raw_value).collect()
}

#[cfg(feature = "python-bindings")]
fn raw_value(item: &Bound<'_, PyAny>) -> PyResult<RawValue> {
    if item.is_none() {
        return Ok(RawValue::Missing);
    }
    if let Ok(text) = item.downcast::<PyString>() {
        return Ok(RawValue::Text(text.to_str()?.to_owned()));
    }
    match item.extract::<f64>() {
        Ok(number) => Ok(RawValue::Number(number)),
        Err(_) => Ok(RawValue::Text(item.str()?.to_str()?.to_owned())),
    }
}

#[cfg(feature = "python-bindings")]
pub fn extract_alternative(alternative: Option<&str>) -> PyResult<Alternative> {
    match alternative {
        Some(name) => Ok(name.parse::<Alternative>()?),
        None => Ok(Alternative::default()),
    }
}

/// Build a labelled table from nested count rows; labels default to
/// `"0"`, `"1"`, ... when omitted.
#[cfg(feature = "python-bindings")]
pub fn extract_contingency_table(
    counts: Vec<Vec<u64>>, row_labels: Option<Vec<String>>, col_labels: Option<Vec<String>>,
) -> PyResult<ContingencyTable> {
    let n_rows = counts.len();
    let n_cols = counts.first().map_or(0, Vec::len);
    if counts.iter().any(|row| row.len() != n_cols) {
        return Err(PyValueError::new_err("counts rows must all have the same length"));
    }
    let flat: Vec<u64> = counts.into_iter().flatten().collect();
    let matrix = Array2::from_shape_vec((n_rows, n_cols), flat)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let default_labels = |n: usize| (0..n).map(|i| i.to_string()).collect::<Vec<_>>();
    let table = ContingencyTable::from_counts(
        row_labels.unwrap_or_else(|| default_labels(n_rows)),
        col_labels.unwrap_or_else(|| default_labels(n_cols)),
        matrix,
    )?;
    Ok(table)
}

/// `{"row_labels": [...], "col_labels": [...], "values": ndarray}`.
#[cfg(feature = "python-bindings")]
fn labelled_table<'py>(
    py: Python<'py>, row_labels: &[String], col_labels: &[String], values: Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("row_labels", row_labels)?;
    dict.set_item("col_labels", col_labels)?;
    dict.set_item("values", values)?;
    Ok(dict)
}

/// `dict` of the outcome's named fields, in reporting order. Tables become
/// nested dicts holding their labels and a 2-D numpy array.
#[cfg(feature = "python-bindings")]
pub fn outcome_to_dict<'py, T: TestOutcome>(
    py: Python<'py>, outcome: &T,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    for (name, value) in outcome.fields() {
        match value {
            FieldValue::Int(v) => dict.set_item(name, v)?,
            FieldValue::Float(v) => dict.set_item(name, v)?,
            FieldValue::Bool(v) => dict.set_item(name, v)?,
            FieldValue::Text(v) => dict.set_item(name, v)?,
            FieldValue::Counts(t) => {
                let values = t.counts().clone().into_pyarray(py).into_any();
                dict.set_item(name, labelled_table(py, t.row_labels(), t.col_labels(), values)?)?
            }
            FieldValue::Expected(t) => {
                let values = t.values().clone().into_pyarray(py).into_any();
                dict.set_item(name, labelled_table(py, t.row_labels(), t.col_labels(), values)?)?
            }
        }
    }
    Ok(dict)
}
