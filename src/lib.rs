//! eda_stats: classical hypothesis tests for exploratory data analysis, with
//! Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the test menu to Python via the `_eda_stats` extension module.
//! When the `python-bindings` feature is enabled, this module defines the
//! Python-facing classes and the `eda_stats.statistical_tests` submodule.
//!
//! Key behaviors
//! -------------
//! - Expose the boundary value types (`data`) and the test routines
//!   (`statistical_tests`) as the public crate surface.
//! - Define one `#[pyclass]` per test (`BinomialTest`, `FTest`, `TTest`,
//!   `Correlation`, `ChiSquare`) and the `#[pymodule]` initializer.
//! - Register the `statistical_tests` submodule in `sys.modules` so that
//!   dot-notation imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, input conversion, and error mapping.
//! - Python columns are coerced through [`data::RawValue`] exactly like Rust
//!   callers' data, so missing and non-numeric cells are handled identically
//!   on both sides.
//!
//! Conventions
//! -----------
//! - Each Python class is constructed from raw columns, runs its test
//!   eagerly, and exposes the result as read-only properties plus
//!   `to_dict()` and `is_significant(alpha=0.05)`.
//! - Errors from the core are raised as `ValueError` with the Rust message;
//!   malformed Python containers raise `TypeError`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`data`] and [`statistical_tests`]
//!   directly and can ignore the PyO3 items.
//! - The Python packaging layer imports `_eda_stats` and re-exports its
//!   classes from the top-level `eda_stats` package.

pub mod data;
mod diagnostics;
pub mod statistical_tests;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
use crate::{
    data::{Frame, PairedSample, RawValue, Sample},
    statistical_tests::{
        BinomialOutcome, ChiSquareOutcome, CorrelationMethod, CorrelationOutcome, FTestOutcome,
        Significance, TTestOutcome, TestOutcome,
    },
    utils::{extract_alternative, extract_contingency_table, extract_raw_values, outcome_to_dict},
};

#[cfg(feature = "python-bindings")]
fn group_samples<'py>(
    values: &Bound<'py, PyAny>, groups: &Bound<'py, PyAny>, group_a: &str, group_b: &str,
) -> PyResult<(Sample, Sample)> {
    let frame = Frame::new()
        .with_column("group", extract_raw_values(groups)?)?
        .with_column("value", extract_raw_values(values)?)?;
    let a = frame.group_sample("group", group_a, "value")?;
    let b = frame.group_sample("group", group_b, "value")?;
    Ok((a, b))
}

#[cfg(feature = "python-bindings")]
fn raw_sample(raw_data: &Bound<'_, PyAny>) -> PyResult<Sample> {
    let cells: Vec<RawValue> = extract_raw_values(raw_data)?;
    Ok(Sample::from_raw(&cells))
}

/// BinomialTest: Python-facing wrapper for the exact binomial test.
///
/// Constructed via `BinomialTest(k, n, p0=0.5, alternative="two-sided")`;
/// all computation is forwarded to [`BinomialOutcome::binomial_test`].
#[cfg(feature = "python-bindings")]
#[pyclass(module = "eda_stats.statistical_tests")]
pub struct BinomialTest {
    inner: BinomialOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl BinomialTest {
    #[new]
    #[pyo3(
        text_signature = "(k, n, /, p0=0.5, alternative='two-sided')",
        signature = (k, n, p0 = 0.5, alternative = None)
    )]
    pub fn binomial_test(
        k: i64, n: i64, p0: f64, alternative: Option<&str>,
    ) -> PyResult<BinomialTest> {
        let alternative = extract_alternative(alternative)?;
        let inner = BinomialOutcome::binomial_test(k, n, p0, alternative)?;
        Ok(BinomialTest { inner })
    }

    #[getter]
    pub fn k(&self) -> i64 {
        self.inner.k()
    }

    #[getter]
    pub fn n(&self) -> i64 {
        self.inner.n()
    }

    #[getter]
    pub fn p0(&self) -> f64 {
        self.inner.p0()
    }

    /// Observed success rate k / n.
    #[getter]
    pub fn rate(&self) -> f64 {
        self.inner.rate()
    }

    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.pvalue()
    }

    #[getter]
    pub fn alternative(&self) -> &'static str {
        self.inner.alternative().as_str()
    }

    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        outcome_to_dict(py, &self.inner)
    }

    #[pyo3(signature = (alpha = 0.05))]
    pub fn is_significant(&self, alpha: f64) -> PyResult<bool> {
        Ok(self.inner.is_significant(Significance::new(alpha)?))
    }
}

/// FTest: Python-facing wrapper for the two-sample variance-ratio test.
///
/// Constructed from two columns, `FTest(x, y)`, or from a value column
/// split by a grouping column, `FTest.from_groups(values, groups, a, b)`.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "eda_stats.statistical_tests")]
pub struct FTest {
    inner: FTestOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl FTest {
    #[new]
    #[pyo3(text_signature = "(x, y, /)")]
    pub fn f_test<'py>(x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>) -> PyResult<FTest> {
        let inner = FTestOutcome::f_test(&raw_sample(x)?, &raw_sample(y)?)?;
        Ok(FTest { inner })
    }

    #[staticmethod]
    #[pyo3(text_signature = "(values, groups, group_a, group_b, /)")]
    pub fn from_groups<'py>(
        values: &Bound<'py, PyAny>, groups: &Bound<'py, PyAny>, group_a: &str, group_b: &str,
    ) -> PyResult<FTest> {
        let (a, b) = group_samples(values, groups, group_a, group_b)?;
        Ok(FTest { inner: FTestOutcome::f_test(&a, &b)? })
    }

    #[getter]
    pub fn n1(&self) -> usize {
        self.inner.n1()
    }

    #[getter]
    pub fn n2(&self) -> usize {
        self.inner.n2()
    }

    #[getter]
    pub fn var1(&self) -> f64 {
        self.inner.var1()
    }

    #[getter]
    pub fn var2(&self) -> f64 {
        self.inner.var2()
    }

    /// Larger variance over smaller variance.
    #[getter(F)]
    pub fn f(&self) -> f64 {
        self.inner.f()
    }

    #[getter]
    pub fn dfn(&self) -> usize {
        self.inner.dfn()
    }

    #[getter]
    pub fn dfd(&self) -> usize {
        self.inner.dfd()
    }

    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.pvalue()
    }

    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        outcome_to_dict(py, &self.inner)
    }

    #[pyo3(signature = (alpha = 0.05))]
    pub fn is_significant(&self, alpha: f64) -> PyResult<bool> {
        Ok(self.inner.is_significant(Significance::new(alpha)?))
    }
}

/// TTest: Python-facing wrapper for the two-sample t-test.
///
/// `equal_var=False` (default) runs Welch's test; `True` pools the
/// variances.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "eda_stats.statistical_tests")]
pub struct TTest {
    inner: TTestOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl TTest {
    #[new]
    #[pyo3(text_signature = "(x, y, /, equal_var=False)", signature = (x, y, equal_var = false))]
    pub fn t_test<'py>(
        x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, equal_var: bool,
    ) -> PyResult<TTest> {
        let inner = TTestOutcome::t_test(&raw_sample(x)?, &raw_sample(y)?, equal_var)?;
        Ok(TTest { inner })
    }

    #[staticmethod]
    #[pyo3(
        text_signature = "(values, groups, group_a, group_b, /, equal_var=False)",
        signature = (values, groups, group_a, group_b, equal_var = false)
    )]
    pub fn from_groups<'py>(
        values: &Bound<'py, PyAny>, groups: &Bound<'py, PyAny>, group_a: &str, group_b: &str,
        equal_var: bool,
    ) -> PyResult<TTest> {
        let (a, b) = group_samples(values, groups, group_a, group_b)?;
        Ok(TTest { inner: TTestOutcome::t_test(&a, &b, equal_var)? })
    }

    #[getter]
    pub fn n1(&self) -> usize {
        self.inner.n1()
    }

    #[getter]
    pub fn n2(&self) -> usize {
        self.inner.n2()
    }

    #[getter]
    pub fn mean1(&self) -> f64 {
        self.inner.mean1()
    }

    #[getter]
    pub fn mean2(&self) -> f64 {
        self.inner.mean2()
    }

    #[getter]
    pub fn t(&self) -> f64 {
        self.inner.t()
    }

    #[getter]
    pub fn df(&self) -> f64 {
        self.inner.df()
    }

    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.pvalue()
    }

    #[getter]
    pub fn equal_var(&self) -> bool {
        self.inner.equal_var()
    }

    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        outcome_to_dict(py, &self.inner)
    }

    #[pyo3(signature = (alpha = 0.05))]
    pub fn is_significant(&self, alpha: f64) -> PyResult<bool> {
        Ok(self.inner.is_significant(Significance::new(alpha)?))
    }
}

/// Correlation: Python-facing wrapper for Pearson / Spearman correlation.
///
/// Unrecognised `method` names fall back to Pearson; the `method` property
/// reports the method actually used.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "eda_stats.statistical_tests")]
pub struct Correlation {
    inner: CorrelationOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Correlation {
    #[new]
    #[pyo3(text_signature = "(x, y, /, method='pearson')", signature = (x, y, method = "pearson"))]
    pub fn correlation<'py>(
        x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, method: &str,
    ) -> PyResult<Correlation> {
        let pairs = PairedSample::from_raw(&extract_raw_values(x)?, &extract_raw_values(y)?)?;
        let inner = CorrelationOutcome::correlation(&pairs, CorrelationMethod::from_name(method))?;
        Ok(Correlation { inner })
    }

    #[getter]
    pub fn n(&self) -> usize {
        self.inner.n()
    }

    #[getter]
    pub fn r(&self) -> f64 {
        self.inner.r()
    }

    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.pvalue()
    }

    #[getter]
    pub fn method(&self) -> &'static str {
        self.inner.method().as_str()
    }

    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        outcome_to_dict(py, &self.inner)
    }

    #[pyo3(signature = (alpha = 0.05))]
    pub fn is_significant(&self, alpha: f64) -> PyResult<bool> {
        Ok(self.inner.is_significant(Significance::new(alpha)?))
    }
}

/// ChiSquare: Python-facing wrapper for the χ² test of independence.
///
/// Constructed from two categorical columns, `ChiSquare(rows, cols)`, or
/// from explicit counts, `ChiSquare.from_counts(counts, row_labels=None,
/// col_labels=None)`. Observed and expected tables are returned as 2-D
/// numpy arrays whose axes follow `row_labels` / `col_labels`.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "eda_stats.statistical_tests")]
pub struct ChiSquare {
    inner: ChiSquareOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ChiSquare {
    #[new]
    #[pyo3(text_signature = "(rows, cols, /)")]
    pub fn chi_square<'py>(
        rows: &Bound<'py, PyAny>, cols: &Bound<'py, PyAny>,
    ) -> PyResult<ChiSquare> {
        let frame = Frame::new()
            .with_column("rows", extract_raw_values(rows)?)?
            .with_column("cols", extract_raw_values(cols)?)?;
        let inner = ChiSquareOutcome::chi_square_independence(&frame, "rows", "cols")?;
        Ok(ChiSquare { inner })
    }

    #[staticmethod]
    #[pyo3(
        text_signature = "(counts, /, row_labels=None, col_labels=None)",
        signature = (counts, row_labels = None, col_labels = None)
    )]
    pub fn from_counts(
        counts: Vec<Vec<u64>>, row_labels: Option<Vec<String>>, col_labels: Option<Vec<String>>,
    ) -> PyResult<ChiSquare> {
        let table = extract_contingency_table(counts, row_labels, col_labels)?;
        Ok(ChiSquare { inner: ChiSquareOutcome::chi_square(&table)? })
    }

    #[getter]
    pub fn chi2(&self) -> f64 {
        self.inner.chi2()
    }

    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.pvalue()
    }

    #[getter]
    pub fn dof(&self) -> usize {
        self.inner.dof()
    }

    #[getter]
    pub fn row_labels(&self) -> Vec<String> {
        self.inner.table().row_labels().to_vec()
    }

    #[getter]
    pub fn col_labels(&self) -> Vec<String> {
        self.inner.table().col_labels().to_vec()
    }

    /// Observed counts, shape `(len(row_labels), len(col_labels))`.
    #[getter]
    pub fn observed<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<u64>> {
        self.inner.table().counts().clone().into_pyarray(py)
    }

    /// Expected counts under independence, same shape as `observed`.
    #[getter]
    pub fn expected<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.expected().values().clone().into_pyarray(py)
    }

    /// `table` and `expected` as labelled nested dicts, then chi2, pvalue
    /// and dof.
    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        outcome_to_dict(py, &self.inner)
    }

    #[pyo3(signature = (alpha = 0.05))]
    pub fn is_significant(&self, alpha: f64) -> PyResult<bool> {
        Ok(self.inner.is_significant(Significance::new(alpha)?))
    }
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _eda_stats<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let statistical_tests_mod = PyModule::new(_py, "statistical_tests")?;
    statistical_tests(_py, m, &statistical_tests_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("eda_stats.statistical_tests", statistical_tests_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn statistical_tests<'py>(
    _py: Python, eda_stats: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<BinomialTest>()?;
    m.add_class::<FTest>()?;
    m.add_class::<TTest>()?;
    m.add_class::<Correlation>()?;
    m.add_class::<ChiSquare>()?;
    eda_stats.add_submodule(m)?;
    Ok(())
}
