//! statistical_tests::errors: shared error type and Python bridge.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by every hypothesis test in
//! this crate and by the boundary types in [`crate::data`], together with a
//! conversion layer to Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`StatsResult`] and [`StatsError`] as the canonical result and
//!   error types for the binomial, F, t, correlation and chi-square tests.
//! - Classify every variant into one of three [`ErrorKind`]s
//!   (invalid argument, insufficient data, degenerate input) so callers can
//!   branch on the failure category without matching every variant.
//! - Attach human-readable `Display` messages to each variant so that the
//!   message can be shown to an end user verbatim.
//! - Implement `From<StatsError> for PyErr` to raise `ValueError` at the
//!   Python boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - A test returning `Err(StatsError)` has computed no statistic at all;
//!   there is no partial or sentinel outcome.
//! - `StatsError` values are small and cheap to clone.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of domain constraints
//!   (e.g. "k must satisfy 0 ≤ k ≤ n") rather than low-level details.
//! - Group names carried by variants are the positional names used in the
//!   outcome records (`"x"`, `"y"`, `"pairs"`).
//!
//! Testing notes
//! -------------
//! - Unit tests verify `Display` payload embedding and the kind mapping.
//!   The PyO3 conversion is exercised from Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type StatsResult<T> = Result<T, StatsError>;

/// Failure category of a [`StatsError`].
///
/// - `InvalidArgument`: a caller-supplied parameter lies outside its domain.
/// - `InsufficientData`: a sample is smaller than the statistical minimum.
/// - `DegenerateInput`: the computation is mathematically undefined for the
///   given data (e.g. zero variance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    InsufficientData,
    DegenerateInput,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::InsufficientData => write!(f, "insufficient data"),
            ErrorKind::DegenerateInput => write!(f, "degenerate input"),
        }
    }
}

/// StatsError: error conditions for the hypothesis-test library.
///
/// Purpose
/// -------
/// Represent every validation and computation failure that can occur while
/// building samples from raw columns or running one of the tests.
///
/// Variants
/// --------
/// - `NonPositiveTrials { n }`
///   The binomial trial count is not strictly positive.
/// - `SuccessesOutOfRange { k, n }`
///   The binomial success count lies outside `[0, n]`.
/// - `InvalidProbability { p0 }`
///   The baseline probability lies outside `[0, 1]` or is NaN.
/// - `InvalidSignificance { alpha }`
///   A significance level outside the open interval `(0, 1)`.
/// - `UnknownAlternative { name }`
///   A string that does not name a supported alternative hypothesis.
/// - `UnknownColumn { name }`
///   A column name not present in a [`Frame`](crate::data::Frame).
/// - `LengthMismatch { expected, actual }`
///   Columns that must be row-aligned have different lengths.
/// - `TableTooSmall { rows, cols }`
///   A contingency table with fewer than two categories on an axis.
/// - `InsufficientData { group, needed, found }`
///   Fewer usable observations than the test requires.
/// - `ZeroVariance { group }`
///   A sample's unbiased variance is exactly zero (F-test).
/// - `ZeroStandardError`
///   Both t-test samples are constant, so t is undefined.
/// - `ConstantInput { variable }`
///   A correlation variable is constant, so r is undefined.
/// - `ZeroExpectedCount { row, col }`
///   An expected cell count is zero, so χ² is undefined.
/// - `NonFinite { quantity }`
///   An intermediate quantity (a variance, a ratio) overflowed to ±∞ or
///   NaN even though every input was finite.
/// - `Distribution { reason }`
///   A reference distribution rejected its parameters.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`]
///   so it composes with `?` in downstream code.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    //------ Invalid arguments ------
    NonPositiveTrials { n: i64 },
    SuccessesOutOfRange { k: i64, n: i64 },
    InvalidProbability { p0: f64 },
    InvalidSignificance { alpha: f64 },
    UnknownAlternative { name: String },
    UnknownColumn { name: String },
    LengthMismatch { expected: usize, actual: usize },
    TableTooSmall { rows: usize, cols: usize },

    //------ Insufficient data ------
    InsufficientData { group: &'static str, needed: usize, found: usize },

    //------ Degenerate input ------
    ZeroVariance { group: &'static str },
    ZeroStandardError,
    ConstantInput { variable: &'static str },
    ZeroExpectedCount { row: String, col: String },
    NonFinite { quantity: &'static str },
    Distribution { reason: String },
}

impl StatsError {
    /// Failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::NonPositiveTrials { .. }
            | StatsError::SuccessesOutOfRange { .. }
            | StatsError::InvalidProbability { .. }
            | StatsError::InvalidSignificance { .. }
            | StatsError::UnknownAlternative { .. }
            | StatsError::UnknownColumn { .. }
            | StatsError::LengthMismatch { .. }
            | StatsError::TableTooSmall { .. } => ErrorKind::InvalidArgument,
            StatsError::InsufficientData { .. } => ErrorKind::InsufficientData,
            StatsError::ZeroVariance { .. }
            | StatsError::ZeroStandardError
            | StatsError::ConstantInput { .. }
            | StatsError::ZeroExpectedCount { .. }
            | StatsError::NonFinite { .. }
            | StatsError::Distribution { .. } => ErrorKind::DegenerateInput,
        }
    }
}

impl std::error::Error for StatsError {}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::NonPositiveTrials { n } => {
                write!(f, "Invalid trial count n = {n}. Must satisfy n > 0.")
            }
            StatsError::SuccessesOutOfRange { k, n } => {
                write!(f, "Invalid success count k = {k}. Must satisfy 0 ≤ k ≤ n = {n}.")
            }
            StatsError::InvalidProbability { p0 } => {
                write!(f, "Invalid baseline probability p0 = {p0}. Must satisfy 0 ≤ p0 ≤ 1.")
            }
            StatsError::InvalidSignificance { alpha } => {
                write!(f, "Invalid significance level alpha = {alpha}. Must satisfy 0 < alpha < 1.")
            }
            StatsError::UnknownAlternative { name } => write!(
                f,
                "Unknown alternative hypothesis {name:?} (expected 'two-sided', 'greater', or 'less')."
            ),
            StatsError::UnknownColumn { name } => write!(f, "Unknown column {name:?}."),
            StatsError::LengthMismatch { expected, actual } => write!(
                f,
                "Row-aligned columns must have equal length: expected {expected}, got {actual}."
            ),
            StatsError::TableTooSmall { rows, cols } => write!(
                f,
                "Contingency table must be at least 2x2, got {rows}x{cols}."
            ),
            StatsError::InsufficientData { group, needed, found } => write!(
                f,
                "Need at least {needed} observations in {group}, found {found}."
            ),
            StatsError::ZeroVariance { group } => write!(
                f,
                "Variance is zero in group {group}; F-test not meaningful."
            ),
            StatsError::ZeroStandardError => {
                write!(f, "Both samples are constant; t statistic is undefined.")
            }
            StatsError::ConstantInput { variable } => write!(
                f,
                "Variable {variable} is constant; correlation coefficient is undefined."
            ),
            StatsError::ZeroExpectedCount { row, col } => write!(
                f,
                "Expected count is zero in cell ({row}, {col}); chi-square is undefined."
            ),
            StatsError::NonFinite { quantity } => write!(
                f,
                "{quantity} is not finite (numeric overflow); rescale the data."
            ),
            StatsError::Distribution { reason } => {
                write!(f, "Reference distribution could not be built: {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<StatsError> for PyErr {
    fn from(err: StatsError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
