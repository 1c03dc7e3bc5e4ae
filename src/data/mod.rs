//! data: boundary value types for the hypothesis tests.
//!
//! Purpose
//! -------
//! Turn loosely-typed tabular data into the strongly-typed inputs of the
//! statistical core. Coercion happens exactly once, here, so the tests in
//! [`crate::statistical_tests`] only ever see finite numbers and string
//! category labels.
//!
//! Key behaviors
//! -------------
//! - [`RawValue`] models a single cell and owns the numeric and categorical
//!   coercion rules.
//! - [`Sample`] and [`PairedSample`] hold cleaned numeric observations;
//!   pairwise removal keeps paired rows aligned.
//! - [`ContingencyTable`] cross-tabulates two categorical columns, keeping
//!   missing values as the explicit [`UNKNOWN_CATEGORY`].
//! - [`Frame`] holds named columns and performs the extraction steps
//!   (group filtering, pairing, cross-tabulation) a caller needs before
//!   running a test.
//!
//! Conventions
//! -----------
//! - Constructors that can fail return
//!   [`StatsResult`](crate::statistical_tests::StatsResult); the only
//!   failures at this layer are ragged columns and unknown column names.
//! - Minimum sample sizes are a property of each test, not of these types.

pub mod frame;
pub mod sample;
pub mod table;
pub mod value;

pub use self::frame::Frame;
pub use self::sample::{PairedSample, Sample};
pub use self::table::{ContingencyTable, ExpectedTable};
pub use self::value::{RawValue, UNKNOWN_CATEGORY};
