//! statistical_tests::options: typed knobs shared by the tests.
//!
//! - [`Alternative`]: direction of the binomial alternative hypothesis.
//! - [`CorrelationMethod`]: Pearson or Spearman correlation.
//! - [`Significance`]: the caller's α and the reject/keep decision.
//!
//! String parsing lives here so the test functions only ever receive typed
//! values.

use crate::statistical_tests::errors::{StatsError, StatsResult};
use std::str::FromStr;

/// Alternative hypothesis of a one-parameter test.
///
/// - `TwoSided`: the true rate differs from `p0`.
/// - `Greater`: the true rate exceeds `p0`.
/// - `Less`: the true rate is below `p0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alternative {
    #[default]
    TwoSided,
    Greater,
    Less,
}

impl Alternative {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alternative::TwoSided => "two-sided",
            Alternative::Greater => "greater",
            Alternative::Less => "less",
        }
    }
}

impl FromStr for Alternative {
    type Err = StatsError;

    /// Parse an alternative from a string (case-insensitive).
    ///
    /// Accepts `"two-sided"` (also `"two_sided"`, `"two.sided"`),
    /// `"greater"` and `"less"`. Any other value returns
    /// `StatsError::UnknownAlternative`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "two-sided" | "two_sided" | "two.sided" => Ok(Alternative::TwoSided),
            "greater" => Ok(Alternative::Greater),
            "less" => Ok(Alternative::Less),
            _ => Err(StatsError::UnknownAlternative { name: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Alternative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Correlation coefficient family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorrelationMethod {
    #[default]
    Pearson,
    Spearman,
}

impl CorrelationMethod {
    /// Resolve a method name.
    ///
    /// `"spearman"` (any case) selects Spearman. Every other string,
    /// including typos, selects Pearson; the fallback is reported through
    /// [`crate::diagnostics`] so it does not go unnoticed.
    pub fn from_name(name: &str) -> CorrelationMethod {
        match name.trim().to_lowercase().as_str() {
            "spearman" => CorrelationMethod::Spearman,
            "pearson" => CorrelationMethod::Pearson,
            _ => {
                crate::diagnostics::record_method_fallback(name, "pearson");
                CorrelationMethod::Pearson
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CorrelationMethod::Pearson => "pearson",
            CorrelationMethod::Spearman => "spearman",
        }
    }
}

impl std::fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Significance: a validated significance level α.
///
/// Invariants
/// ----------
/// - `0 < alpha < 1`.
///
/// Notes
/// -----
/// - A p-value strictly below α rejects the null hypothesis; a p-value
///   equal to α does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Significance {
    alpha: f64,
}

impl Significance {
    /// Errors
    /// ------
    /// - `StatsError::InvalidSignificance` unless `0 < alpha < 1`.
    pub fn new(alpha: f64) -> StatsResult<Significance> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(StatsError::InvalidSignificance { alpha });
        }
        Ok(Significance { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// `true` when `pvalue < alpha`.
    pub fn rejects(&self, pvalue: f64) -> bool {
        pvalue < self.alpha
    }
}

impl Default for Significance {
    /// α = 0.05.
    fn default() -> Self {
        Significance { alpha: 0.05 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternative_parses_case_insensitively() {
        assert_eq!("Two-Sided".parse::<Alternative>(), Ok(Alternative::TwoSided));
        assert_eq!("two_sided".parse::<Alternative>(), Ok(Alternative::TwoSided));
        assert_eq!("GREATER".parse::<Alternative>(), Ok(Alternative::Greater));
        assert_eq!(" less ".parse::<Alternative>(), Ok(Alternative::Less));
    }

    #[test]
    fn alternative_rejects_unknown_names() {
        match "bigger".parse::<Alternative>() {
            Err(StatsError::UnknownAlternative { name }) => assert_eq!(name, "bigger"),
            other => panic!("expected UnknownAlternative, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Pin the lenient name resolution: only "spearman" selects Spearman,
    // everything else falls back to Pearson.
    //
    // Given
    // -----
    // - "spearman", "Spearman", "pearson", "kendall", "".
    //
    // Expect
    // ------
    // - Spearman, Spearman, Pearson, Pearson, Pearson.
    fn correlation_method_from_name_falls_back_to_pearson() {
        assert_eq!(CorrelationMethod::from_name("spearman"), CorrelationMethod::Spearman);
        assert_eq!(CorrelationMethod::from_name("Spearman"), CorrelationMethod::Spearman);
        assert_eq!(CorrelationMethod::from_name("pearson"), CorrelationMethod::Pearson);
        assert_eq!(CorrelationMethod::from_name("kendall"), CorrelationMethod::Pearson);
        assert_eq!(CorrelationMethod::from_name(""), CorrelationMethod::Pearson);
    }

    #[test]
    fn significance_validates_open_unit_interval() {
        assert!(Significance::new(0.05).is_ok());
        for alpha in [0.0, 1.0, -0.1, f64::NAN] {
            assert!(
                matches!(Significance::new(alpha), Err(StatsError::InvalidSignificance { .. })),
                "alpha = {alpha} should be rejected"
            );
        }
    }

    #[test]
    fn significance_rejects_strictly_below_alpha() {
        let level = Significance::default();

        assert_eq!(level.alpha(), 0.05);
        assert!(level.rejects(0.049));
        assert!(!level.rejects(0.05));
        assert!(!level.rejects(0.2));
    }
}
