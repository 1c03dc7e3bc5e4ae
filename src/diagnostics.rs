//! Structured logging hooks for the hypothesis tests.
//!
//! With the `obs_slog` feature the hooks write to a terminal `slog` logger
//! (full format over an async drain) built on first use. Without the
//! feature every hook is a no-op, so test code calls them unconditionally.
//!
//! Records emitted:
//! - `debug` when a test completes (test name, observations, statistic,
//!   p-value),
//! - `debug` when a test rejects its input (test name, error kind, message),
//! - `info` when a correlation method name falls back to Pearson.
use crate::statistical_tests::errors::StatsError;

#[cfg(feature = "obs_slog")]
use slog::{Drain, Logger, o};
#[cfg(feature = "obs_slog")]
use std::sync::OnceLock;

#[cfg(feature = "obs_slog")]
static LOGGER: OnceLock<Logger> = OnceLock::new();

#[cfg(feature = "obs_slog")]
fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| {
        let decorator = slog_term::TermDecorator::new().build();
        let drain = slog_term::FullFormat::new(decorator).build().fuse();
        let drain = slog_async::Async::new(drain).build().fuse();
        Logger::root(drain, o!("crate" => "eda_stats"))
    })
}

/// Report a completed test.
pub(crate) fn record_outcome(test: &'static str, observations: usize, statistic: Option<f64>, pvalue: f64) {
    #[cfg(feature = "obs_slog")]
    slog::debug!(
        logger(),
        "test completed";
        "test" => test,
        "observations" => observations,
        "statistic" => statistic,
        "pvalue" => pvalue
    );
    #[cfg(not(feature = "obs_slog"))]
    let _ = (test, observations, statistic, pvalue);
}

/// Report a test that refused its input.
pub(crate) fn record_rejection(test: &'static str, err: &StatsError) {
    #[cfg(feature = "obs_slog")]
    slog::debug!(
        logger(),
        "test rejected input";
        "test" => test,
        "kind" => %err.kind(),
        "error" => %err
    );
    #[cfg(not(feature = "obs_slog"))]
    let _ = (test, err);
}

/// Report that an unrecognised method name was resolved to a default.
pub(crate) fn record_method_fallback(requested: &str, used: &'static str) {
    #[cfg(feature = "obs_slog")]
    slog::info!(
        logger(),
        "unknown correlation method, using default";
        "requested" => requested,
        "used" => used
    );
    #[cfg(not(feature = "obs_slog"))]
    let _ = (requested, used);
}
