//! Shared helpers for unit tests.
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::math::Point2;

/// Installs a test-writer subscriber once per process.
///
/// Default: WARN for everything, DEBUG for draftlis. Override with
/// `RUST_LOG`.
pub(crate) fn init_tracing() {
    let env_filter = EnvFilter::from_default_env()
        .add_directive(LevelFilter::WARN.into())
        .add_directive("draftlis=debug".parse().unwrap_or_default());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

pub(crate) fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}
