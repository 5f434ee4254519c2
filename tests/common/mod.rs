//! Helpers shared by the integration tests.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the library.
///
/// Use the RUST_LOG environment variable to see them, e.g.:
///   RUST_LOG=TRACE cargo test
///
/// The library's own `logging::init_logging` is only available with the
/// `logging` feature and writes to stdout directly, so the tests install
/// their own subscriber that goes through the test harness's capture.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
