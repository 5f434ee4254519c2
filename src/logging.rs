//! Installing a log subscriber.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the codec and the domain driver.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see every label as it is converted:
///   RUST_LOG=TRACE
///
/// Or to only see failures of the lossy domain functions:
///   RUST_LOG=idna_punycode::domain=WARN
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
