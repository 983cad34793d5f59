use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber that writes through the test harness' output capture.
///
/// The filter is read from `RUST_LOG` (nothing is printed if it is unset).
/// Calling this more than once is harmless.
pub fn initialize_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
