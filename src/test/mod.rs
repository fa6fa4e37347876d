//! Helpers shared by the unit tests.


use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TEST_LOGGING: Once = Once::new();

/// Installs a `tracing` subscriber that writes through the test harness so output only shows up for
/// failing tests. Honors `RUST_LOG` and defaults to `debug`.
pub(crate) fn init_test_logging() {
    TEST_LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
