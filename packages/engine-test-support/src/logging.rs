//! One-time tracing setup shared by the engine's unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test-writer subscriber once per process.
///
/// Filter: `TEST_LOG`, else `RUST_LOG`, else `"warn"`. Setting
/// `TEST_LOG_FORMAT=json` switches to JSON lines, which is handy when
/// grepping a trick-by-trick trace out of a failing property test.
///
/// ```bash
/// TEST_LOG=engine::domain=debug cargo test -p engine tests_game_flow
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let json = std::env::var("TEST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer() // captured per test by cargo/nextest
            .without_time();

        // Another harness may already own the global subscriber.
        if json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }
    });
}
