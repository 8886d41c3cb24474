//! Tracing subscriber for the `wof` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
///
/// Events go to stderr so they never interleave with program output on
/// stdout. The filter comes from `RUST_LOG`, defaulting to `warn` so that
/// rejected plugins are reported without any setup.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}
