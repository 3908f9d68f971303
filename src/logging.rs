//! Logging setup
//!
//! Library code emits `tracing` events; the binary installs a formatting
//! subscriber once at startup.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT_TRACING: Once = Once::new();

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` wins when set; otherwise `fallback` (e.g. `gastos=info`) is
/// used. Calling this more than once is harmless.
pub fn init(fallback: &str) {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
