//! Tracing subscriber setup for hosts embedding the engine.
//!
//! Libraries only emit events; installing a subscriber is the host's
//! call. `init` is a convenience for binaries and tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
