//! Tracing setup for the `play` binary and for ad-hoc debugging of the model.
//!
//! The library only emits `tracing` records; installing a subscriber is left to
//! the embedding program.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing on stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, so the model's
/// per-move `debug!` and per-tile `trace!` records stay silent unless asked
/// for, e.g. `RUST_LOG=fivetwelve=trace`. Calling this twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
