//! Logging setup.
//!
//! `RUST_LOG` overrides the default `info` filter, e.g.
//! `RUST_LOG=hello_eyes=trace` to watch every dispatched event.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
