//! Tracing setup for binaries.
//!
//! The library only emits `tracing` events; it never installs a subscriber.
//! Binaries call [`setup_tracing`] once at startup.
//!
//! `RUST_LOG` wins when set; otherwise the filter from
//! [`DeskConfig::log_filter`](crate::config::DeskConfig::log_filter) is used.
//!
//! ```bash
//! RUST_LOG=order_desk=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Install a compact `fmt` subscriber filtered by `RUST_LOG` or `fallback`
///
/// Panics if a global subscriber is already installed.
pub fn setup_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(fallback))
        .with_target(false)
        .compact()
        .init();
}

fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
