//! Tracing setup for the `cheatsheet` binary and embedding hosts.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the host, or to `init_default_tracing` when the `telemetry` feature is on.

/// Installs a compact fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info";
