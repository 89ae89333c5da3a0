//! Tracing setup for hosts and tools embedding the viewport engine.
//!
//! The engine only emits `tracing` events. Installing a subscriber stays the
//! host's decision; this helper covers the common headless case.

/// Installs a compact `tracing` fmt subscriber filtered by `RUST_LOG`.
///
/// `default_filter` applies when `RUST_LOG` is unset or unparsable.
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}
