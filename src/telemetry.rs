//! Telemetry helpers for binaries embedding `camp-charts`.
//!
//! Tracing setup stays explicit and opt-in. Library code only emits events;
//! installing a subscriber is the host's decision.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Installs a compact `tracing` subscriber with the [`DEFAULT_LOG_DIRECTIVE`] fallback.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_LOG_DIRECTIVE)
}

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` wins over `fallback_directive` when set and parseable.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
