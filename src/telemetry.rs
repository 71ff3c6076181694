//! Opt-in `tracing` setup for hosts that do not bring their own subscriber.
//!
//! Chart events are logged under the `forecast_chart_rs` target: `debug` for
//! data and focus transitions, `trace` for pointer resolution, `warn` for
//! failed explanation requests.

/// Filter used when `RUST_LOG` is unset: this crate at `debug`, everything
/// else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,forecast_chart_rs=debug";

/// Installs a compact fmt subscriber filtered by [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with caller-supplied fallback directives.
///
/// `RUST_LOG` still takes precedence. Unparsable directives fall back to
/// [`DEFAULT_FILTER`].
#[must_use]
pub fn init_tracing(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directives))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Targets stay visible so interaction and focus logs can be told apart.
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}
