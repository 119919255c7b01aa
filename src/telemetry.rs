//! Opt-in log output for hosts embedding the widgets.
//!
//! The crate itself only emits `tracing` events. Hosts that have no
//! subscriber of their own can install a compact one here.

/// Filter applied when `RUST_LOG` is unset: widget lifecycle at `debug`,
/// everything else at `info`.
pub const DEFAULT_FILTER: &str = "info,showcase_rs=debug";

/// Installs a compact subscriber using [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Installs a compact fmt subscriber. `RUST_LOG` takes precedence over
/// `fallback_filter`.
///
/// Returns `false` when the `telemetry` feature is off, the fallback filter
/// does not parse, or a global subscriber is already set.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match EnvFilter::try_new(fallback_filter) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
