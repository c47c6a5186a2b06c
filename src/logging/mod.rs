//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; stdout belongs to the
//! functions' own output. The filter comes from `STMATH_LOG` using
//! `EnvFilter` syntax and defaults to `warn`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::ENV_LOG_FILTER;
use crate::env::Env;

/// Filter used when `STMATH_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from the environment.
pub fn filter_from_env(env: &Env) -> EnvFilter {
    env.var(ENV_LOG_FILTER)
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global stderr subscriber. A second call is a no-op.
pub fn init(env: &Env) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter_from_env(env))
        .try_init();
}
