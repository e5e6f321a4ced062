//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr and are separate from the progress lines the
//! reporter prints. `RUST_LOG` overrides the defaults.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = concat!(
    "warn,",
    "camunda_deploy=debug,",
    "camunda_deploy_application=debug,",
    "camunda_deploy_infrastructure=debug",
);

/// Installs the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let default = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
