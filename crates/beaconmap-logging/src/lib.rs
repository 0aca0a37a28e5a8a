//! Tracing subscriber setup shared by Beaconmap binaries.
//!
//! Filter directives come from `RUST_LOG` when set, otherwise from the
//! caller's default. Output goes to stderr so stdout stays clean for results.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directives: run summaries at info, per-observation detail off.
pub const DEFAULT_DIRECTIVES: &str = "beaconmap=info,beaconmap_cli=info,beaconmap_entries=warn";

/// Build the filter from `RUST_LOG`, falling back to `default_directives`.
pub fn env_filter(default_directives: &str) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_or_default(from_env.as_deref(), default_directives)
}

/// Parse `directives` if present and valid, otherwise `default_directives`.
pub fn filter_or_default(directives: Option<&str>, default_directives: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directives))
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init(default_directives: &str) -> bool {
    let initialized = tracing_subscriber::registry()
        .with(env_filter(default_directives))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok();
    if initialized {
        tracing::debug!(default_directives, "Logging initialized");
    }
    initialized
}
