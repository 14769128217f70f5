//! Tracing subscriber setup.
//!
//! Logs always go to stderr: stdout carries the program's output lines and
//! must stay clean. `RUST_LOG` overrides the default level.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// # Arguments
/// * `default_level` - Level used when `RUST_LOG` is unset (e.g. "warn",
///   "info"). If None, defaults to "warn" so a normal run emits nothing.
pub fn init_logging(default_level: Option<&str>) {
    let default = default_level.unwrap_or("warn");
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
