//! Tracing subscriber setup for binaries.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the application.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber honoring `RUST_LOG` and `LOG_FORMAT`.
///
/// Falls back to the configured log level when `RUST_LOG` holds no usable
/// directives. Calling it twice is harmless; the second call is ignored.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
