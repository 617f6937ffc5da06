//! Tracing subscriber setup

use crate::config::LoggingSettings;
use crate::domain::config_types::LogFormat;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to the configured level
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()))
}

/// Installs the global subscriber. Output goes to stderr so that command
/// output on stdout stays machine-readable.
pub fn init(settings: &LoggingSettings) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (tests, embedding); keep it
    let _ = match settings.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}
