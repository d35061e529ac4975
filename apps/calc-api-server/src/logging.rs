//! Process-wide `tracing` subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

fn build_filter(cfg: &LoggingConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::try_new(&cfg.level).unwrap_or_else(|e| {
        eprintln!("invalid logging.level '{}': {e}; falling back to 'info'", cfg.level);
        EnvFilter::new("info")
    })
}

/// Install the global subscriber. Output goes to stderr so that stdout stays
/// clean for `--print-config` and `check`.
///
/// Calling this twice is harmless: the second install is refused and reported.
pub fn init_logging(cfg: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(cfg))
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match cfg.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    if let Err(e) = installed {
        eprintln!("logging already initialized: {e}");
    }
}
