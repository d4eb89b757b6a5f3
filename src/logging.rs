//! Opt-in tracing initialization.

use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default; the embedding application owns stdout
/// and stderr. Set the `POCKETBAR_LOG` env var to a file path to enable
/// it, and `RUST_LOG` to adjust the filter (defaults to `info`).
pub fn init_tracing() {
    let Some(log_path) = std::env::var("POCKETBAR_LOG").ok() else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: failed to create log file: {log_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
