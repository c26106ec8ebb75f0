//! Common utilities for bochka-cmd

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a stderr subscriber and forwards `log` records from the library
/// into it. `RUST_LOG` overrides the level picked from `verbose`.
pub fn init_logging(verbose: u8) {
    tracing_log::LogTracer::init().ok();

    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}

/// Formats a yes/no answer the way the walkthrough prints booleans.
pub fn yes_no(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Formats an optional position, using -1 for "not found".
pub fn position(index: Option<usize>) -> String {
    index.map_or_else(|| "-1".to_string(), |i| i.to_string())
}
