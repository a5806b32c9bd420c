use tracing_subscriber::prelude::*;

/// Initializes a tracing Subscriber for logging.
///
/// Filtered by `RUST_LOG`, written to stderr so that stdout stays machine readable.
pub fn subscriber() {
    tracing_subscriber::Registry::default()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init()
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::from_default_env()
}

/// Only colorize output when writing to a terminal that supports it.
pub fn enable_paint() {
    yansi::whenever(yansi::Condition::TTY_AND_COLOR);
}
