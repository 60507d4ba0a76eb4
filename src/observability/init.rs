//! Tracing subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Resolves the filter directive: `RUST_LOG`, then `trace_level`, then `"info"`.
#[must_use]
pub fn filter_directive(config: &Config, rust_log: Option<&str>) -> String {
    rust_log
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| "info".to_string())
}

/// Installs a stderr `fmt` subscriber filtered per [`filter_directive`].
///
/// Idempotent: only the first call in a process takes effect. An invalid
/// directive falls back to `"info"`.
pub fn init_tracing(config: &Config) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(config, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
