use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// `POLAR_SUMMARY_LOG_LEVEL` wins over `RUST_LOG`; default `warn`.
pub fn log_directives<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get("POLAR_SUMMARY_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr so the table on stdout stays clean.
pub fn init() {
    let directives = log_directives(|k| std::env::var(k).ok());
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&directives))
        .init();
    tracing::debug!(%directives, "polar_summary: log filter");
}
