//! Logging Infrastructure
//!
//! Diagnostics go to stderr. Stdout is reserved for the workflow's progress output.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "orders_workflow=info,content_client=info";

/// Initialize the logger with an explicit filter and output format
pub fn init_logger_with(log_level: Option<&str>, json: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Explicit directives win over `RUST_LOG`; invalid input falls back to the default
fn build_filter(log_level: Option<&str>) -> EnvFilter {
    let parsed = match log_level {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    };
    parsed.unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_overrides_default() {
        let filter = build_filter(Some("orders_workflow=debug"));
        assert_eq!(filter.to_string(), "orders_workflow=debug");
    }
}
