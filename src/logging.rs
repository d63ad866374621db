//! File logging. The terminal belongs to the TUI, so nothing goes to stderr.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::constants::log_dir;

/// Install the global subscriber writing to a daily-rolling file.
///
/// The returned guard flushes pending lines on drop; keep it alive for the
/// whole run. Returns `None` when the log directory can't be created.
pub fn init(config: &Config, verbose: bool) -> Option<WorkerGuard> {
    let dir = log_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: cannot create log dir {}: {}", dir.display(), e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&dir, "sentiscope.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let directive = filter_directive(
        std::env::var("RUST_LOG").ok(),
        &config.log_level,
        verbose,
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(non_blocking)
        .with_filter(filter);

    if tracing_subscriber::registry().with(file_layer).try_init().is_err() {
        return None;
    }
    Some(guard)
}

/// RUST_LOG wins, then `-v`, then the configured level.
fn filter_directive(env: Option<String>, config_level: &str, verbose: bool) -> String {
    match env {
        Some(v) if !v.trim().is_empty() => v,
        _ if verbose => "debug".to_string(),
        _ => config_level.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_everything() {
        assert_eq!(
            filter_directive(Some("sentiscope=trace".into()), "warn", true),
            "sentiscope=trace"
        );
    }

    #[test]
    fn verbose_raises_to_debug() {
        assert_eq!(filter_directive(None, "warn", true), "debug");
        assert_eq!(filter_directive(Some("  ".into()), "warn", true), "debug");
    }

    #[test]
    fn config_level_is_the_fallback() {
        assert_eq!(filter_directive(None, "warn", false), "warn");
    }
}
