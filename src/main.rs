//! # Sentiscope - Terminal Client for Text Sentiment Analysis
//!
//! Sends text to a sentiment analysis service and renders the result:
//! an animated polarity/subjectivity summary, ranked emotion bars, a
//! per-sentence breakdown and a short history of recent queries.

#[macro_use]
extern crate rust_i18n;

// Load locale files from `locales/` directory, default to English
i18n!("locales", fallback = "en");

mod analysis;
mod app;
mod config;
pub mod constants;
mod history;
mod logging;
mod metrics;
mod ui;
mod utils;

use anyhow::Result;
use clap::Parser;

use config::Config;
use constants::{LANGUAGES, MIN_REQUEST_TIMEOUT_SECS};

/// Sentiscope - Terminal Sentiment Analysis Client
#[derive(Parser, Debug)]
#[command(name = "sentiscope", version, about = "A terminal client for a text sentiment analysis service")]
struct Cli {
    /// Base URL of the analysis service (e.g. "http://127.0.0.1:5000")
    #[arg(long, short = 'u', value_name = "URL")]
    url: Option<String>,

    /// Color theme (default, gruvbox, nord, dracula, or a custom theme name)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// UI language (en, es)
    #[arg(long, short = 'l', value_name = "LANG")]
    lang: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Enable Prometheus metrics endpoint on the given address (e.g. "0.0.0.0:9100")
    #[arg(long, value_name = "ADDR")]
    prometheus: Option<String>,

    /// Log at debug level (ignored when RUST_LOG is set)
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and apply CLI overrides to config
    let mut config = Config::load();
    if let Some(ref url) = cli.url {
        config.server_url = url.trim_end_matches('/').to_string();
    }
    if let Some(ref theme_name) = cli.theme {
        config.theme = theme_name.clone();
    }
    if let Some(ref lang) = cli.lang {
        if LANGUAGES.contains(&lang.as_str()) {
            config.lang = lang.clone();
        } else {
            eprintln!("Warning: unsupported language '{}', using '{}'.", lang, config.lang);
        }
    }
    if let Some(secs) = cli.timeout {
        config.request_timeout_secs = secs.max(MIN_REQUEST_TIMEOUT_SECS);
    }

    // Held until exit so buffered log lines get flushed
    let _log_guard = logging::init(&config, cli.verbose);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), ?config, "starting");

    // Set UI language (CLI > config > default "en")
    rust_i18n::set_locale(&config.lang);

    // Build and run the application
    let mut app = app::App::new(&config, cli.prometheus.as_deref())?;

    app.run().await
}
