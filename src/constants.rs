//! Application-wide constants.
//!
//! Centralizes timings, capacities, layout sizes and default paths so the
//! renderer, state and event loop agree on them.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Event poll timeout (ms) while animations or a request are running.
pub const EVENT_POLL_MS: u64 = 16;
/// Event poll timeout (ms) when nothing is animating.
pub const IDLE_POLL_MS: u64 = 100;
/// Interval between spinner/pulse frames (ms).
pub const SPINNER_TICK_MS: u64 = 200;
/// Status message display duration (seconds).
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 5;
/// Default HTTP request timeout (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Minimum allowed HTTP request timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

// ── Animations ────────────────────────────────────────────────────
/// Total duration of the polarity/subjectivity counting animation (ms).
pub const COUNT_ANIMATION_MS: u64 = 800;
/// Counting animation tick length (ms).
pub const COUNT_TICK_MS: u64 = 16;
/// Delay before the first emotion bar starts filling (ms).
pub const BAR_STAGGER_BASE_MS: u64 = 50;
/// Additional delay per emotion row (ms).
pub const BAR_STAGGER_STEP_MS: u64 = 100;
/// Time an emotion bar takes to fill from 0 to its target width (ms).
pub const BAR_FILL_MS: u64 = 600;

// ── Capacities ────────────────────────────────────────────────────
/// Maximum number of history rows kept on screen.
pub const HISTORY_LIMIT: usize = 10;
/// Characters of the analyzed text shown in the result preview.
pub const PREVIEW_MAX_CHARS: usize = 80;

// ── Emotion Bar Colors ────────────────────────────────────────────
/// Percentage at or above which a bar uses the "strong" color.
pub const BAR_STRONG_PCT: f64 = 60.0;
/// Percentage at or above which a bar uses the "medium" color.
pub const BAR_MEDIUM_PCT: f64 = 30.0;

// ── UI Layout ─────────────────────────────────────────────────────
/// Width of the history sidebar (including borders).
pub const HISTORY_PANEL_WIDTH: u16 = 38;
/// Minimum height of the result summary panel (including borders).
pub const SUMMARY_PANEL_HEIGHT: u16 = 6;
/// Width of the emotion name column in the emotions panel.
pub const EMOTION_NAME_WIDTH: usize = 14;
/// Rows the sentence list scrolls per PageUp/PageDown.
pub const PAGE_SIZE: usize = 5;
/// Help overlay width.
pub const HELP_POPUP_WIDTH: u16 = 56;
/// Help overlay height.
pub const HELP_POPUP_HEIGHT: u16 = 22;
/// Notification popup width.
pub const NOTIFICATION_POPUP_WIDTH: u16 = 60;

// ── Analysis service ──────────────────────────────────────────────
/// Default base URL of the analysis service.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
/// Path of the analysis endpoint, relative to the base URL.
pub const ANALYZE_PATH: &str = "/analyze";

// ── Prometheus Metrics ────────────────────────────────────────────
/// Prometheus metrics output buffer initial capacity.
pub const PROM_BUFFER_CAPACITY: usize = 1024;

// ── Spinner Animation ─────────────────────────────────────────────
/// Spinner character sequence for loading indicators.
pub const SPINNER_CHARS: &[&str] = &["◐", "◓", "◑", "◒"];

// ── Supported Languages ───────────────────────────────────────────
/// Available UI languages for cycling.
pub const LANGUAGES: &[&str] = &["en", "es"];

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/sentiscope/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("sentiscope")
}

/// Returns `~/.config/sentiscope/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/sentiscope/themes/`.
pub fn custom_theme_dir() -> PathBuf {
    config_dir().join("themes")
}

/// Returns `~/.config/sentiscope/themes/<name>.toml`.
pub fn custom_theme_path(name: &str) -> PathBuf {
    custom_theme_dir().join(format!("{}.toml", name))
}

/// Returns `~/.local/share/sentiscope/logs/`.
pub fn log_dir() -> PathBuf {
    home_dir()
        .join(".local")
        .join("share")
        .join("sentiscope")
        .join("logs")
}
