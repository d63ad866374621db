use std::path::Path;

use serde::Deserialize;

use crate::constants::*;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/sentiscope/config.toml
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the analysis service
    pub server_url: String,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Theme name (built-in or custom)
    pub theme: String,
    /// UI language (en, es)
    pub lang: String,
    /// tracing filter directive used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            theme: "default".to_string(),
            lang: "en".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional — missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    server_url: Option<String>,
    request_timeout_secs: Option<u64>,
    theme: Option<String>,
    lang: Option<String>,
    log_level: Option<String>,
}

impl Config {
    /// Load config from ~/.config/sentiscope/config.toml, falling back to defaults
    /// for any missing fields. If the file doesn't exist, returns pure defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Config::default(), // No config file — use defaults
        };

        match toml::from_str::<FileConfig>(&content) {
            Ok(file_config) => Config::default().merge(file_config),
            Err(e) => {
                // Logging isn't up yet; it reads log_level from here.
                eprintln!(
                    "Warning: Failed to parse {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Config::default()
            }
        }
    }

    /// Merge file values over defaults
    fn merge(mut self, file_config: FileConfig) -> Self {
        if let Some(v) = file_config.server_url {
            let v = v.trim();
            if !v.is_empty() {
                self.server_url = v.trim_end_matches('/').to_string();
            }
        }
        if let Some(v) = file_config.request_timeout_secs {
            self.request_timeout_secs = v.max(MIN_REQUEST_TIMEOUT_SECS);
        }
        if let Some(v) = file_config.theme {
            if !v.is_empty() {
                self.theme = v;
            }
        }
        if let Some(v) = file_config.lang {
            if LANGUAGES.contains(&v.as_str()) {
                self.lang = v;
            } else {
                eprintln!("Warning: unsupported language '{}', using '{}'.", v, self.lang);
            }
        }
        if let Some(v) = file_config.log_level {
            if !v.is_empty() {
                self.log_level = v;
            }
        }
        self
    }
}
