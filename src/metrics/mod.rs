//! Prometheus metrics exporter for Sentiscope.
//!
//! When enabled via `--prometheus <addr>`, runs a tiny HTTP server that exposes
//! request counters and the latest result in Prometheus text exposition format
//! at `/metrics`.
//!
//! The main loop updates a shared `MetricsSnapshot` as requests finish, and the
//! HTTP server reads it on each scrape request.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::analysis::{AnalysisResult, AnalyzeError, FailureKind};
use crate::constants::PROM_BUFFER_CAPACITY;

/// Shared state that the main loop writes and the HTTP server reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub request_failures_total: u64,
    pub validation_failures_total: u64,
    pub history_entries: usize,
    pub last_polarity: Option<f64>,
    pub last_subjectivity: Option<f64>,
    pub last_request_duration: Option<Duration>,
}

impl MetricsSnapshot {
    pub fn record_request(&mut self) {
        self.requests_total += 1;
    }

    pub fn record_success(&mut self, result: &AnalysisResult, elapsed: Duration, history: usize) {
        self.last_polarity = Some(result.polarity);
        self.last_subjectivity = Some(result.subjectivity_or_zero());
        self.last_request_duration = Some(elapsed);
        self.history_entries = history;
    }

    pub fn record_failure(&mut self, error: &AnalyzeError) {
        match error.kind() {
            FailureKind::Validation => self.validation_failures_total += 1,
            FailureKind::Request => self.request_failures_total += 1,
        }
    }
}

/// Thread-safe handle to the metrics state.
pub type SharedMetrics = Arc<Mutex<MetricsSnapshot>>;

/// Start the Prometheus metrics HTTP server on a background thread.
///
/// Returns the `SharedMetrics` handle that the caller updates.
/// The server responds to `GET /metrics` with Prometheus text format.
/// All other paths return 404.
pub fn start_server(addr: &str) -> Result<SharedMetrics> {
    let server = tiny_http::Server::http(addr)
        .map_err(|e| anyhow!("Failed to bind Prometheus on {}: {}", addr, e))?;
    tracing::info!(addr, "prometheus exporter listening");
    Ok(spawn_server(server))
}

fn spawn_server(server: tiny_http::Server) -> SharedMetrics {
    let metrics: SharedMetrics = Arc::new(Mutex::new(MetricsSnapshot::default()));
    let metrics_clone = Arc::clone(&metrics);

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let is_metrics = request.url() == "/metrics";

            let response_text = if is_metrics {
                match metrics_clone.lock() {
                    Ok(snap) => render_metrics(&snap),
                    Err(_) => "# error: metrics lock poisoned\n".to_string(),
                }
            } else {
                "404 Not Found\n".to_string()
            };

            let (status_code, content_type) = if is_metrics {
                (200, &b"text/plain; version=0.0.4; charset=utf-8"[..])
            } else {
                (404, &b"text/plain"[..])
            };

            let mut response =
                tiny_http::Response::from_string(response_text).with_status_code(status_code);
            if let Ok(header) = tiny_http::Header::from_bytes(&b"Content-Type"[..], content_type) {
                response = response.with_header(header);
            }
            if let Err(e) = request.respond(response) {
                tracing::debug!(error = %e, "metrics response failed");
            }
        }
    });

    metrics
}

// ── Metric definition helpers ────────────────────────────────

/// A metric definition: name, help text, and type.
struct MetricDef {
    name: &'static str,
    help: &'static str,
    mtype: &'static str,
}

impl MetricDef {
    const fn gauge(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            mtype: "gauge",
        }
    }

    const fn counter(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            mtype: "counter",
        }
    }

    /// Write the HELP and TYPE lines for this metric.
    fn write_header(&self, out: &mut String) {
        out.push_str("# HELP ");
        out.push_str(self.name);
        out.push(' ');
        out.push_str(self.help);
        out.push('\n');
        out.push_str("# TYPE ");
        out.push_str(self.name);
        out.push(' ');
        out.push_str(self.mtype);
        out.push('\n');
    }

    /// Write header + a single value.
    fn emit(&self, out: &mut String, value: f64) {
        self.write_header(out);
        push_metric(out, self.name, value);
    }
}

// ── Static metric definitions ────────────────────────────────

const M_REQUESTS: MetricDef = MetricDef::counter(
    "sentiscope_requests_total",
    "Analysis requests sent to the service.",
);
const M_REQUEST_FAILURES: MetricDef = MetricDef::counter(
    "sentiscope_request_failures_total",
    "Analysis requests that failed or returned a non-success status.",
);
const M_VALIDATION_FAILURES: MetricDef = MetricDef::counter(
    "sentiscope_validation_failures_total",
    "Submissions rejected because the input was blank.",
);
const M_HISTORY: MetricDef =
    MetricDef::gauge("sentiscope_history_entries", "Entries in the history list.");
const M_POLARITY: MetricDef =
    MetricDef::gauge("sentiscope_last_polarity", "Polarity of the latest result.");
const M_SUBJECTIVITY: MetricDef = MetricDef::gauge(
    "sentiscope_last_subjectivity",
    "Subjectivity of the latest result.",
);
const M_DURATION: MetricDef = MetricDef::gauge(
    "sentiscope_last_request_duration_seconds",
    "Round-trip time of the latest successful request.",
);

// ── Rendering ────────────────────────────────────────────────

/// Render all metrics in Prometheus text exposition format.
fn render_metrics(snap: &MetricsSnapshot) -> String {
    let mut out = String::with_capacity(PROM_BUFFER_CAPACITY);

    out.push_str("# Sentiscope - Prometheus Metrics\n\n");

    M_REQUESTS.emit(&mut out, snap.requests_total as f64);
    M_REQUEST_FAILURES.emit(&mut out, snap.request_failures_total as f64);
    M_VALIDATION_FAILURES.emit(&mut out, snap.validation_failures_total as f64);
    M_HISTORY.emit(&mut out, snap.history_entries as f64);

    // Only once a result exists
    if let Some(v) = snap.last_polarity {
        M_POLARITY.emit(&mut out, v);
    }
    if let Some(v) = snap.last_subjectivity {
        M_SUBJECTIVITY.emit(&mut out, v);
    }
    if let Some(d) = snap.last_request_duration {
        M_DURATION.emit(&mut out, d.as_secs_f64());
    }

    out
}

/// Write a single Prometheus metric line.
fn push_metric(out: &mut String, name: &str, value: f64) {
    out.push_str(name);
    out.push(' ');
    if value.fract() == 0.0 && value.abs() < 1e15 {
        out.push_str(&(value as i64).to_string());
    } else {
        out.push_str(&format!("{:.6}", value));
    }
    out.push('\n');
}
