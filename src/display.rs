use chrono::{DateTime, Utc};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::stats::Summary;
use crate::types::{BenchConfig, RunSample};

/// Fixed line printed when every run failed (or zero runs were requested).
pub const NO_RUNS_MESSAGE: &str = "No successful runs recorded.";

/// The single machine-readable line of the default output.
pub fn format_mean(summary: &Summary) -> String {
    format!("{:.6}", summary.mean)
}

/// Emit a warning line to stderr, colored only when stderr is a terminal.
pub fn warn(msg: &str) {
    eprintln!(
        "{} {}",
        "warning:".if_supports_color(Stream::Stderr, |s| s.yellow()),
        msg
    );
}

/// Emit an error line to stderr, colored only when stderr is a terminal.
pub fn error(msg: &str) {
    eprintln!(
        "{} {}",
        "error:".if_supports_color(Stream::Stderr, |s| s.red()),
        msg
    );
}

/// JSON report format.
#[derive(Serialize)]
struct JsonReport {
    binary: String,
    runs_requested: usize,
    runs_completed: usize,
    samples: Vec<JsonSample>,
    mean_seconds: Option<f64>,
    min_seconds: Option<f64>,
    max_seconds: Option<f64>,
    completed_at: String,
}

#[derive(Serialize)]
struct JsonSample {
    seconds: f64,
    source: &'static str,
}

pub fn format_json(
    config: &BenchConfig,
    samples: &[RunSample],
    summary: Option<&Summary>,
    now: DateTime<Utc>,
) -> String {
    let report = JsonReport {
        binary: config.binary.to_string_lossy().into_owned(),
        runs_requested: config.runs,
        runs_completed: samples.len(),
        samples: samples
            .iter()
            .map(|s| JsonSample {
                seconds: s.seconds,
                source: s.source.as_str(),
            })
            .collect(),
        mean_seconds: summary.map(|s| s.mean),
        min_seconds: summary.map(|s| s.min),
        max_seconds: summary.map(|s| s.max),
        completed_at: now.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}
