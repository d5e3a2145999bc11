use std::process::Command;
use std::time::Instant;

use anyhow::Result;

use crate::display;
use crate::errors::AttnBenchError;
use crate::types::{BenchConfig, RunSample, TimeSource};

/// Parse the kernel's self-reported duration from its stdout.
///
/// The protocol is a single float (seconds) followed by a newline; anything
/// else means the binary did not report a time and the caller falls back to
/// wall-clock measurement.
pub fn parse_reported_seconds(stdout: &str) -> Option<f64> {
    stdout.trim().parse::<f64>().ok()
}

/// Invoke the kernel binary `config.runs` times, strictly sequentially, and
/// collect one sample per successful run.
///
/// A run that exits non-zero is reported and dropped; its slot is not
/// back-filled, so the returned vec can be shorter than `config.runs`.
/// A spawn failure is fatal and aborts the remaining runs.
pub fn run_benchmark(config: &BenchConfig) -> Result<Vec<RunSample>> {
    let argv = config.params.to_argv();
    let mut samples = Vec::with_capacity(config.runs);

    for run in 1..=config.runs {
        let start = Instant::now();

        let output = Command::new(&config.binary)
            .args(&argv)
            .output()
            .map_err(|source| AttnBenchError::LaunchFailed {
                path: config.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            display::error(&format!(
                "run {}/{} failed ({}): {}",
                run,
                config.runs,
                output.status,
                stderr.trim()
            ));
            continue;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        match parse_reported_seconds(&stdout) {
            Some(seconds) => samples.push(RunSample {
                seconds,
                source: TimeSource::SelfReported,
            }),
            None => {
                let seconds = start.elapsed().as_secs_f64();
                display::warn(&format!(
                    "run {}/{}: output was not a duration; using wall-clock time {:.6}s",
                    run, config.runs, seconds
                ));
                samples.push(RunSample {
                    seconds,
                    source: TimeSource::WallClock,
                });
            }
        }
    }

    Ok(samples)
}
