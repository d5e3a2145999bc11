use serde::Serialize;

use crate::types::RunSample;

/// Aggregate statistics over the collected samples.
///
/// Only the mean reaches the default output; min and max are carried for the
/// JSON report and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Compute mean/min/max over the samples, or `None` when no run succeeded.
pub fn summarize(samples: &[RunSample]) -> Option<Summary> {
    if samples.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in samples {
        sum += sample.seconds;
        min = min.min(sample.seconds);
        max = max.max(sample.seconds);
    }

    Some(Summary {
        mean: sum / samples.len() as f64,
        min,
        max,
        count: samples.len(),
    })
}
