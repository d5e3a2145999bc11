use std::path::PathBuf;

use serde::Serialize;

/// Full invocation plan, fixed once argument parsing completes.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub binary: PathBuf,
    pub runs: usize,
    pub params: KernelParams,
}

/// The ten positional parameters the kernel binary expects, in order.
#[derive(Debug, Clone)]
pub struct KernelParams {
    pub n_q: i64,
    pub n_k: i64,
    pub d_k: i64,
    pub d_v: i64,
    pub sparsity: f64,
    pub q_format: String,
    pub k_format: String,
    pub v_format: String,
    pub sample: i64,
    pub convert: i64,
}

impl KernelParams {
    /// Render the parameters as the kernel's positional argv. Numbers use
    /// their default decimal form; format strings pass through unchanged.
    pub fn to_argv(&self) -> Vec<String> {
        vec![
            self.n_q.to_string(),
            self.n_k.to_string(),
            self.d_k.to_string(),
            self.d_v.to_string(),
            self.sparsity.to_string(),
            self.q_format.clone(),
            self.k_format.clone(),
            self.v_format.clone(),
            self.sample.to_string(),
            self.convert.to_string(),
        ]
    }
}

/// One timed run of the kernel binary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSample {
    pub seconds: f64,
    pub source: TimeSource,
}

/// Where a sample's duration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeSource {
    /// The binary printed its own measurement and we trusted it.
    SelfReported,
    /// The binary's output was not a number; we timed the run ourselves.
    WallClock,
}

impl TimeSource {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeSource::SelfReported => "self-reported",
            TimeSource::WallClock => "wall-clock",
        }
    }
}
