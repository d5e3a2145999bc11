use std::path::PathBuf;
use std::process;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use attnbench::config;
use attnbench::display;
use attnbench::runner;
use attnbench::stats;
use attnbench::types::{BenchConfig, KernelParams};

#[derive(Parser)]
#[command(
    name = "attnbench",
    version,
    about = "Run an attention kernel binary repeatedly and report its average execution time"
)]
struct Cli {
    /// Path to the kernel binary to execute
    binary: PathBuf,

    /// Number of times to run the binary (default: 5, or `defaults.runs`
    /// from attnbench.toml)
    #[arg(long)]
    runs: Option<usize>,

    /// Emit a JSON report instead of the bare mean
    #[arg(long)]
    json: bool,

    /// Number of query rows
    #[arg(long = "n_q")]
    n_q: i64,

    /// Number of key rows
    #[arg(long = "n_k")]
    n_k: i64,

    /// Key dimension
    #[arg(long = "d_k")]
    d_k: i64,

    /// Value dimension
    #[arg(long = "d_v")]
    d_v: i64,

    /// Sparsity level shared by all operands
    #[arg(long)]
    sparsity: f64,

    /// Storage format for Q (e.g. dense, csr, csc)
    #[arg(long = "QFormat")]
    q_format: String,

    /// Storage format for K
    #[arg(long = "KFormat")]
    k_format: String,

    /// Storage format for V
    #[arg(long = "VFormat")]
    v_format: String,

    /// Whether the kernel should sample its inputs (0 or 1)
    #[arg(long)]
    sample: i64,

    /// Whether the kernel should convert its inputs (0 or 1)
    #[arg(long)]
    convert: i64,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let file_config = config::load()?;
    let runs = config::resolve_runs(cli.runs, file_config.as_ref());

    let bench = BenchConfig {
        binary: cli.binary,
        runs,
        params: KernelParams {
            n_q: cli.n_q,
            n_k: cli.n_k,
            d_k: cli.d_k,
            d_v: cli.d_v,
            sparsity: cli.sparsity,
            q_format: cli.q_format,
            k_format: cli.k_format,
            v_format: cli.v_format,
            sample: cli.sample,
            convert: cli.convert,
        },
    };

    let samples = runner::run_benchmark(&bench)?;
    let summary = stats::summarize(&samples);

    if cli.json {
        let output = display::format_json(&bench, &samples, summary.as_ref(), Utc::now());
        println!("{}", output);
    } else {
        match summary {
            Some(summary) => println!("{}", display::format_mean(&summary)),
            None => println!("{}", display::NO_RUNS_MESSAGE),
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
