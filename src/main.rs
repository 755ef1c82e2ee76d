//! Benchmark runner for the loop-order kernels.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use matmul_loops::harness::{self, BenchConfig};
use matmul_loops::{DEFAULT_BLOCK_SIZE, Kernel, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(
    name = "matmul-loops",
    version,
    about = "Time square matrix multiplication under different loop orders"
)]
struct Cli {
    /// Matrix sizes to benchmark
    #[arg(long, value_delimiter = ',', default_values_t = harness::DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Timed runs per kernel per size
    #[arg(short, long, default_value_t = harness::DEFAULT_RUNS)]
    runs: usize,

    /// Untimed runs per kernel per size before timing
    #[arg(long, default_value_t = 0)]
    warmup: usize,

    /// Seed for matrix A
    #[arg(long, default_value_t = harness::DEFAULT_SEED_A)]
    seed_a: u64,

    /// Seed for matrix B
    #[arg(long, default_value_t = harness::DEFAULT_SEED_B)]
    seed_b: u64,

    /// Kernels to run; the first is the baseline (ijk, ikj, kij, ijk-t, blocked, blocked:<size>)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values = ["ijk", "ikj", "kij", "blocked"]
    )]
    kernels: Vec<String>,

    /// Block size for a bare `blocked` kernel
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Skip checking kernel results against the baseline
    #[arg(long)]
    no_verify: bool,

    /// Largest allowed per-entry difference when verifying
    #[arg(long, default_value_t = harness::DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Result<BenchConfig> {
        let kernels = self
            .kernels
            .iter()
            .map(|name| Kernel::parse_with_block_size(name, self.block_size))
            .collect::<matmul_loops::Result<Vec<_>>>()
            .context("bad --kernels value")?;

        Ok(BenchConfig {
            sizes: self.sizes.clone(),
            runs: self.runs,
            warmup: self.warmup,
            seed_a: self.seed_a,
            seed_b: self.seed_b,
            kernels,
            verify: !self.no_verify,
            tolerance: self.tolerance,
        })
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config()?;
    config.validate().context("invalid benchmark settings")?;
    info!(?config, "starting");

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("cannot create output file {}", path.display())
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        Format::Text => {
            writeln!(out, "Matrix Multiplication Benchmark")?;
            writeln!(out, "===============================")?;
            for &n in &config.sizes {
                let size_report = harness::run_size(&config, n)
                    .with_context(|| format!("benchmark failed at size {}", n))?;
                writeln!(out)?;
                report::write_size_text(&mut out, &size_report)?;
                out.flush()?;
            }
        }
        Format::Json => {
            let reports = harness::run(&config).context("benchmark failed")?;
            writeln!(out, "{}", report::to_json(&reports)?)?;
        }
        Format::Csv => {
            let reports = harness::run(&config).context("benchmark failed")?;
            report::write_csv(&mut out, &reports)?;
        }
    }

    out.flush()?;
    Ok(())
}
